//! Output management and formatting.
//!
//! Every command ends in a [`CommandReport`]; [`OutputManager::report`]
//! renders it as human text or JSON.

use std::io::{self, IsTerminal};
use std::path::Path;

use broom_core::{
    application::{CommandReport, NotificationLevel},
    domain::{ManifestStatus, PatchOutcome},
};
use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliResult, IntoCli};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode; errors
    /// must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed detail line, indented under the previous message.
    pub fn detail(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("  {msg}")
        } else {
            format!("  {}", msg.dimmed())
        };
        self.term.write_line(&line)
    }

    /// Machine-readable output; printed even in quiet mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) -> CliResult<()> {
        let json = serde_json::to_string_pretty(value)
            .with_cli_context(|| "Failed to serialise output")?;
        self.term
            .write_line(&json)
            .with_cli_context(|| "Failed to write output")
    }

    // ── Reports ───────────────────────────────────────────────────────────

    /// Render a command's result.
    pub fn report(&self, report: &CommandReport) -> CliResult<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(report);
        }

        for notification in &report.notifications {
            match notification.level {
                NotificationLevel::Info => self.success(&notification.message)?,
                NotificationLevel::Warning => self.warning(&notification.message)?,
                NotificationLevel::Error => self.error(&notification.message)?,
            }
        }

        let generation = &report.generation;
        let verb = if generation.dry_run { "would create" } else { "created" };

        for path in &generation.created {
            self.detail(&format!("{verb} {}", path.display()))?;
        }
        for path in &generation.overwritten {
            self.detail(&format!("overwrote {}", path.display()))?;
        }
        for path in &generation.skipped {
            self.detail(&format!("kept existing {}", path.display()))?;
        }

        for patch in &generation.registries {
            if patch.outcome != PatchOutcome::AlreadyPresent {
                self.detail(&format!(
                    "{} {}: {}",
                    file_name(&patch.path),
                    patch.outcome,
                    patch.entry
                ))?;
            }
        }

        match &generation.manifest {
            Some(ManifestStatus::Updated(added)) => {
                self.info(&format!("pubspec.yaml: added {}", added.join(", ")))?;
                self.detail("Run `flutter pub get` to fetch them")?;
            }
            Some(ManifestStatus::UpToDate) => {
                self.info("pubspec.yaml: dependencies already up to date")?;
            }
            _ => {}
        }

        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use broom_core::application::GenerationReport;
    use std::path::PathBuf;

    fn make_manager_with(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            no_input: true,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    // Human avoids TTY detection in tests
    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        make_manager_with(quiet, no_color, OutputFormat::Human)
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        // write_line on Term::stdout() in tests is harmless; we just verify
        // the method returns Ok without panicking.
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        // error() must always write; calling it in quiet mode should not
        // silently drop the message.  We can't inspect the terminal buffer
        // here, but we verify it doesn't short-circuit to Ok(()) without
        // attempting the write.
        let out = make_manager(true, true);
        // Term::stdout() in a test environment won't panic even without a TTY.
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = make_manager(false, false);
        let no_color = make_manager(false, true);
        // Without a real TTY the exact value depends on the environment;
        // we test the accessor reflects what was set.
        assert!(colored.supports_color());
        assert!(!no_color.supports_color());
    }

    #[test]
    fn plain_format_disables_color() {
        let out = make_manager_with(false, false, OutputFormat::Plain);
        assert_eq!(out.format(), OutputFormat::Plain);
        assert!(!out.supports_color());
    }

    #[test]
    fn report_renders_in_every_format() {
        let mut generation = GenerationReport::new(true);
        generation.created.push(PathBuf::from("lib/main.dart"));
        generation.warn("pubspec.yaml not found");
        let report = CommandReport::new("provider.initialize", "Project initialized", generation);

        for format in [OutputFormat::Human, OutputFormat::Plain, OutputFormat::Json] {
            assert!(make_manager_with(false, true, format).report(&report).is_ok());
        }
    }
}
