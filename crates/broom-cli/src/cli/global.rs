//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition.

use std::io::IsTerminal as _;
use std::path::PathBuf;

use clap::Args;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file, layered over the global and `.broom.toml` files.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Never prompt; missing arguments become errors.
    #[arg(
        long = "no-input",
        global = true,
        env = "BROOM_NO_INPUT",
        help = "Never prompt for missing arguments"
    )]
    pub no_input: bool,

    /// How command reports are printed.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// The command report as JSON on stdout.
    Json,
}

impl GlobalArgs {
    /// Prompts are allowed only on a terminal, outside quiet mode and
    /// without `--no-input`.
    pub fn interactive(&self) -> bool {
        !self.no_input
            && !self.quiet
            && self.output_format != OutputFormat::Json
            && std::io::stdin().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_disables_prompts() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            no_input: true,
            output_format: OutputFormat::Human,
        };
        assert!(!args.interactive());
    }

    #[test]
    fn json_output_disables_prompts() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            no_input: false,
            output_format: OutputFormat::Json,
        };
        assert!(!args.interactive());
    }
}
