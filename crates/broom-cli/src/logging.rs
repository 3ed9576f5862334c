//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `broom-core` and
//! `broom-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set. With
//! `--output-format json` events are written as JSON lines.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

const CRATES: [&str; 3] = ["broom", "broom_core", "broom_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(derive_level(args))));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if args.output_format == OutputFormat::Json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        let use_ansi = !args.no_color && std::io::stderr().is_terminal();
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(use_ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// One directive per workspace crate, all at `level`.
fn filter_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            no_input: true,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(derive_level(&args_with(0, false)), "warn");
        assert_eq!(derive_level(&args_with(1, false)), "info");
        assert_eq!(derive_level(&args_with(2, false)), "debug");
        assert_eq!(derive_level(&args_with(3, false)), "trace");
        assert_eq!(derive_level(&args_with(10, false)), "trace");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            filter_directives("debug"),
            "broom=debug,broom_core=debug,broom_adapters=debug"
        );
    }
}
