//! Command handlers.
//!
//! Every scaffolding handler does the same three things: build an
//! [`Invocation`] from the parsed flags, execute a command id on a freshly
//! started [`PluginHost`], and hand the resulting report to the
//! [`OutputManager`]. No generation logic lives in this crate.

pub mod completions;
pub mod component;
pub mod config;
pub mod deps;
pub mod feature;
pub mod init;
pub mod plugins;
pub mod run;

use std::sync::Arc;

use broom_adapters::LocalFilesystem;
use broom_core::{
    application::{GenerateOptions, Invocation, PluginHost, builtin_registry},
    domain::StateManagement,
};
use tracing::{debug, instrument};

use crate::{
    cli::{StateArgs, WorkspaceArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Start a host over the local filesystem with every built-in plugin active.
pub fn start_host(config: &AppConfig) -> CliResult<PluginHost> {
    let registry = builtin_registry(Arc::new(LocalFilesystem::new()), &config.layout);
    Ok(PluginHost::start(registry)?)
}

/// Invocation for the shared workspace flags.
///
/// Without `--workspace` the current directory is the project folder.
pub fn invocation(args: &WorkspaceArgs) -> CliResult<Invocation> {
    let workspace = match &args.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir()
            .with_cli_context(|| "Failed to determine the current directory")?,
    };

    Ok(Invocation::new().in_workspace(workspace).with_options(
        GenerateOptions::default()
            .force(args.force)
            .dry_run(args.dry_run),
    ))
}

/// `--state`, falling back to the configured default.
pub fn resolve_state(args: &StateArgs, config: &AppConfig) -> StateManagement {
    args.state.map(Into::into).unwrap_or(config.state_management)
}

/// Execute `id` and render its report.
#[instrument(skip(config, invocation, output))]
pub fn dispatch(
    id: &str,
    invocation: &Invocation,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let host = start_host(config)?;
    debug!(workspace = ?invocation.workspace, dry_run = invocation.options.dry_run, "Dispatching");

    let report = host.execute(id, invocation)?;
    output.report(&report)
}
