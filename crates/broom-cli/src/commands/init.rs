//! `broom init`: lay out the project and seed the home feature.

use broom_core::application::command_id;
use tracing::{info, instrument};

use crate::{
    cli::InitArgs,
    commands::{dispatch, invocation, resolve_state},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Run `<state>.initialize` for the chosen state-management library.
#[instrument(skip_all)]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let state = resolve_state(&args.state, &config);
    let invocation = invocation(&args.workspace)?;

    info!(state = %state, "Initializing project");
    dispatch(
        &command_id(state.as_str(), "initialize"),
        &invocation,
        &config,
        &output,
    )?;

    if !invocation.options.dry_run {
        output.detail("Run `flutter pub get`, then `flutter run`")?;
    }
    Ok(())
}
