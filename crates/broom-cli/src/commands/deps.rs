//! `broom deps`: add the state-management packages to `pubspec.yaml`.

use broom_core::application::command_id;
use tracing::instrument;

use crate::{
    cli::DepsArgs,
    commands::{dispatch, invocation, resolve_state},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: DepsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let state = resolve_state(&args.state, &config);
    dispatch(
        &command_id(state.as_str(), "dependencies"),
        &invocation(&args.workspace)?,
        &config,
        &output,
    )
}
