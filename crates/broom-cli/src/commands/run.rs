//! `broom run`: execute any registered command by id.

use tracing::instrument;

use crate::{
    cli::RunArgs,
    commands::{dispatch, invocation},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Unknown ids surface as a not-found error listing every available id.
#[instrument(skip_all, fields(command = %args.command))]
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut invocation = invocation(&args.workspace)?;
    if let Some(name) = args.name {
        invocation = invocation.with_feature_name(name);
    }
    if let Some(option) = args.option {
        invocation = invocation.with_option(option);
    }

    dispatch(&args.command, &invocation, &config, &output)
}
