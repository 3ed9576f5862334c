//! `broom component`: generate widgets, theme files or utilities.

use broom_core::{
    application::{COMPONENTS_PLUGIN, command_id},
    domain::ComponentCategory,
};
use tracing::instrument;

use crate::{
    cli::ComponentArgs,
    commands::{dispatch, invocation},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(option = %args.option))]
pub fn execute(args: ComponentArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let category = ComponentCategory::from(args.category);
    let invocation = invocation(&args.workspace)?.with_option(args.option);

    dispatch(
        &command_id(COMPONENTS_PLUGIN, category.as_str()),
        &invocation,
        &config,
        &output,
    )
}
