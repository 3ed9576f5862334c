//! `broom feature`: generate a feature and register it.

use broom_core::application::command_id;
use tracing::{debug, instrument};

use crate::{
    cli::{FeatureArgs, GlobalArgs},
    commands::{dispatch, invocation, resolve_state},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Run `<state>.feature`.
///
/// A missing name is prompted for on an interactive terminal; otherwise the
/// command itself rejects it with a missing-argument error.
#[instrument(skip_all)]
pub fn execute(
    args: FeatureArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let state = resolve_state(&args.state, &config);

    let name = match args.name {
        Some(name) => Some(name),
        None if global.interactive() => Some(prompt_name()?),
        None => None,
    };
    debug!(name = ?name, state = %state, "Feature requested");

    let mut invocation = invocation(&args.workspace)?;
    if let Some(name) = name {
        invocation = invocation.with_feature_name(name);
    }

    dispatch(
        &command_id(state.as_str(), "feature"),
        &invocation,
        &config,
        &output,
    )
}

#[cfg(feature = "interactive")]
fn prompt_name() -> CliResult<String> {
    use broom_core::domain::FeatureName;
    use dialoguer::{Input, theme::ColorfulTheme};

    use crate::error::CliError;

    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Feature name (e.g. user_profile)")
        .validate_with(|input: &String| -> Result<(), String> {
            FeatureName::parse(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| CliError::InvalidInput {
            message: "Failed to read the feature name".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt_name() -> CliResult<String> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
