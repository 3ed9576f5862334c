//! `broom plugins`: list plugins and the commands they contribute.

use serde::Serialize;

use crate::{
    cli::{ListFormat, PluginsArgs},
    commands::start_host,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct PluginEntry {
    id: String,
    name: String,
    description: String,
    commands: Vec<CommandEntry>,
}

#[derive(Debug, Serialize)]
struct CommandEntry {
    id: String,
    title: String,
}

pub fn execute(args: PluginsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let host = start_host(&config)?;

    let plugins: Vec<PluginEntry> = host
        .registry()
        .all()
        .iter()
        .map(|plugin| PluginEntry {
            id: plugin.id().to_string(),
            name: plugin.name().to_string(),
            description: plugin.description().to_string(),
            commands: plugin
                .as_command_provider()
                .map(|provider| {
                    provider
                        .commands()
                        .into_iter()
                        .map(|command| CommandEntry {
                            id: command.id,
                            title: command.title,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Available Plugins:")?;
            for plugin in &plugins {
                output.print(&format!("  {} ({})", plugin.name, plugin.id))?;
                output.detail(&plugin.description)?;
                for command in &plugin.commands {
                    output.print(&format!("    {:<24} {}", command.id, command.title))?;
                }
            }
        }
        ListFormat::Json => output.json(&plugins)?,
    }

    Ok(())
}
