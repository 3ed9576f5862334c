//! `broom config`: inspect configuration and write default files.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }

        ConfigCommands::Init { local, force } => {
            let path = if local {
                PathBuf::from(LOCAL_CONFIG_FILE)
            } else {
                AppConfig::config_path()
            };
            if write_default(&path, force)? {
                output.success(&format!("Configuration created at {}", path.display()))?;
            } else {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::UnknownConfigKey {
        key: key.to_string(),
        available: config.keys(),
    })
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write the defaults to `path`; `false` when it exists and `force` is off.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = to_toml(&AppConfig::default())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;
    Ok(true)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use broom_core::domain::StateManagement;
    use tempfile::TempDir;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "layout.pages").unwrap(), "pages");
    }

    #[test]
    fn get_unknown_key_lists_available() {
        let cfg = AppConfig::default();
        match get_config_value(&cfg, "does.not.exist") {
            Err(CliError::UnknownConfigKey { available, .. }) => {
                assert!(available.contains(&"state_management".to_string()));
            }
            other => panic!("expected UnknownConfigKey, got {other:?}"),
        }
    }

    #[test]
    fn default_file_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(write_default(&path, false).unwrap());
        assert!(!write_default(&path, false).unwrap());
        assert!(write_default(&path, true).unwrap());

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: AppConfig = toml::from_str(&written).unwrap();
        assert_eq!(parsed.state_management, StateManagement::Provider);
        assert_eq!(parsed.layout.routes, "routes");
    }
}
