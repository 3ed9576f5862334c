//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resolved [`Layout`]
//! and [`StateManagement`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `BROOM__STATE_MANAGEMENT`, `BROOM__LAYOUT__PAGES`, ...
//! 3. The file passed with `--config`
//! 4. `.broom.toml` in the current directory
//! 5. The global file at [`AppConfig::config_path`]
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use broom_core::domain::{Layout, StateManagement};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Name of the per-project configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".broom.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Used when `--state` is not given.
    pub state_management: StateManagement,
    /// Directory names of the generated tree.
    pub layout: Layout,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering files and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// global and local files it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path(), Path::new(LOCAL_CONFIG_FILE), config_file)
    }

    fn load_from(global: &Path, local: &Path, explicit: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("Failed to encode defaults")?)
            .add_source(toml_file(global).required(false))
            .add_source(toml_file(local).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(toml_file(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("BROOM")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.broom.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "broom", "broom")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The value at a dotted key such as `layout.pages`, rendered as text.
    pub fn get(&self, key: &str) -> Option<String> {
        let mut value = serde_json::to_value(self).ok()?;
        for part in key.split('.') {
            value = value.get_mut(part)?.take();
        }
        match value {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Every leaf key, sorted, for error suggestions.
    pub fn keys(&self) -> Vec<String> {
        fn walk(prefix: &str, value: &serde_json::Value, out: &mut Vec<String>) {
            match value {
                serde_json::Value::Object(map) => {
                    for (key, child) in map {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        walk(&path, child, out);
                    }
                }
                _ => out.push(prefix.to_string()),
            }
        }

        let mut keys = Vec::new();
        if let Ok(value) = serde_json::to_value(self) {
            walk("", &value, &mut keys);
        }
        keys.sort();
        keys
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load(dir: &TempDir, explicit: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
        AppConfig::load_from(
            &dir.path().join("global.toml"),
            &dir.path().join(".broom.toml"),
            explicit,
        )
    }

    #[test]
    fn defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let cfg = load(&dir, None).unwrap();
        assert_eq!(cfg.state_management, StateManagement::Provider);
        assert_eq!(cfg.layout.pages, "pages");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn local_file_overrides_global() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("global.toml"),
            "state_management = \"riverpod\"\n[layout]\npages = \"screens\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(".broom.toml"),
            "[layout]\npages = \"views\"\n",
        )
        .unwrap();

        let cfg = load(&dir, None).unwrap();
        assert_eq!(cfg.state_management, StateManagement::Riverpod);
        assert_eq!(cfg.layout.pages, "views");
        assert_eq!(cfg.layout.routes, "routes");
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load(&dir, Some(&missing)).is_err());
    }

    #[test]
    fn unknown_state_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".broom.toml"), "state_management = \"bloc\"\n").unwrap();
        assert!(load(&dir, None).is_err());
    }

    #[test]
    fn dotted_get() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("state_management").as_deref(), Some("provider"));
        assert_eq!(cfg.get("layout.mahas_input").as_deref(), Some("input"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("layout"), None);
        assert_eq!(cfg.get("nope"), None);
        assert!(cfg.keys().contains(&"layout.flutter_project_root".to_string()));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
