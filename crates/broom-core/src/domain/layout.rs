//! Directory names of the layered Flutter architecture.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Logical directory names for each architectural layer.
///
/// Every field has a default, so a partial override (from a config file or
/// the environment) falls back to the built-in value for anything omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub flutter_project_root: String,
    pub data: String,
    pub models: String,
    pub datasource: String,
    pub network: String,
    pub local: String,
    pub db: String,
    pub repository: String,
    pub service: String,
    pub presentation: String,
    pub pages: String,
    pub routes: String,
    pub widgets: String,
    pub core: String,
    pub base: String,
    pub injection: String,
    pub helper: String,
    pub mahas: String,
    pub mahas_input: String,
    pub mahas_widget: String,
    pub core_services: String,
    pub theme: String,
    pub utils: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            flutter_project_root: "lib".into(),
            data: "data".into(),
            models: "models".into(),
            datasource: "datasource".into(),
            network: "network".into(),
            local: "local".into(),
            db: "db".into(),
            repository: "repository".into(),
            service: "service".into(),
            presentation: "presentation".into(),
            pages: "pages".into(),
            routes: "routes".into(),
            widgets: "widgets".into(),
            core: "core".into(),
            base: "base".into(),
            injection: "injection".into(),
            helper: "helper".into(),
            mahas: "mahas".into(),
            mahas_input: "input".into(),
            mahas_widget: "widget".into(),
            core_services: "services".into(),
            theme: "theme".into(),
            utils: "utils".into(),
        }
    }
}

/// A named place in the layout where generated files land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// `lib/`
    LibRoot,
    CoreBase,
    CoreHelper,
    CoreServices,
    CoreTheme,
    CoreUtils,
    MahasWidget,
    NetworkDb,
    NetworkService,
    Pages,
    Routes,
    /// The strategy's state folder under `presentation/`.
    StateDir,
}

impl Layout {
    fn lib(&self) -> PathBuf {
        PathBuf::from(&self.flutter_project_root)
    }

    fn core_dir(&self) -> PathBuf {
        self.lib().join(&self.core)
    }

    fn network_dir(&self) -> PathBuf {
        self.lib()
            .join(&self.data)
            .join(&self.datasource)
            .join(&self.network)
    }

    fn presentation_dir(&self) -> PathBuf {
        self.lib().join(&self.presentation)
    }

    /// Path of `location` relative to the workspace root.
    pub fn resolve(&self, location: Location, state_dir: &str) -> PathBuf {
        match location {
            Location::LibRoot => self.lib(),
            Location::CoreBase => self.core_dir().join(&self.base),
            Location::CoreHelper => self.core_dir().join(&self.helper),
            Location::CoreServices => self.core_dir().join(&self.core_services),
            Location::CoreTheme => self.core_dir().join(&self.theme),
            Location::CoreUtils => self.core_dir().join(&self.utils),
            Location::MahasWidget => self.core_dir().join(&self.mahas).join(&self.mahas_widget),
            Location::NetworkDb => self.network_dir().join(&self.db),
            Location::NetworkService => self.network_dir().join(&self.service),
            Location::Pages => self.presentation_dir().join(&self.pages),
            Location::Routes => self.presentation_dir().join(&self.routes),
            Location::StateDir => self.presentation_dir().join(state_dir),
        }
    }

    /// Leaf directories of the layered architecture, relative to the
    /// workspace root. Creating each with its parents yields the full tree.
    pub fn directory_plan(&self, state_dir: &str) -> Vec<PathBuf> {
        let core = self.core_dir();
        let mahas = core.join(&self.mahas);
        let data = self.lib().join(&self.data);
        let datasource = data.join(&self.datasource);
        let network = datasource.join(&self.network);
        let local = datasource.join(&self.local);
        let presentation = self.presentation_dir();

        vec![
            core.join(&self.base),
            core.join(&self.injection),
            core.join(&self.helper),
            mahas.join(&self.mahas_input),
            mahas.join(&self.mahas_widget),
            core.join(&self.core_services),
            core.join(&self.theme),
            core.join(&self.utils),
            data.join(&self.models),
            network.join(&self.repository),
            network.join(&self.service),
            network.join(&self.db),
            local.join(&self.repository),
            local.join(&self.service),
            presentation.join(&self.pages),
            presentation.join(&self.routes),
            presentation.join(&self.widgets),
            presentation.join(state_dir),
        ]
    }
}
