//! State-management strategies.
//!
//! A [`Strategy`] is a static descriptor: which files a project and a
//! feature consist of, which registry files list features, and which
//! packages the generated code imports. One generic service interprets it,
//! so adding a strategy means adding a descriptor, not a generator.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    layout::{Layout, Location},
    manifest::Dependency,
    registry::{InsertionRequest, Locator, PatternLocator, PrependLocator},
    render::RenderContext,
    templates::{provider, riverpod, shared},
};

// ── StateManagement ──────────────────────────────────────────────────────────

/// The supported state-management libraries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateManagement {
    #[default]
    Provider,
    Riverpod,
}

impl StateManagement {
    pub const ALL: [Self; 2] = [Self::Provider, Self::Riverpod];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Riverpod => "riverpod",
        }
    }

    pub fn strategy(self) -> &'static Strategy {
        match self {
            Self::Provider => &PROVIDER,
            Self::Riverpod => &RIVERPOD,
        }
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateManagement {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownOption {
                category: "state management",
                option: s.to_string(),
                available: Self::ALL.iter().map(|kind| kind.as_str()).collect(),
            })
    }
}

// ── Descriptor pieces ────────────────────────────────────────────────────────

/// What to do when a generated file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Leave the existing file alone unless forced.
    KeepExisting,
    /// Always write. Used for `lib/main.dart`, which replaces the stock
    /// entry point of a fresh Flutter project.
    Replace,
}

/// A generated file: where it goes and what it contains.
#[derive(Debug, Clone, Copy)]
pub struct FileTemplate {
    pub location: Location,
    /// Path below `location`; may contain placeholders.
    pub path: &'static str,
    pub body: &'static str,
    pub policy: WritePolicy,
}

impl FileTemplate {
    pub const fn new(location: Location, path: &'static str, body: &'static str) -> Self {
        Self {
            location,
            path,
            body,
            policy: WritePolicy::KeepExisting,
        }
    }

    pub const fn replacing(self) -> Self {
        Self {
            policy: WritePolicy::Replace,
            ..self
        }
    }

    /// Rendered path relative to the workspace root.
    pub fn relative_path(&self, layout: &Layout, state_dir: &str, ctx: &RenderContext) -> PathBuf {
        layout
            .resolve(self.location, state_dir)
            .join(ctx.render(self.path))
    }
}

/// Where an entry goes inside its registry file.
#[derive(Debug, Clone, Copy)]
pub enum Placement {
    /// Inside the container matched by this `open`/`body`/`close` pattern.
    Container(&'static str),
    /// First line of the file.
    Prepend,
}

/// One line a feature adds to a registry file.
#[derive(Debug, Clone, Copy)]
pub struct EntryTemplate {
    pub text: &'static str,
    pub placement: Placement,
}

impl EntryTemplate {
    pub const fn container(text: &'static str, pattern: &'static str) -> Self {
        Self {
            text,
            placement: Placement::Container(pattern),
        }
    }

    pub const fn prepend(text: &'static str) -> Self {
        Self {
            text,
            placement: Placement::Prepend,
        }
    }

    pub fn request(&self, ctx: &RenderContext) -> Result<InsertionRequest, DomainError> {
        let locator: Arc<dyn Locator> = match self.placement {
            Placement::Container(pattern) => Arc::new(PatternLocator::new(pattern)?),
            Placement::Prepend => Arc::new(PrependLocator),
        };
        Ok(InsertionRequest::entry(ctx.render(self.text), locator))
    }
}

/// A file that lists one entry per feature.
#[derive(Debug, Clone, Copy)]
pub struct RegistryTemplate {
    pub location: Location,
    pub file_name: &'static str,
    pub skeleton: &'static str,
    pub entries: &'static [EntryTemplate],
}

// ── Strategy ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Strategy {
    pub kind: StateManagement,
    pub name: &'static str,
    pub description: &'static str,
    /// Folder under `presentation/` reserved for state classes.
    pub state_dir: &'static str,
    /// Suffix of the generated state class (`HomeProvider`, `HomeNotifier`).
    pub class_suffix: &'static str,
    pub dependencies: &'static [Dependency],
    /// Written once by project initialization.
    pub project_files: &'static [FileTemplate],
    /// Written for every feature.
    pub feature_files: &'static [FileTemplate],
    pub registries: &'static [RegistryTemplate],
}

impl Strategy {
    /// Render context for a feature, including strategy-level variables.
    pub fn context(&self, ctx: RenderContext) -> RenderContext {
        ctx.with_variable("stateClassName", self.class_suffix)
            .with_variable("stateDir", self.state_dir)
    }
}

const ROUTES_REGISTRY: RegistryTemplate = RegistryTemplate {
    location: Location::Routes,
    file_name: "app_routes.dart",
    skeleton: shared::APP_ROUTES,
    entries: &[EntryTemplate::container(
        shared::ROUTE_CONSTANT,
        shared::CLASS_APP_ROUTES,
    )],
};

const ROUTE_MAP_REGISTRY: RegistryTemplate = RegistryTemplate {
    location: Location::Routes,
    file_name: "app_routes_provider.dart",
    skeleton: shared::APP_ROUTES_PROVIDER,
    entries: &[
        EntryTemplate::prepend(shared::PAGE_IMPORT),
        EntryTemplate::container(shared::ROUTE_MAPPING, shared::RETURN_MAP),
    ],
};

pub static PROVIDER: Strategy = Strategy {
    kind: StateManagement::Provider,
    name: "Provider",
    description: "ChangeNotifier classes wired through MultiProvider",
    state_dir: "providers",
    class_suffix: "Provider",
    dependencies: &[
        Dependency::new("provider", "^6.1.2"),
        Dependency::new("flutter_easyloading", "^3.0.5"),
        Dependency::new("dio", "^5.7.0"),
        Dependency::new("pretty_dio_logger", "^1.4.0"),
    ],
    project_files: &[
        FileTemplate::new(Location::LibRoot, "main.dart", provider::MAIN).replacing(),
        FileTemplate::new(Location::NetworkDb, "dio_service.dart", shared::DIO_SERVICE),
        FileTemplate::new(Location::CoreHelper, "dialog_helper.dart", shared::DIALOG_HELPER),
    ],
    feature_files: &[
        FileTemplate::new(
            Location::NetworkService,
            "{{snakeName}}_service.dart",
            shared::SERVICE,
        ),
        FileTemplate::new(
            Location::StateDir,
            "{{snakeName}}_provider.dart",
            provider::PROVIDER,
        ),
        FileTemplate::new(
            Location::Pages,
            "{{snakeName}}/{{snakeName}}_page.dart",
            provider::PAGE,
        ),
    ],
    registries: &[
        ROUTES_REGISTRY,
        ROUTE_MAP_REGISTRY,
        RegistryTemplate {
            location: Location::Routes,
            file_name: "app_providers.dart",
            skeleton: provider::APP_PROVIDERS,
            entries: &[
                EntryTemplate::prepend(provider::PROVIDER_IMPORT),
                EntryTemplate::container(provider::DI_ENTRY, shared::RETURN_LIST),
            ],
        },
    ],
};

pub static RIVERPOD: Strategy = Strategy {
    kind: StateManagement::Riverpod,
    name: "Riverpod",
    description: "StateNotifier classes exposed through StateNotifierProvider",
    state_dir: "riverpod",
    class_suffix: "Notifier",
    dependencies: &[
        Dependency::new("flutter_riverpod", "^2.5.0"),
        Dependency::new("dio", "^5.8.0+1"),
        Dependency::new("pretty_dio_logger", "^1.4.0"),
        Dependency::new("logger", "^2.4.0"),
        Dependency::new("http", "^1.2.2"),
    ],
    project_files: &[
        FileTemplate::new(Location::LibRoot, "main.dart", riverpod::MAIN).replacing(),
        FileTemplate::new(Location::NetworkDb, "dio_service.dart", shared::DIO_SERVICE),
        FileTemplate::new(Location::NetworkDb, "http_service.dart", riverpod::HTTP_SERVICE),
        FileTemplate::new(Location::CoreHelper, "dialog_helper.dart", shared::DIALOG_HELPER),
        FileTemplate::new(
            Location::CoreServices,
            "logger_service.dart",
            riverpod::LOGGER_SERVICE,
        ),
        FileTemplate::new(
            Location::CoreBase,
            "base_state_notifier.dart",
            riverpod::BASE_STATE_NOTIFIER,
        ),
    ],
    feature_files: &[
        FileTemplate::new(
            Location::NetworkService,
            "{{snakeName}}_service.dart",
            shared::SERVICE,
        ),
        FileTemplate::new(
            Location::Pages,
            "{{snakeName}}/{{snakeName}}_state.dart",
            riverpod::STATE,
        ),
        FileTemplate::new(
            Location::Pages,
            "{{snakeName}}/{{snakeName}}_notifier.dart",
            riverpod::NOTIFIER,
        ),
        FileTemplate::new(
            Location::Pages,
            "{{snakeName}}/{{snakeName}}_provider.dart",
            riverpod::PROVIDER,
        ),
        FileTemplate::new(
            Location::Pages,
            "{{snakeName}}/{{snakeName}}_page.dart",
            riverpod::PAGE,
        ),
    ],
    registries: &[ROUTES_REGISTRY, ROUTE_MAP_REGISTRY],
};
