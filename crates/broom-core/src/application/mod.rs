//! Application layer for broom.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ComponentService)
//! - **Plugins**: The command registry hosts drive the services through
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Reports**: What each command did, for the host to display
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod plugins;
pub mod ports;
pub mod report;
pub mod services;

pub use services::{
    ComponentService, DEFAULT_FEATURE, GenerateOptions, RegistryPatcher, ScaffoldService,
};

pub use plugins::{
    COMPONENTS_PLUGIN, Command, CommandProvider, Invocation, Plugin, PluginHost, PluginRegistry,
    builtin_registry, command_id,
};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
pub use report::{CommandReport, GenerationReport, Notification, NotificationLevel, RegistryPatch};
