//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "initialize a project" or "add a feature".

pub mod component_service;
pub mod registry_patcher;
pub mod scaffold_service;
mod writer;

pub use component_service::ComponentService;
pub use registry_patcher::RegistryPatcher;
pub use scaffold_service::{DEFAULT_FEATURE, ScaffoldService};
pub use writer::GenerateOptions;
