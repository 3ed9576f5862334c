//! Core domain layer for broom.
//!
//! Pure logic only: case derivation, placeholder rendering, directory
//! layout, strategy descriptors and the text patching behind registry
//! files. All I/O goes through the ports in `crate::application`.
//!
//! - **No I/O**: No filesystem or process calls
//! - **Static descriptors**: Strategies and components are `'static` data
//! - **Pure patching**: [`InsertionRequest::apply`] maps content to content

pub mod components;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod naming;
pub mod plan;
pub mod registry;
pub mod render;
pub mod strategy;
pub mod templates;

pub use components::{ComponentCategory, ComponentFile};
pub use error::DomainError;
pub use layout::{Layout, Location};
pub use manifest::{Dependency, MANIFEST_FILE, ManifestStatus};
pub use naming::{FeatureName, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
pub use plan::{GenerationPlan, PlannedFile};
pub use registry::{InsertionRequest, Locator, PatchOutcome, PatternLocator, PrependLocator};
pub use render::RenderContext;
pub use strategy::{
    EntryTemplate, FileTemplate, Placement, RegistryTemplate, StateManagement, Strategy,
    WritePolicy,
};
