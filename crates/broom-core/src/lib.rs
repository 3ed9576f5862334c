//! Broom Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the broom Flutter scaffolding tool,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            broom-cli (host)             │
//! │   builds the PluginRegistry, executes   │
//! │          commands by id                 │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Plugins & Application Services   │
//! │ (PluginHost, ScaffoldService,           │
//! │  ComponentService, RegistryPatcher)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │              (Filesystem)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     broom-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (FeatureName, Strategy, Layout,        │
//! │   InsertionRequest, RenderContext)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use broom_core::prelude::*;
//!
//! let registry = builtin_registry(filesystem, &Layout::default());
//! let host = PluginHost::start(registry)?;
//!
//! let report = host.execute(
//!     "provider.feature",
//!     &Invocation::new().in_workspace("./my_app").with_feature_name("user_profile"),
//! )?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CommandReport, ComponentService, GenerateOptions, GenerationReport, Invocation,
        PluginHost, PluginRegistry, ScaffoldService, builtin_registry, ports::Filesystem,
    };
    pub use crate::domain::{
        ComponentCategory, FeatureName, Layout, ManifestStatus, PatchOutcome, RenderContext,
        StateManagement, Strategy,
    };
    pub use crate::error::{BroomError, BroomResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
