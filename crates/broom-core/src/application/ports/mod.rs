//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `broom-adapters` implement these.
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!
//! - **Driving (Input) Ports**: the plugin commands in `crate::application::plugins`

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
