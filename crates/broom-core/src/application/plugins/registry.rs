use std::sync::Arc;

use tracing::debug;

use crate::{
    application::plugins::{
        command::{Command, CommandProvider},
        host::HostContext,
    },
    error::BroomResult,
};

/// An extension the host can activate.
pub trait Plugin: Send + Sync {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Called once by the host before any command is bound.
    fn activate(&self, _ctx: &mut HostContext) -> BroomResult<()> {
        Ok(())
    }

    fn deactivate(&self) {}

    fn as_command_provider(&self) -> Option<&dyn CommandProvider> {
        None
    }
}

/// Plugins in registration order. There is no global instance; the host
/// builds one at startup and passes it along.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin, replacing any plugin with the same id in place.
    /// Returns the replaced plugin.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> Option<Arc<dyn Plugin>> {
        match self.plugins.iter_mut().find(|p| p.id() == plugin.id()) {
            Some(slot) => {
                debug!(plugin = plugin.id(), "Replacing plugin");
                Some(std::mem::replace(slot, plugin))
            }
            None => {
                debug!(plugin = plugin.id(), "Registered plugin");
                self.plugins.push(plugin);
                None
            }
        }
    }

    pub fn with(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.register(plugin);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Plugin>> {
        self.plugins.iter().find(|p| p.id() == id)
    }

    pub fn all(&self) -> &[Arc<dyn Plugin>] {
        &self.plugins
    }

    /// Find a command by id across every plugin.
    pub fn command(&self, id: &str) -> Option<Command> {
        self.plugins
            .iter()
            .filter_map(|p| p.as_command_provider())
            .flat_map(|provider| provider.commands())
            .find(|command| command.id == id)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|p| p.id()))
            .finish()
    }
}
