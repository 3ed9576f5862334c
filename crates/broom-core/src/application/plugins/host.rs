use std::collections::BTreeMap;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        plugins::{
            command::{Command, Invocation},
            registry::PluginRegistry,
        },
        report::CommandReport,
    },
    error::BroomResult,
};

/// Undoes one binding when the host shuts down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disposable {
    command_id: String,
}

/// What plugins see of the host while activating.
#[derive(Debug, Default)]
pub struct HostContext {
    palette: BTreeMap<String, Command>,
    disposables: Vec<Disposable>,
}

impl HostContext {
    /// Bind a command. A second binding with the same id replaces the first.
    pub fn register_command(&mut self, command: Command) {
        let id = command.id.clone();
        if self.palette.insert(id.clone(), command).is_some() {
            warn!(command = %id, "Command registered twice, keeping the latest");
            return;
        }
        self.disposables.push(Disposable { command_id: id });
    }

    pub fn disposables(&self) -> &[Disposable] {
        &self.disposables
    }

    fn dispose(&mut self) -> usize {
        let count = self.disposables.len();
        for disposable in self.disposables.drain(..).rev() {
            self.palette.remove(&disposable.command_id);
        }
        count
    }
}

/// Owns the registry and the bound command palette.
pub struct PluginHost {
    registry: PluginRegistry,
    context: HostContext,
    active: bool,
}

impl PluginHost {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry,
            context: HostContext::default(),
            active: false,
        }
    }

    /// Build a host and activate every plugin.
    pub fn start(registry: PluginRegistry) -> BroomResult<Self> {
        let mut host = Self::new(registry);
        host.activate()?;
        Ok(host)
    }

    /// Activate plugins in registration order and bind their commands.
    ///
    /// If one plugin fails, those already activated are deactivated in
    /// reverse order and every binding is dropped.
    #[instrument(skip_all, fields(plugins = self.registry.len()))]
    pub fn activate(&mut self) -> BroomResult<()> {
        if self.active {
            return Ok(());
        }

        for (index, plugin) in self.registry.all().iter().enumerate() {
            if let Err(err) = plugin.activate(&mut self.context) {
                warn!(plugin = plugin.id(), error = %err, "Activation failed, rolling back");
                for started in self.registry.all()[..index].iter().rev() {
                    started.deactivate();
                }
                self.context.dispose();
                return Err(err);
            }
            if let Some(provider) = plugin.as_command_provider() {
                for command in provider.commands() {
                    debug!(plugin = plugin.id(), command = %command.id, "Binding command");
                    self.context.register_command(command);
                }
            }
        }

        self.active = true;
        debug!(commands = self.context.palette.len(), "Plugins activated");
        Ok(())
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Bound commands, sorted by id.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.context.palette.values()
    }

    pub fn command(&self, id: &str) -> Option<&Command> {
        self.context.palette.get(id)
    }

    #[instrument(skip(self, invocation))]
    pub fn execute(&self, id: &str, invocation: &Invocation) -> BroomResult<CommandReport> {
        let command = self
            .command(id)
            .ok_or_else(|| ApplicationError::UnknownCommand {
                id: id.to_string(),
                available: self.context.palette.keys().cloned().collect(),
            })?;

        info!(command = %command.title, "Executing command");
        command.invoke(invocation)
    }

    /// Deactivate plugins in reverse order and drop every binding.
    pub fn shutdown(&mut self) {
        if !self.active {
            return;
        }
        for plugin in self.registry.all().iter().rev() {
            plugin.deactivate();
        }
        let disposed = self.context.dispose();
        self.active = false;
        debug!(disposed, "Plugin host shut down");
    }
}

impl Drop for PluginHost {
    fn drop(&mut self) {
        self.shutdown();
    }
}
