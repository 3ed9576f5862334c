//! Plugin and command registry (the driving side of the application).
//!
//! A host builds a [`PluginRegistry`], hands it to a [`PluginHost`] and
//! executes commands by id. Command ids are `<plugin-id>.<command>`, for
//! example `provider.feature` or `components.widget`.

pub mod builtin;
pub mod command;
pub mod host;
pub mod registry;

pub use builtin::{
    COMPONENTS_PLUGIN, ComponentPlugin, StateManagementPlugin, builtin_registry, command_id,
};
pub use command::{Command, CommandCallback, CommandProvider, Invocation};
pub use host::{Disposable, HostContext, PluginHost};
pub use registry::{Plugin, PluginRegistry};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError, ports::MockFilesystem, report::CommandReport,
        report::GenerationReport,
    };
    use crate::domain::Layout;
    use crate::error::BroomError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Echo {
        id: &'static str,
        deactivated: Arc<AtomicUsize>,
    }

    impl Plugin for Echo {
        fn id(&self) -> &str {
            self.id
        }
        fn name(&self) -> &str {
            "Echo"
        }
        fn description(&self) -> &str {
            "Echoes the feature name"
        }
        fn deactivate(&self) {
            self.deactivated.fetch_add(1, Ordering::SeqCst);
        }
        fn as_command_provider(&self) -> Option<&dyn CommandProvider> {
            Some(self)
        }
    }

    impl CommandProvider for Echo {
        fn commands(&self) -> Vec<Command> {
            vec![Command::new(command_id(self.id, "say"), "Say", |inv| {
                let name = inv.feature_name.clone().unwrap_or_default();
                Ok(CommandReport::new("echo.say", name, GenerationReport::default()))
            })]
        }
    }

    fn echo(id: &'static str) -> (Arc<dyn Plugin>, Arc<AtomicUsize>) {
        let counter = Arc::new(AtomicUsize::new(0));
        let plugin = Arc::new(Echo {
            id,
            deactivated: Arc::clone(&counter),
        });
        (plugin, counter)
    }

    fn builtin_host() -> PluginHost {
        let fs = MockFilesystem::new();
        PluginHost::start(builtin_registry(Arc::new(fs), &Layout::default())).unwrap()
    }

    #[test]
    fn register_replaces_by_id() {
        let (first, _) = echo("echo");
        let (second, _) = echo("echo");
        let (other, _) = echo("other");

        let mut registry = PluginRegistry::new().with(first).with(other);
        let replaced = registry.register(second);

        assert!(replaced.is_some());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.all()[0].id(), "echo");
        assert!(registry.get("other").is_some());
        assert!(registry.command("echo.say").is_some());
    }

    #[test]
    fn host_executes_bound_commands() {
        let (plugin, _) = echo("echo");
        let host = PluginHost::start(PluginRegistry::new().with(plugin)).unwrap();

        let report = host
            .execute("echo.say", &Invocation::new().with_feature_name("hello"))
            .unwrap();

        assert_eq!(report.summary(), "hello");
    }

    #[test]
    fn unknown_command_lists_available_ids() {
        let host = builtin_host();
        let err = host.execute("bloc.feature", &Invocation::new()).unwrap_err();

        match err {
            BroomError::Application(ApplicationError::UnknownCommand { available, .. }) => {
                assert!(available.contains(&"riverpod.feature".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn builtin_command_ids() {
        let host = builtin_host();
        let ids: Vec<_> = host.commands().map(|c| c.id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "components.theme",
                "components.utils",
                "components.widget",
                "provider.dependencies",
                "provider.feature",
                "provider.initialize",
                "riverpod.dependencies",
                "riverpod.feature",
                "riverpod.initialize",
            ]
        );
        assert_eq!(host.registry().all()[0].id(), "provider");
    }

    #[test]
    fn feature_without_workspace_is_rejected() {
        let host = builtin_host();
        let err = host
            .execute("provider.feature", &Invocation::new().with_feature_name("home"))
            .unwrap_err();

        assert!(matches!(
            err,
            BroomError::Application(ApplicationError::MissingWorkspace)
        ));
    }

    #[test]
    fn feature_without_name_is_rejected() {
        let host = builtin_host();
        let err = host
            .execute("riverpod.feature", &Invocation::new().in_workspace("/ws"))
            .unwrap_err();

        assert!(matches!(
            err,
            BroomError::Application(ApplicationError::MissingArgument {
                argument: "feature name",
                ..
            })
        ));
    }

    #[test]
    fn shutdown_deactivates_and_disposes() {
        let (plugin, deactivated) = echo("echo");
        let mut host = PluginHost::start(PluginRegistry::new().with(plugin)).unwrap();

        host.shutdown();

        assert_eq!(deactivated.load(Ordering::SeqCst), 1);
        assert!(host.command("echo.say").is_none());

        drop(host);
        assert_eq!(deactivated.load(Ordering::SeqCst), 1);
    }

    struct Broken;

    impl Plugin for Broken {
        fn id(&self) -> &str {
            "broken"
        }
        fn name(&self) -> &str {
            "Broken"
        }
        fn description(&self) -> &str {
            "Fails to activate"
        }
        fn activate(&self, _ctx: &mut HostContext) -> crate::error::BroomResult<()> {
            Err(ApplicationError::LockPoisoned.into())
        }
    }

    #[test]
    fn failed_activation_rolls_back_started_plugins() {
        let (first, first_down) = echo("first");
        let (last, last_down) = echo("last");
        let registry = PluginRegistry::new()
            .with(first)
            .with(Arc::new(Broken))
            .with(last);

        let mut host = PluginHost::new(registry);
        assert!(host.activate().is_err());

        assert_eq!(first_down.load(Ordering::SeqCst), 1);
        assert_eq!(last_down.load(Ordering::SeqCst), 0);
        assert_eq!(host.commands().count(), 0);

        drop(host);
        assert_eq!(first_down.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn duplicate_command_keeps_latest() {
        let mut ctx = HostContext::default();
        ctx.register_command(Command::new("a.b", "first", |_| {
            Ok(CommandReport::new("a.b", "first", GenerationReport::default()))
        }));
        ctx.register_command(Command::new("a.b", "second", |_| {
            Ok(CommandReport::new("a.b", "second", GenerationReport::default()))
        }));

        assert_eq!(ctx.disposables().len(), 1);
    }
}
