//! Plugins shipped with broom.

use std::sync::Arc;

use crate::{
    application::{
        plugins::{
            command::{Command, CommandProvider, Invocation},
            registry::{Plugin, PluginRegistry},
        },
        ports::Filesystem,
        report::{CommandReport, GenerationReport},
        services::{ComponentService, ScaffoldService},
    },
    domain::{ComponentCategory, FeatureName, Layout, ManifestStatus, StateManagement},
    error::BroomResult,
};

pub const COMPONENTS_PLUGIN: &str = "components";

/// Command id for `command` of `plugin`.
pub fn command_id(plugin: &str, command: &str) -> String {
    format!("{plugin}.{command}")
}

/// Every built-in plugin: one per state-management strategy plus components.
pub fn builtin_registry(filesystem: Arc<dyn Filesystem>, layout: &Layout) -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    for kind in StateManagement::ALL {
        registry.register(Arc::new(StateManagementPlugin::new(
            kind,
            Arc::clone(&filesystem),
            layout.clone(),
        )));
    }
    registry.register(Arc::new(ComponentPlugin::new(filesystem, layout.clone())));
    registry
}

fn summary(invocation: &Invocation, message: String) -> String {
    if invocation.options.dry_run {
        format!("Dry run: {message}")
    } else {
        message
    }
}

// ── State management ─────────────────────────────────────────────────────────

/// Exposes `initialize`, `feature` and `dependencies` for one strategy.
pub struct StateManagementPlugin {
    kind: StateManagement,
    service: Arc<ScaffoldService>,
}

impl StateManagementPlugin {
    pub fn new(kind: StateManagement, filesystem: Arc<dyn Filesystem>, layout: Layout) -> Self {
        Self {
            kind,
            service: Arc::new(ScaffoldService::new(filesystem, layout, kind.strategy())),
        }
    }

    fn command<F>(&self, name: &str, title: String, run: F) -> Command
    where
        F: Fn(&ScaffoldService, &str, &Invocation) -> BroomResult<CommandReport> + Send + Sync + 'static,
    {
        let id = command_id(self.kind.as_str(), name);
        let service = Arc::clone(&self.service);
        let command = id.clone();
        Command::new(id, title, move |invocation| run(&service, &command, invocation))
    }
}

impl Plugin for StateManagementPlugin {
    fn id(&self) -> &str {
        self.kind.as_str()
    }

    fn name(&self) -> &str {
        self.kind.strategy().name
    }

    fn description(&self) -> &str {
        self.kind.strategy().description
    }

    fn as_command_provider(&self) -> Option<&dyn CommandProvider> {
        Some(self)
    }
}

impl CommandProvider for StateManagementPlugin {
    fn commands(&self) -> Vec<Command> {
        let name = self.kind.strategy().name;
        vec![
            self.command(
                "initialize",
                format!("Initialize {name} Project"),
                |service, id, invocation| {
                    let workspace = invocation.require_workspace()?;
                    let report = service.initialize_project(workspace, invocation.options)?;
                    let message = format!(
                        "Flutter project initialized with {}",
                        service.strategy().name
                    );
                    Ok(CommandReport::new(id, summary(invocation, message), report))
                },
            ),
            self.command(
                "feature",
                format!("Create {name} Feature"),
                |service, id, invocation| {
                    let workspace = invocation.require_workspace()?;
                    let raw = Invocation::require(
                        invocation.feature_name.as_deref(),
                        id,
                        "feature name",
                    )?;
                    let feature = FeatureName::parse(raw)?;
                    let report = service.generate_feature(workspace, &feature, invocation.options)?;
                    let message = format!("Feature '{}' created", feature.snake());
                    Ok(CommandReport::new(id, summary(invocation, message), report))
                },
            ),
            self.command(
                "dependencies",
                format!("Update {name} Dependencies"),
                |service, id, invocation| {
                    let workspace = invocation.require_workspace()?;
                    let report = service.update_dependencies(workspace, invocation.options)?;
                    Ok(CommandReport::new(
                        id,
                        summary(invocation, dependencies_message(&report)),
                        report,
                    ))
                },
            ),
        ]
    }
}

fn dependencies_message(report: &GenerationReport) -> String {
    match &report.manifest {
        Some(ManifestStatus::Updated(added)) => format!("Dependencies added: {}", added.join(", ")),
        Some(ManifestStatus::UpToDate) => "Dependencies already up to date".to_string(),
        _ => "Dependencies not updated".to_string(),
    }
}

// ── Components ───────────────────────────────────────────────────────────────

/// Exposes `widget`, `theme` and `utils`.
pub struct ComponentPlugin {
    service: Arc<ComponentService>,
}

impl ComponentPlugin {
    pub fn new(filesystem: Arc<dyn Filesystem>, layout: Layout) -> Self {
        Self {
            service: Arc::new(ComponentService::new(filesystem, layout)),
        }
    }
}

impl Plugin for ComponentPlugin {
    fn id(&self) -> &str {
        COMPONENTS_PLUGIN
    }

    fn name(&self) -> &str {
        "Components"
    }

    fn description(&self) -> &str {
        "Reusable widgets, theme files and utilities"
    }

    fn as_command_provider(&self) -> Option<&dyn CommandProvider> {
        Some(self)
    }
}

impl CommandProvider for ComponentPlugin {
    fn commands(&self) -> Vec<Command> {
        ComponentCategory::ALL
            .into_iter()
            .map(|category| {
                let id = command_id(COMPONENTS_PLUGIN, category.as_str());
                let command = id.clone();
                let service = Arc::clone(&self.service);
                Command::new(
                    id,
                    format!("Generate {category} Component"),
                    move |invocation| {
                        let workspace = invocation.require_workspace()?;
                        let option = Invocation::require(
                            invocation.option.as_deref(),
                            &command,
                            "component option",
                        )?;
                        let report =
                            service.generate(workspace, category, option, invocation.options)?;
                        let message = format!("{category} component '{option}' generated");
                        Ok(CommandReport::new(
                            command.as_str(),
                            summary(invocation, message),
                            report,
                        ))
                    },
                )
            })
            .collect()
    }
}
