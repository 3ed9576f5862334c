use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    application::{ApplicationError, report::CommandReport, services::GenerateOptions},
    error::BroomResult,
};

/// Arguments a host passes to a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// The open project folder, if any.
    pub workspace: Option<PathBuf>,
    pub feature_name: Option<String>,
    /// Component option, such as `button` for `components.widget`.
    pub option: Option<String>,
    pub options: GenerateOptions,
}

impl Invocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_workspace(mut self, workspace: impl Into<PathBuf>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn with_feature_name(mut self, name: impl Into<String>) -> Self {
        self.feature_name = Some(name.into());
        self
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.option = Some(option.into());
        self
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn require_workspace(&self) -> BroomResult<&Path> {
        self.workspace
            .as_deref()
            .ok_or_else(|| ApplicationError::MissingWorkspace.into())
    }

    pub(crate) fn require<'a>(
        value: Option<&'a str>,
        command: &str,
        argument: &'static str,
    ) -> BroomResult<&'a str> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ApplicationError::MissingArgument {
                    command: command.to_string(),
                    argument,
                }
                .into()
            })
    }
}

pub type CommandCallback = Arc<dyn Fn(&Invocation) -> BroomResult<CommandReport> + Send + Sync>;

/// A bindable command: an id, a human title and the code to run.
#[derive(Clone)]
pub struct Command {
    pub id: String,
    pub title: String,
    callback: CommandCallback,
}

impl Command {
    pub fn new<F>(id: impl Into<String>, title: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&Invocation) -> BroomResult<CommandReport> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            title: title.into(),
            callback: Arc::new(callback),
        }
    }

    pub fn invoke(&self, invocation: &Invocation) -> BroomResult<CommandReport> {
        (self.callback)(invocation)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Implemented by plugins that expose commands.
pub trait CommandProvider {
    fn commands(&self) -> Vec<Command>;
}
