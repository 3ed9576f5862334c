//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use broom_core::domain::{ComponentCategory, StateManagement};
use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "broom",
    bin_name = "broom",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9f9} Layered-architecture scaffolding for Flutter",
    long_about = "broom lays out a Flutter project in data / presentation / core \
                  layers and keeps its route and provider registries in sync \
                  as features are added.",
    after_help = "EXAMPLES:\n\
        \x20 broom init --state riverpod\n\
        \x20 broom feature user_profile\n\
        \x20 broom component theme complete\n\
        \x20 broom run provider.feature --name cart\n\
        \x20 broom completions bash > /usr/share/bash-completion/completions/broom",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a Flutter project.
    #[command(
        about = "Initialize the project structure, routing and the home feature",
        after_help = "EXAMPLES:\n\
            \x20 broom init\n\
            \x20 broom init --state riverpod --workspace ../my_app\n\
            \x20 broom init --dry-run"
    )]
    Init(InitArgs),

    /// Add a feature.
    #[command(
        visible_alias = "f",
        about = "Generate a feature and register it in the routing files",
        after_help = "EXAMPLES:\n\
            \x20 broom feature user_profile\n\
            \x20 broom feature Cart --state riverpod\n\
            \x20 broom feature          # prompts for the name"
    )]
    Feature(FeatureArgs),

    /// Patch pubspec.yaml only.
    #[command(about = "Add the state-management packages to pubspec.yaml")]
    Deps(DepsArgs),

    /// Generate reusable components.
    #[command(
        visible_alias = "c",
        about = "Generate widgets, theme files or utilities",
        after_help = "EXAMPLES:\n\
            \x20 broom component widget button\n\
            \x20 broom component theme complete\n\
            \x20 broom component utils all"
    )]
    Component(ComponentArgs),

    /// List registered plugins and their commands.
    #[command(visible_alias = "ls", about = "List plugins and commands")]
    Plugins(PluginsArgs),

    /// Execute any registered command by id.
    #[command(
        about = "Run a plugin command by id",
        after_help = "EXAMPLES:\n\
            \x20 broom run riverpod.initialize\n\
            \x20 broom run provider.feature --name cart\n\
            \x20 broom run components.widget --option card"
    )]
    Run(RunArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 broom completions bash > ~/.local/share/bash-completion/completions/broom\n\
            \x20 broom completions zsh  > ~/.zfunc/_broom\n\
            \x20 broom completions fish > ~/.config/fish/completions/broom.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the broom configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 broom config get state_management\n\
            \x20 broom config get layout.pages\n\
            \x20 broom config init --local"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Where and how to generate.
#[derive(Debug, Clone, Args)]
pub struct WorkspaceArgs {
    /// Flutter project folder.
    #[arg(
        short = 'w',
        long = "workspace",
        value_name = "DIR",
        help = "Flutter project folder (default: current directory)"
    )]
    pub workspace: Option<PathBuf>,

    /// Overwrite generated files that already exist.
    #[arg(long = "force", help = "Overwrite existing generated files")]
    pub force: bool,

    /// Report what would be written without touching the disk.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

/// State-management selection.
#[derive(Debug, Clone, Copy, Args)]
pub struct StateArgs {
    #[arg(
        short = 's',
        long = "state",
        value_enum,
        value_name = "STATE",
        help = "State management library (default: from config)"
    )]
    pub state: Option<StateChoice>,
}

// ── init / feature / deps ─────────────────────────────────────────────────────

/// Arguments for `broom init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub state: StateArgs,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

/// Arguments for `broom feature`.
#[derive(Debug, Args)]
pub struct FeatureArgs {
    /// Feature name, e.g. `user_profile` or `UserProfile`.
    #[arg(value_name = "NAME", help = "Feature name (prompted when omitted)")]
    pub name: Option<String>,

    #[command(flatten)]
    pub state: StateArgs,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

/// Arguments for `broom deps`.
#[derive(Debug, Args)]
pub struct DepsArgs {
    #[command(flatten)]
    pub state: StateArgs,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

// ── component ─────────────────────────────────────────────────────────────────

/// Arguments for `broom component`.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    #[arg(value_enum, value_name = "CATEGORY", help = "Component category")]
    pub category: ComponentKind,

    /// Option within the category; `broom plugins` lists them.
    #[arg(
        value_name = "OPTION",
        help = "widget: button|card|input  theme: colors|typography|complete  utils: format|mahas|type|all"
    )]
    pub option: String,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

// ── plugins ───────────────────────────────────────────────────────────────────

/// Arguments for `broom plugins`.
#[derive(Debug, Args)]
pub struct PluginsArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `plugins` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `broom run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Command id, `<plugin>.<command>`.
    #[arg(value_name = "COMMAND_ID", help = "Command id, e.g. provider.feature")]
    pub command: String,

    #[arg(long = "name", value_name = "NAME", help = "Feature name")]
    pub name: Option<String>,

    #[arg(long = "option", value_name = "OPTION", help = "Component option")]
    pub option: Option<String>,

    #[command(flatten)]
    pub workspace: WorkspaceArgs,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `broom completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `broom config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `layout.pages`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
    /// Write a configuration file with the defaults.
    Init {
        /// Write `.broom.toml` in the current directory instead.
        #[arg(long = "local", help = "Create .broom.toml in the current directory")]
        local: bool,

        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── value enums ───────────────────────────────────────────────────────────────

/// State-management libraries accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StateChoice {
    Provider,
    Riverpod,
}

impl From<StateChoice> for StateManagement {
    fn from(choice: StateChoice) -> Self {
        match choice {
            StateChoice::Provider => Self::Provider,
            StateChoice::Riverpod => Self::Riverpod,
        }
    }
}

/// Component categories accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ComponentKind {
    #[value(alias = "widgets")]
    Widget,
    Theme,
    #[value(alias = "util")]
    Utils,
}

impl From<ComponentKind> for ComponentCategory {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Widget => Self::Widget,
            ComponentKind::Theme => Self::Theme,
            ComponentKind::Utils => Self::Utils,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_feature_command() {
        let cli = Cli::parse_from(["broom", "feature", "user_profile", "-s", "riverpod"]);
        match cli.command {
            Commands::Feature(args) => {
                assert_eq!(args.name.as_deref(), Some("user_profile"));
                assert_eq!(args.state.state, Some(StateChoice::Riverpod));
                assert!(!args.workspace.force);
            }
            other => panic!("expected Feature command, got {other:?}"),
        }
    }

    #[test]
    fn feature_name_is_optional() {
        let cli = Cli::parse_from(["broom", "f"]);
        assert!(matches!(cli.command, Commands::Feature(FeatureArgs { name: None, .. })));
    }

    #[test]
    fn component_alias() {
        let cli = Cli::parse_from(["broom", "component", "widgets", "button"]);
        if let Commands::Component(args) = cli.command {
            assert_eq!(args.category, ComponentKind::Widget);
            assert_eq!(ComponentCategory::from(args.category), ComponentCategory::Widget);
        } else {
            panic!("expected Component command");
        }
    }

    #[test]
    fn unknown_state_is_rejected() {
        let result = Cli::try_parse_from(["broom", "init", "--state", "bloc"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["broom", "--quiet", "--verbose", "plugins"]);
        assert!(result.is_err());
    }
}
