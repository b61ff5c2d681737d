//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "skatekit",
    bin_name = "skatekit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Custom element scaffolding",
    long_about = "Skatekit creates custom element projects and components, \
                  and keeps src/index.js registering every component.",
    after_help = "EXAMPLES:\n\
        \x20 skatekit new --yes\n\
        \x20 skatekit new --dir my-widget --author-name \"Ada Lovelace\"\n\
        \x20 skatekit component x-header\n\
        \x20 skatekit completions bash > /usr/share/bash-completion/completions/skatekit",
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
    /// Initialise a whole project in a directory.
    #[command(
        visible_alias = "app",
        about = "Create a new custom element project",
        after_help = "EXAMPLES:\n\
            \x20 skatekit new                      # asks for everything\n\
            \x20 skatekit new --yes --skip-install # defaults, no yarn\n\
            \x20 skatekit new --dir widget --component x-widget"
    )]
    New(NewArgs),

    /// Generate one component and register it.
    #[command(
        visible_alias = "c",
        about = "Add a component to the current project",
        after_help = "EXAMPLES:\n\
            \x20 skatekit component x-header\n\
            \x20 skatekit c x-footer --dir ../site"
    )]
    Component(ComponentArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 skatekit completions bash > ~/.local/share/bash-completion/completions/skatekit\n\
            \x20 skatekit completions zsh  > ~/.zfunc/_skatekit\n\
            \x20 skatekit completions fish > ~/.config/fish/completions/skatekit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the configuration file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 skatekit config init\n\
            \x20 skatekit config get install.package_manager\n\
            \x20 skatekit config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `skatekit new`.
///
/// Anything not passed here is asked interactively (or defaulted with
/// `--yes`).
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project directory. Defaults to the current directory; its name
    /// suggests the main component name.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Project directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    #[arg(
        long = "component",
        value_name = "NAME",
        help = "Main component name, e.g. x-widget"
    )]
    pub component: Option<String>,

    #[arg(long = "description", value_name = "TEXT", help = "Project description")]
    pub description: Option<String>,

    #[arg(long = "author-name", value_name = "NAME", help = "Author name")]
    pub author_name: Option<String>,

    #[arg(long = "author-email", value_name = "EMAIL", help = "Author email")]
    pub author_email: Option<String>,

    /// Leave dependency installation to the user.
    #[arg(long = "skip-install", help = "Do not run the package manager")]
    pub skip_install: bool,

    /// Accept the default for every question.
    #[arg(short = 'y', long = "yes", help = "Accept defaults without prompting")]
    pub yes: bool,
}

// ── component ─────────────────────────────────────────────────────────────────

/// Arguments for `skatekit component`.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    /// Component tag name. Asked for when omitted.
    #[arg(value_name = "NAME", help = "Component name, e.g. x-foo")]
    pub name: Option<String>,

    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    #[arg(short = 'y', long = "yes", help = "Never prompt")]
    pub yes: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `skatekit completions`.
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

/// Subcommands for `skatekit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `install.package_manager`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a configuration file with the default values.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_with_flags() {
        let cli = Cli::parse_from([
            "skatekit",
            "new",
            "--dir",
            "widget",
            "--author-name",
            "Ada",
            "--skip-install",
            "--yes",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.dir, Some(PathBuf::from("widget")));
        assert_eq!(args.author_name.as_deref(), Some("Ada"));
        assert!(args.skip_install);
        assert!(args.yes);
        assert!(args.component.is_none());
    }

    #[test]
    fn app_is_an_alias_for_new() {
        let cli = Cli::parse_from(["skatekit", "app", "--yes"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn component_name_is_optional() {
        let cli = Cli::parse_from(["skatekit", "c"]);
        let Commands::Component(args) = cli.command else {
            panic!("expected Component command");
        };
        assert!(args.name.is_none());

        let cli = Cli::parse_from(["skatekit", "component", "x-foo"]);
        let Commands::Component(args) = cli.command else {
            panic!("expected Component command");
        };
        assert_eq!(args.name.as_deref(), Some("x-foo"));
    }

    #[test]
    fn config_init_force() {
        let cli = Cli::parse_from(["skatekit", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["skatekit", "--quiet", "--verbose", "component", "x-a"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["skatekit", "component", "x-a", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }
}
