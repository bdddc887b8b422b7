//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "teststub",
    bin_name = "teststub",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Test-stub scaffolding for feature folders",
    long_about = "Teststub generates boilerplate test files for a feature by \
                  combining configurable templates with per-feature substitutions. \
                  Re-running is safe (existing files are skipped) and every run \
                  can be previewed with --dry-run.",
    after_help = "EXAMPLES:\n\
        \x20 teststub gen checkout\n\
        \x20 teststub gen checkout --type unit --type integration\n\
        \x20 teststub gen checkout --dry-run\n\
        \x20 teststub gen checkout --force --yes\n\
        \x20 teststub init",
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
    /// Generate test stubs for a feature.
    #[command(
        visible_alias = "g",
        about = "Generate test stubs for a feature",
        after_help = "EXAMPLES:\n\
            \x20 teststub gen checkout\n\
            \x20 teststub gen checkout --type unit\n\
            \x20 teststub gen checkout --dry-run\n\
            \x20 teststub gen checkout --force"
    )]
    Gen(GenArgs),

    /// Initialise configuration and starter templates.
    #[command(
        about = "Initialise configuration and starter templates",
        after_help = "EXAMPLES:\n\
            \x20 teststub init          # write teststub.toml + templates/tests/\n\
            \x20 teststub init --force  # overwrite existing files"
    )]
    Init(InitArgs),

    /// List suite types with an available template.
    #[command(
        visible_alias = "ls",
        about = "List available suite-type templates",
        after_help = "EXAMPLES:\n\
            \x20 teststub list\n\
            \x20 teststub list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 teststub completions bash > ~/.local/share/bash-completion/completions/teststub\n\
            \x20 teststub completions zsh  > ~/.zfunc/_teststub\n\
            \x20 teststub completions fish > ~/.config/fish/completions/teststub.fish"
    )]
    Completions(CompletionsArgs),
}

// ── gen ───────────────────────────────────────────────────────────────────────

/// Arguments for `teststub gen`.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Feature slug the stubs are generated for.
    #[arg(value_name = "FEATURE", help = "Feature slug (letters, digits, '-', '_')")]
    pub feature: String,

    /// Suite types to scaffold; repeatable. Omitting it (or passing none)
    /// falls back to the configured defaults.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Suite type to scaffold (repeatable)"
    )]
    pub types: Vec<String>,

    /// Scaffold all configured default suite types. Informational: the
    /// default resolution already does this when no --type is given.
    #[arg(long = "all", help = "Scaffold all configured suite types")]
    pub all: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Overwrite generated files that already exist (destructive).
    #[arg(long = "force", help = "Overwrite existing generated files")]
    pub force: bool,

    /// Skip the feature-folder creation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Create the feature folder without asking"
    )]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `teststub init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file or templates.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration and templates")]
    pub force: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `teststub list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One suite type per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `teststub completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
