//! CLI definitions for puml2lib
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", ",
    env!("PUML2LIB_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PUML2LIB_BUILD_DATE"),
    ")"
);

/// Build clap styles.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "puml2lib")]
#[command(about = "Rewrite PlantUML sequence diagrams into the macro-library dialect")]
#[command(
    long_about = "puml2lib - Rewrite PlantUML sequence diagrams into the macro-library dialect.

Every <name>.puml is converted into <name>_byLib.puml next to it. Participants,
messages, groups, boxes, dividers and activations are replaced by macro calls;
skinparam and autonumber directives are dropped; everything else is copied.

QUICK START:
    puml2lib convert login.puml        Convert one diagram
    puml2lib convert diagrams/         Convert every diagram in a directory
    puml2lib config show               Show the effective configuration"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert diagram files
    #[command(long_about = "Convert one diagram file or every diagram in a directory.

The output is written next to each input as <name>_byLib.puml and is
overwritten when it already exists. Files already ending in _byLib.puml
are skipped. When PATH is omitted you are prompted for it.

In strict mode (the default) a file fails when a box is nested, an
'end box' has no matching 'box', or a skinparam block or box is never
closed. Use --lenient to convert such files anyway.

EXAMPLES:
    puml2lib convert login.puml           Convert a single file
    puml2lib convert diagrams/            Convert all diagrams in a directory
    puml2lib convert diagrams/ -r         Include sub-directories
    puml2lib convert old.puml --lenient   Tolerate unbalanced blocks")]
    Convert {
        /// File or directory to convert
        #[arg(help = "Diagram file or directory (prompted for when omitted)")]
        path: Option<String>,
        /// Descend into sub-directories
        #[arg(long, short, help = "Also convert diagrams in sub-directories")]
        recursive: bool,
        /// Do not fail on unbalanced box or skinparam blocks
        #[arg(long, help = "Warn instead of failing on unbalanced blocks")]
        lenient: bool,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and initialize the puml2lib configuration file.

Configuration is stored in ~/.config/puml2lib/config.toml.

EXAMPLES:
    puml2lib config show     Display the effective configuration
    puml2lib config path     Print the configuration file location
    puml2lib config init     Write a default configuration file"
    )]
    Config(ConfigCommands),

    /// Generate shell completions (internal use)
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Create the configuration file with defaults
    Init,
}
