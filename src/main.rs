//! puml2lib - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use puml2lib::cli::{Cli, Commands, ConfigCommands};
use puml2lib::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config problems are reported by the command itself; logging falls
    // back to defaults so it is available while doing so.
    let config = Config::load();
    let level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| puml2lib::config::default_log_level());
    puml2lib::logging::init(&level, cli.verbose);

    match cli.command {
        Commands::Convert {
            path,
            recursive,
            lenient,
        } => commands::convert::handle(path, recursive, lenient, &config?),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
