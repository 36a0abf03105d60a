//! xtask - Build tasks for puml2lib
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use puml2lib::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for puml2lib")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // If no specific format is specified, generate all
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

fn render_man(cmd: &Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(&cmd, &man_dir.join("puml2lib.1"))?;

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        render_man(subcommand, &man_dir.join(format!("puml2lib-{}.1", name)))?;

        for nested in subcommand.get_subcommands().filter(|c| !c.is_hide_set()) {
            let path = man_dir.join(format!("puml2lib-{}-{}.1", name, nested.get_name()));
            render_man(nested, &path)?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn flag_label(arg: &Arg) -> Option<String> {
    let long = arg.get_long().map(|l| format!("--{}", l));
    let short = arg.get_short().map(|s| format!("-{}", s));
    match (long, short) {
        (Some(l), Some(s)) => Some(format!("{}, {}", s, l)),
        (Some(l), None) => Some(l),
        (None, Some(s)) => Some(s),
        (None, None) => None,
    }
}

fn push_arguments(markdown: &mut String, cmd: &Command) {
    let args: Vec<&Arg> = cmd
        .get_arguments()
        .filter(|a| !matches!(a.get_id().as_str(), "help" | "version"))
        .collect();
    if args.is_empty() {
        return;
    }

    markdown.push_str("### Arguments\n\n");
    for arg in args {
        let label = if arg.is_positional() {
            format!("<{}>", arg.get_id().as_str().to_uppercase())
        } else {
            match flag_label(arg) {
                Some(label) => label,
                None => continue,
            }
        };
        markdown.push_str(&format!("- `{}`", label));
        if let Some(help) = arg.get_help() {
            markdown.push_str(&format!(": {}", help));
        }
        markdown.push('\n');
    }
    markdown.push('\n');
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# puml2lib Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("## puml2lib {}\n\n", name));
        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }
        push_arguments(&mut markdown, subcommand);

        if let Some(long_about) = subcommand.get_long_about() {
            markdown.push_str(&format!("### Description\n\n```\n{}\n```\n\n", long_about));
        }

        for nested in subcommand.get_subcommands().filter(|c| !c.is_hide_set()) {
            markdown.push_str(&format!("#### puml2lib {} {}\n\n", name, nested.get_name()));
            if let Some(about) = nested.get_about() {
                markdown.push_str(&format!("{}\n\n", about));
            }
        }
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}
