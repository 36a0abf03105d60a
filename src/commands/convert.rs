//! Convert command handler.
//!
//! Collects candidate diagrams, converts them one after another and reports
//! each outcome. A failing file does not stop the batch; the command fails
//! at the end if any file did.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::error;

use puml2lib::files::collect_candidates;
use puml2lib::theme::{current_theme, Theme};
use puml2lib::{convert_file, Config, ConvertOutcome, TransformOptions};

/// Counts for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Resolve the effective options: CLI flags only ever loosen strictness or
/// widen the search.
pub fn resolve_options(config: &Config, recursive: bool, lenient: bool) -> (bool, TransformOptions) {
    let mut options = config.convert.transform_options();
    if lenient {
        options.strict = false;
    }
    (recursive || config.convert.recursive, options)
}

/// Ask for a path on the given streams, the way the tool has always
/// started when run without arguments.
pub fn prompt_path<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    write!(output, "Enter path: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read path from stdin")?;
    let path = line.trim();
    if path.is_empty() {
        bail!("No path given");
    }
    Ok(path.to_string())
}

/// Convert every file in order, writing one report line per file to `out`.
pub fn run_batch<W: Write>(
    files: &[PathBuf],
    options: TransformOptions,
    theme: &Theme,
    out: &mut W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for file in files {
        let name = display_name(file);
        match convert_file(file, options) {
            Ok(ConvertOutcome::Converted { output, .. }) => {
                summary.converted += 1;
                writeln!(
                    out,
                    "{}",
                    theme.success_text(&format!("Processed: {} -> {}", name, display_name(&output)))
                )?;
            }
            Ok(ConvertOutcome::Skipped { .. }) => {
                summary.skipped += 1;
                writeln!(out, "{}", theme.warning_text(&format!("Skipping: {}", name)))?;
            }
            Err(err) => {
                summary.failed += 1;
                error!(path = %file.display(), "{}", err);
                writeln!(
                    out,
                    "{}",
                    theme.error_text(&format!("Failed: {}: {}", name, err))
                )?;
            }
        }
    }

    Ok(summary)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Handle `puml2lib convert`.
#[cfg(not(tarpaulin_include))]
pub fn handle(path: Option<String>, recursive: bool, lenient: bool, config: &Config) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => prompt_path(io::stdin().lock(), io::stdout())?,
    };
    let (recursive, options) = resolve_options(config, recursive, lenient);

    let files = collect_candidates(Path::new(&path), recursive)?;
    let theme = current_theme();
    let summary = run_batch(&files, options, &theme, &mut io::stdout())?;

    println!(
        "{}",
        theme.primary_text(&format!(
            "Done: {} converted, {} skipped, {} failed",
            summary.converted, summary.skipped, summary.failed
        ))
    );

    if summary.failed > 0 {
        bail!("{} of {} file(s) failed", summary.failed, files.len());
    }
    Ok(())
}
