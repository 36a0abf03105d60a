//! Per-file conversion: stream a diagram source through a fresh
//! [`LineTransformer`] into its `_byLib` sibling.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::files::naming::{diagram_title, is_already_processed, output_path_for};
use crate::puml::{LineTransformer, TransformError, TransformOptions};

/// Errors that end the conversion of a file (or, for candidate discovery,
/// of the whole run).
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("{}: {source}", .path.display())]
    Transform {
        path: PathBuf,
        source: TransformError,
    },

    #[error("Path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to list directory {}: {source}", .path.display())]
    ListDirectory { path: PathBuf, source: io::Error },

    #[error("No files to process in {}", .path.display())]
    NoCandidates { path: PathBuf },
}

/// Failure inside [`convert_stream`], before paths are attached.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("read error: {0}")]
    Read(#[source] io::Error),

    #[error("write error: {0}")]
    Write(#[source] io::Error),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Line counts for one converted stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub lines_read: usize,
    pub lines_written: usize,
}

/// What happened to one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    Converted {
        input: PathBuf,
        output: PathBuf,
        stats: ConvertStats,
    },
    /// The input is itself a generated file.
    Skipped { input: PathBuf },
}

/// Rewrite every line of `reader` into `writer`.
///
/// Input bytes that are not valid UTF-8 are decoded lossily rather than
/// failing the stream. Each output line is terminated by `\n`. The writer
/// is flushed before returning successfully.
pub fn convert_stream<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    title: &str,
    options: TransformOptions,
) -> Result<ConvertStats, StreamError> {
    let mut transformer = LineTransformer::with_options(title, options);
    let mut stats = ConvertStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(StreamError::Read)? == 0 {
            break;
        }
        stats.lines_read += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!(line = stats.lines_read, "invalid UTF-8 replaced");
        }
        for out in transformer.process_line(&line)? {
            writeln!(writer, "{}", out).map_err(StreamError::Write)?;
            stats.lines_written += 1;
        }
    }

    transformer.finish()?;
    writer.flush().map_err(StreamError::Write)?;
    Ok(stats)
}

/// Convert one diagram source into its `_byLib` sibling, overwriting any
/// previous output.
///
/// Generated files are skipped. When conversion fails after the output was
/// created, the partial output is removed.
pub fn convert_file(input: &Path, options: TransformOptions) -> Result<ConvertOutcome, ConvertError> {
    if is_already_processed(input) {
        debug!(path = %input.display(), "already processed");
        return Ok(ConvertOutcome::Skipped {
            input: input.to_path_buf(),
        });
    }

    let output = output_path_for(input);
    let title = diagram_title(input);

    let source = File::open(input).map_err(|source| ConvertError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    let destination = File::create(&output).map_err(|source| ConvertError::WriteOutput {
        path: output.clone(),
        source,
    })?;

    let result = convert_stream(
        BufReader::new(source),
        BufWriter::new(destination),
        &title,
        options,
    );

    match result {
        Ok(stats) => {
            info!(
                input = %input.display(),
                output = %output.display(),
                lines_read = stats.lines_read,
                lines_written = stats.lines_written,
                "converted"
            );
            Ok(ConvertOutcome::Converted {
                input: input.to_path_buf(),
                output,
                stats,
            })
        }
        Err(err) => {
            // Best-effort cleanup, the original error is what matters
            let _ = fs::remove_file(&output);
            Err(match err {
                StreamError::Read(source) => ConvertError::ReadInput {
                    path: input.to_path_buf(),
                    source,
                },
                StreamError::Write(source) => ConvertError::WriteOutput { path: output, source },
                StreamError::Transform(source) => ConvertError::Transform {
                    path: input.to_path_buf(),
                    source,
                },
            })
        }
    }
}
