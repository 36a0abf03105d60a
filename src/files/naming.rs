//! Naming conventions for diagram sources and generated files.
//!
//! A source `flow.puml` produces `flow_byLib.puml` next to it. Files whose
//! name already ends in the marker suffix (any case) are never processed
//! again.

use std::path::{Path, PathBuf};

/// Extension of diagram sources, including the dot.
pub const SOURCE_EXTENSION: &str = ".puml";

/// Marker inserted before the extension of generated files.
pub const PROCESSED_SUFFIX: &str = "_byLib";

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// Check whether the file name carries the diagram source extension.
pub fn is_puml(path: &Path) -> bool {
    file_name(path).ends_with(SOURCE_EXTENSION)
}

/// Check whether the file is itself a generated file.
pub fn is_already_processed(path: &Path) -> bool {
    let marker = format!("{}{}", PROCESSED_SUFFIX, SOURCE_EXTENSION).to_lowercase();
    file_name(path).to_lowercase().ends_with(&marker)
}

/// A file eligible for conversion: a diagram source that is not generated.
pub fn is_candidate(path: &Path) -> bool {
    is_puml(path) && !is_already_processed(path)
}

/// Diagram title: the file name without its source extension.
pub fn diagram_title(path: &Path) -> String {
    let name = file_name(path);
    match name.strip_suffix(SOURCE_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default(),
    }
}

/// Sibling path the converted diagram is written to.
pub fn output_path_for(input: &Path) -> PathBuf {
    let name = format!(
        "{}{}{}",
        diagram_title(input),
        PROCESSED_SUFFIX,
        SOURCE_EXTENSION
    );
    input.with_file_name(name)
}
