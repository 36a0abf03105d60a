//! File-level helpers: naming conventions and candidate discovery.

pub mod collect;
pub mod naming;

pub use collect::collect_candidates;
pub use naming::{diagram_title, is_already_processed, is_candidate, output_path_for};
