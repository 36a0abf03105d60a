//! PlantUML sequence-diagram rewriting.
//!
//! Turns plain sequence-diagram sources into the macro-library dialect:
//! participants become `parties(...)`, messages become `rq(...)`/`rs(...)`,
//! groups, dividers and activation markers become their macro calls, and
//! style directives are dropped. Anything not recognized passes through.

pub mod error;
pub mod parse;
pub mod patterns;
pub mod transformer;
pub mod types;

pub use error::TransformError;
pub use transformer::{
    transform_str, LineKind, LineTransformer, TransformOptions, DIAGRAM_MODE, DIAGRAM_OPEN,
    LIBRARY_PATH,
};
pub use types::{ArrowEvent, DiagramBox, GroupEvent, Participant};
