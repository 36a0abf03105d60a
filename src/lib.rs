//! puml2lib Library
//!
//! Rewrites PlantUML sequence diagrams into the macro-library dialect.

pub mod cli;
pub mod config;
pub mod convert;
pub mod files;
pub mod logging;
pub mod puml;
pub mod theme;

pub use config::Config;
pub use convert::{convert_file, convert_stream, ConvertError, ConvertOutcome, ConvertStats};
pub use puml::{LineTransformer, TransformError, TransformOptions};
