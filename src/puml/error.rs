//! Structural errors raised by the line transformer in strict mode.

/// A block construct that cannot be resolved on a single line was left
/// in an inconsistent state. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("skinparam block opened on line {line} is never closed")]
    UnclosedSkinparam { line: usize },

    #[error("box opened on line {line} while box from line {open_line} is still open")]
    NestedBox { line: usize, open_line: usize },

    #[error("box opened on line {line} is never closed with 'end box'")]
    UnclosedBox { line: usize },

    #[error("'end box' on line {line} has no matching 'box'")]
    EndBoxWithoutBox { line: usize },
}
