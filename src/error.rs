//! Error types for the documentation pipeline.
//!
//! Display strings are matched literally by callers and tests.

use thiserror::Error;

/// Failure to extract a step record from a doc-comment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `@code` opened without a matching `@endcode`.
    #[error("Example not closed")]
    ExampleNotClosed,
}

/// Failure while rendering the markdown reference.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A trait has no source file under `src/`.
    #[error("Source file {path} does not exist")]
    MissingSource { path: String },
}

/// Failure to locate the region to substitute.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    #[error("Start not found in the haystack")]
    StartNotFound,
    #[error("End not found in the haystack")]
    EndNotFound,
    #[error("Start is after the end")]
    StartAfterEnd,
}
