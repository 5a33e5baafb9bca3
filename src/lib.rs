//! stepdoc — step reference generator and linter for behavioral-test
//! step-definition traits.
//!
//! Pipeline:
//!
//! 1. [`parser::scan_dir`] walks `src/*.php` and runs [`parser::comment::parse`]
//!    on every public method's doc-comment.
//! 2. [`validate::validate`] lints the step naming conventions.
//! 3. [`render::render`] produces the markdown reference.
//! 4. [`replace::replace`] splices it between two marker lines of a document.

pub mod error;
pub mod model;
pub mod naming;
pub mod parser;
pub mod render;
pub mod replace;
pub mod validate;

pub use error::{ParseError, RenderError, ReplaceError};
pub use model::{MethodDoc, MethodInfo, TraitDoc, TraitInfo};
