//! Diagnostic system for CHILD error reporting.
//!
//! Every problem the interpreter reports carries:
//! - an error code for `child --explain`
//! - a message saying what went wrong
//! - the 1-based line number and text of the offending statement
//! - optional notes and suggestions
//!
//! Rendering is done by the emitters in [`emitter`]: a terminal emitter with
//! optional color and a JSON emitter for tooling.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
