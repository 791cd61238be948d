/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of
/// source code: unrecognized characters, malformed literals, and productions
/// for which every alternative failed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unbound identifiers, calls to non-callables, type mismatches or failing
/// built-ins. Also defines the non-fatal [`Warning`] raised by coercing
/// assignments.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, Warning};

/// Any failure of a complete run: either the line did not parse, or its
/// evaluation aborted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tokenizing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
