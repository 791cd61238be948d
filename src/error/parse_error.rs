use thiserror::Error;

/// Represents all errors that can occur during tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input at the current position matches no lexical rule.
    #[error("Error on line {line}: Unrecognized input '{text}'.")]
    UnrecognizedInput {
        /// The offending text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was opened but never closed.
    #[error("Error on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Error on line {line}: Literal is too large.")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input nests deeper than the parser follows.
    #[error("Error on line {line}: Input is nested more than {limit} levels deep.")]
    TooDeep {
        /// The deepest nesting accepted.
        limit: usize,
        /// The source line where the limit was reached.
        line:  usize,
    },
    /// Every alternative of a production failed.
    ///
    /// `position` is the index of the offending token in the token sequence,
    /// i.e. how far parsing got before it stopped.
    #[error("Error on line {line}: Expected {expected}, found {found} (token {position}).")]
    Expected {
        /// Description of what the grammar expected.
        expected: String,
        /// The token actually found.
        found:    String,
        /// Token index at which parsing stopped.
        position: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// Returns the token index of an [`Expected`](Self::Expected) error, or
    /// `None` for lexical errors.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Expected { position, .. } => Some(*position),
            _ => None,
        }
    }
}
