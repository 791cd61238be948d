use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An identifier was read but never assigned.
    #[error("Error on line {line}: Unbound identifier '{name}'.")]
    UnboundIdentifier {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call target resolved to something that cannot be called.
    #[error("Error on line {line}: '{name}' is not callable.")]
    NotCallable {
        /// The name of the call target.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A built-in function was referenced as a value.
    #[error("Error on line {line}: '{name}' is a built-in function, not a value.")]
    NotAValue {
        /// The name of the built-in.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand, guard or right-hand side produced no value.
    #[error("Error on line {line}: Value missing.")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: '{name}' expects {expected} argument(s), but {found} were given.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable description of the accepted count.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument was invalid.
    #[error("Error on line {line}: Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An `assert` argument was falsy.
    #[error("Error on line {line}: Assertion failed.")]
    AssertionFailed {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Evaluation nested deeper than the evaluator follows, usually through
    /// unbounded recursion.
    #[error("Error on line {line}: Evaluation nested more than {limit} levels deep.")]
    RecursionLimit {
        /// The deepest nesting accepted.
        limit: usize,
        /// The source line where the limit was reached.
        line:  usize,
    },
    /// A built-in failed to read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A non-fatal problem noticed during evaluation.
///
/// Raised when an assignment produces a value that cannot be stored as an
/// integer or string literal (the value is stored as its text instead), and
/// when `prompt` receives an unknown coercion type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Warning on line {line}: {message}")]
pub struct Warning {
    /// What happened.
    pub message: String,
    /// The source line where the warning was raised.
    pub line:    usize,
}
