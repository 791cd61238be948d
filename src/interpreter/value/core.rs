use std::rc::Rc;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// A line that produces nothing (an empty block, a conditional whose guard
/// failed without an else branch, a call to `print`) evaluates to `None`
/// rather than to a `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number. Produced by `/` and by
    /// exponentiation with a negative or real exponent.
    Real(f64),
    /// A string.
    Str(String),
    /// A boolean, produced by comparisons and boolean connectives.
    Bool(bool),
    /// An unevaluated syntax tree.
    ///
    /// Assignments evaluate to their right-hand side in this form, and
    /// function definitions evaluate to themselves.
    Node(Rc<Node>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Self {
        Self::Node(Rc::new(v))
    }
}

impl Value {
    /// Returns whether the value counts as true in a condition.
    ///
    /// Zero, `0.0`, the empty string and `false` are falsy; everything else,
    /// including any syntax tree, is truthy.
    ///
    /// # Example
    /// ```
    /// use sapphire::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Node(_) => true,
        }
    }

    /// Returns the name of the value's type as used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Node(_) => "syntax tree",
        }
    }

    /// Returns the value as a number, if it has a numeric reading.
    ///
    /// Integers and reals are returned unchanged; booleans count as `0` and
    /// `1`. Strings and syntax trees are not numbers.
    #[must_use]
    pub fn numeric(&self) -> Option<Self> {
        match self {
            Self::Integer(n) => Some(Self::Integer(*n)),
            Self::Real(r) => Some(Self::Real(*r)),
            Self::Bool(b) => Some(Self::Integer(i64::from(*b))),
            Self::Str(_) | Self::Node(_) => None,
        }
    }

    /// Converts a numeric value to an `f64`.
    ///
    /// Integers beyond `2^53` in magnitude round to the nearest
    /// representable real, so `9007199254740993` becomes
    /// `9007199254740992.0`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is numeric.
    /// - `Err(RuntimeError)`: For strings and syntax trees.
    ///
    /// # Example
    /// ```
    /// use sapphire::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(1).unwrap(), 10.0);
    /// assert!(Value::Str("ten".into()).as_real(1).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self.numeric() {
            Some(Self::Real(r)) => Ok(r),
            Some(Self::Integer(n)) => Ok(n as f64),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }
}

/// Renders an optional value, printing a missing value as `none`.
///
/// # Example
/// ```
/// use sapphire::interpreter::value::core::{Value, display_optional};
///
/// assert_eq!(display_optional(Some(&Value::Real(3.0))), "3.0");
/// assert_eq!(display_optional(None), "none");
/// ```
#[must_use]
pub fn display_optional(value: Option<&Value>) -> String {
    value.map_or_else(|| "none".to_string(), ToString::to_string)
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part: `3.0` rather than `3`.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Node(node) => write!(f, "{node}"),
        }
    }
}
