use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::Value,
    },
    util::num::f64_to_i64_truncated,
};

impl Scope {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: integer coercion. Integers are unchanged, reals are
    ///   truncated toward zero, booleans become `0` or `1` and strings are
    ///   parsed as base-10 integers.
    /// - `Negate`: numeric negation. Booleans negate as `0` or `1`.
    /// - `Not`: logical negation of the operand's truthiness.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let v = Scope::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Scope::eval_unary(UnaryOperator::Plus, &Value::Str(" 42".into()), 1).unwrap();
    /// assert_eq!(v, Value::Integer(42));
    ///
    /// let v = Scope::eval_unary(UnaryOperator::Not, &Value::Integer(0), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    ///
    /// # Errors
    /// - `InvalidArgument` for strings that are not integers.
    /// - `Overflow` when negating `i64::MIN` or truncating a huge real.
    /// - `TypeError` for syntax trees under `+` or `-`.
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => match value {
                Value::Integer(n) => Ok(Value::Integer(*n)),
                Value::Real(r) => f64_to_i64_truncated(*r, line).map(Value::Integer),
                Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
                Value::Str(s) => s.trim().parse::<i64>().map(Value::Integer).map_err(|_| {
                    RuntimeError::InvalidArgument { details: format!("cannot convert \"{s}\" to an integer"),
                                                    line }
                }),
                Value::Node(_) => Err(type_error(op, value, line)),
            },
            UnaryOperator::Negate => match value.numeric() {
                Some(Value::Integer(n)) => {
                    n.checked_neg().map(Value::Integer).ok_or(RuntimeError::Overflow { line })
                },
                Some(Value::Real(r)) => Ok(Value::Real(-r)),
                _ => Err(type_error(op, value, line)),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}

fn type_error(op: UnaryOperator, value: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply '{op}' to a {}", value.type_name()),
                              line }
}
