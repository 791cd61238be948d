use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

impl Scope {
    /// Evaluates an exponentiation operation.
    ///
    /// An integer raised to a non-negative integer uses checked arithmetic
    /// and stays an integer. Negative exponents and real operands are
    /// computed in floating point with `powf`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use sapphire::interpreter::{evaluator::core::Scope, value::core::Value};
    ///
    /// let result = Scope::eval_pow(&Value::Integer(2), &Value::Integer(10), 1).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Scope::eval_pow(&Value::Integer(2), &Value::Integer(-1), 1).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    ///
    /// # Errors
    /// - `Overflow` when an integer power does not fit in an `i64`.
    /// - `DivisionByZero` for zero raised to a negative power.
    /// - `TypeError` when either operand is not a number.
    pub fn eval_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        let (Some(b), Some(e)) = (base.numeric(), exponent.numeric()) else {
            return Err(RuntimeError::TypeError { details: format!("cannot raise a {} to a {}",
                                                                  base.type_name(),
                                                                  exponent.type_name()),
                                                 line });
        };

        let zero_base = matches!(b, Value::Integer(0)) || matches!(b, Value::Real(r) if r == 0.0);
        let negative_exponent =
            matches!(e, Value::Integer(n) if n < 0) || matches!(e, Value::Real(r) if r < 0.0);
        if zero_base && negative_exponent {
            return Err(RuntimeError::DivisionByZero { line });
        }

        match (b, e) {
            (Value::Integer(b), Value::Integer(e)) if e >= 0 => match b {
                0 | 1 => Ok(Value::Integer(if e == 0 { 1 } else { b })),
                -1 => Ok(Value::Integer(if e % 2 == 0 { 1 } else { -1 })),
                _ => b.checked_pow(i64_to_u32_checked(e, line)?)
                      .map(Value::Integer)
                      .ok_or(RuntimeError::Overflow { line }),
            },
            (b, e) => Ok(Value::Real(b.as_real(line)?.powf(e.as_real(line)?))),
        }
    }
}
