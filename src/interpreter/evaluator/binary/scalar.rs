use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::Value,
    },
    util::num::i64_to_usize_checked,
};

impl Scope {
    /// Evaluates `+`, `-`, `*` or `/` on two values.
    ///
    /// Two integers (booleans count as `0` and `1`) use checked integer
    /// arithmetic. If either operand is real, both are promoted to real.
    /// Division always produces a real, so `7 / 2` is `3.5`.
    ///
    /// Strings support `+` with another string (concatenation) and `*` with
    /// a non-negative integer (repetition).
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let v = Scope::eval_scalar_op(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2), 1);
    /// assert_eq!(v.unwrap(), Value::Real(3.5));
    ///
    /// let v = Scope::eval_scalar_op(BinaryOperator::Mul, &Value::from("ab"), &Value::Integer(3), 1);
    /// assert_eq!(v.unwrap(), Value::from("ababab"));
    /// ```
    ///
    /// # Errors
    /// - `Overflow` when integer arithmetic overflows or a repeated string
    ///   would exceed 1 GiB.
    /// - `DivisionByZero` when dividing by zero.
    /// - `TypeError` for unsupported operand types.
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul};

        if op == Add
           && let (Value::Str(a), Value::Str(b)) = (left, right)
        {
            return Ok(Value::Str(format!("{a}{b}")));
        }

        if op == Mul
           && let (Value::Str(s), count) | (count, Value::Str(s)) = (left, right)
           && let Some(Value::Integer(n)) = count.numeric()
        {
            return repeat(s, n, line).map(Value::Str);
        }

        let (Some(l), Some(r)) = (left.numeric(), right.numeric()) else {
            return Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to a {} and a {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        };

        if op == Div {
            let divisor = r.as_real(line)?;
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            return Ok(Value::Real(l.as_real(line)? / divisor));
        }

        match (l, r) {
            (Value::Integer(a), Value::Integer(b)) => integer_op(op, a, b, line),
            (l, r) => Ok(Value::Real(real_op(op, l.as_real(line)?, r.as_real(line)?))),
        }
    }
}

/// Longest string, in bytes, that repetition may produce.
const MAX_REPEATED_LEN: usize = 1 << 30;

fn repeat(s: &str, count: i64, line: usize) -> EvalResult<String> {
    let count = i64_to_usize_checked(count, line)?;
    match s.len().checked_mul(count) {
        Some(len) if len <= MAX_REPEATED_LEN => Ok(s.repeat(count)),
        _ => Err(RuntimeError::Overflow { line }),
    }
}

fn integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        _ => unreachable!("integer_op used with {op}"),
    };

    result.map(Value::Integer).ok_or(RuntimeError::Overflow { line })
}

fn real_op(op: BinaryOperator, a: f64, b: f64) -> f64 {
    match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        _ => unreachable!("real_op used with {op}"),
    }
}
