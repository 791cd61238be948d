use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::Value,
    },
};

impl Scope {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Relational operators compare two numbers (integers and reals mix
    /// freely) or two strings (lexicographically). `=` compares numbers by
    /// value and everything else structurally; values of unrelated types are
    /// simply unequal.
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let result = Scope::eval_comparison(BinaryOperator::Less, &Value::Real(3.0), &Value::Integer(5), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Scope::eval_comparison(BinaryOperator::Equal, &Value::Integer(2), &Value::Real(2.0), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    ///
    /// # Errors
    /// `TypeError` when a relational operator is applied to values that have
    /// no ordering, such as a number and a string.
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual};

        if op == Equal {
            return Ok(Value::Bool(values_equal(left, right, line)?));
        }

        let ordering = compare(left, right, line)?.ok_or_else(|| {
                           RuntimeError::TypeError { details: format!("cannot compare a {} with a {}",
                                                                      left.type_name(),
                                                                      right.type_name()),
                                                     line }
                       })?;

        let result = match op {
            Less => ordering == Ordering::Less,
            Greater => ordering == Ordering::Greater,
            LessEqual => ordering != Ordering::Greater,
            GreaterEqual => ordering != Ordering::Less,
            _ => unreachable!("eval_comparison used with {op}"),
        };

        Ok(Value::Bool(result))
    }
}

/// Orders two values, or returns `None` when they are not comparable.
///
/// `NaN` never arises from Sapphire literals but can come from host values;
/// it is unordered like any other incomparable pair.
fn compare(left: &Value, right: &Value, line: usize) -> EvalResult<Option<Ordering>> {
    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        return Ok(Some(a.cmp(b)));
    }

    match (left.numeric(), right.numeric()) {
        (Some(Value::Integer(a)), Some(Value::Integer(b))) => Ok(Some(a.cmp(&b))),
        (Some(a), Some(b)) => Ok(a.as_real(line)?.partial_cmp(&b.as_real(line)?)),
        _ => Ok(None),
    }
}

fn values_equal(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
            Ok(compare(left, right, line)? == Some(Ordering::Equal))
        },
        _ => Ok(left == right),
    }
}
