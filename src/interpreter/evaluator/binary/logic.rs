use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Scope, value::core::Value},
};

impl Scope {
    /// Evaluates a logical operation on the truthiness of two values.
    ///
    /// Supported operators are logical AND, XOR and OR. Both operands have
    /// already been evaluated, so there is no short-circuiting.
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let result = Scope::eval_logic(BinaryOperator::Xor, &Value::Integer(1), &Value::from(""));
    /// assert_eq!(result, Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        use BinaryOperator::{And, Or, Xor};

        let (l, r) = (left.is_truthy(), right.is_truthy());
        match op {
            And => Value::Bool(l && r),
            Xor => Value::Bool(l ^ r),
            Or => Value::Bool(l || r),
            _ => unreachable!("eval_logic used with {op}"),
        }
    }
}
