use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::Value,
    },
};

impl Scope {
    /// Evaluates a binary operation between two values.
    ///
    /// Both operands have already been evaluated, left first; there is no
    /// short-circuiting. The operation is routed to a specialized handler:
    /// arithmetic goes to `eval_scalar_op`, `^` to `eval_pow`, relational and
    /// equality operators to `eval_comparison`, and the boolean connectives
    /// to `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let result = Scope::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    ///
    /// # Errors
    /// Whatever the selected handler reports.
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Or, Pow, Sub, Xor,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, line),
            Pow => Self::eval_pow(left, right, line),
            Less | Greater | LessEqual | GreaterEqual | Equal => {
                Self::eval_comparison(op, left, right, line)
            },
            And | Xor | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
