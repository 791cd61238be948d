use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::Value,
    },
};

/// Fails unless every argument is truthy.
///
/// Arguments are evaluated in order and evaluation stops at the first falsy
/// one. Yields `true` otherwise.
///
/// # Example
/// ```
/// use sapphire::{
///     ast::Node,
///     interpreter::{
///         evaluator::{core::Scope, function::builtin::assert_fn},
///         value::core::Value,
///     },
/// };
///
/// let mut scope = Scope::new();
///
/// let ok = assert_fn(&[Node::atom(1, 1)], &mut scope, 1).unwrap();
/// assert_eq!(ok, Some(Value::Bool(true)));
///
/// assert!(assert_fn(&[Node::atom("", 2)], &mut scope, 2).is_err());
/// ```
///
/// # Errors
/// `AssertionFailed` on the first falsy argument, or any evaluation error.
pub fn assert_fn(args: &[Node], scope: &mut Scope, line: usize) -> EvalResult<Option<Value>> {
    for arg in args {
        if !scope.eval_child(arg, line)?.is_truthy() {
            return Err(RuntimeError::AssertionFailed { line });
        }
    }

    Ok(Some(Value::Bool(true)))
}
