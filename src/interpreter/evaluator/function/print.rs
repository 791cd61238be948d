use std::io::Write;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{EvalResult, Scope},
        value::core::{Value, display_optional},
    },
};

/// Prints its arguments to standard output.
///
/// See [`print_to`].
///
/// # Errors
/// Propagates evaluation errors and I/O failures.
pub fn print(args: &[Node], scope: &mut Scope, line: usize) -> EvalResult<Option<Value>> {
    print_to(&mut std::io::stdout().lock(), args, scope, line)
}

/// Evaluates every argument in order and writes their display forms,
/// separated by single spaces and followed by a newline, to `out`.
///
/// An argument without a value is written as `none`. Yields no value.
///
/// # Example
/// ```
/// use sapphire::{
///     ast::Node,
///     interpreter::evaluator::{core::Scope, function::print::print_to},
/// };
///
/// let mut out = Vec::new();
/// let mut scope = Scope::new();
/// let args = [Node::atom("total:", 1), Node::atom(42, 1)];
///
/// let result = print_to(&mut out, &args, &mut scope, 1).unwrap();
///
/// assert_eq!(result, None);
/// assert_eq!(String::from_utf8(out).unwrap(), "total: 42\n");
/// ```
///
/// # Errors
/// Propagates evaluation errors and I/O failures.
pub fn print_to(out: &mut dyn Write,
                args: &[Node],
                scope: &mut Scope,
                _line: usize)
                -> EvalResult<Option<Value>> {
    let mut parts = Vec::with_capacity(args.len());
    for arg in args {
        parts.push(display_optional(scope.eval(arg)?.as_ref()));
    }

    writeln!(out, "{}", parts.join(" "))?;
    Ok(None)
}
