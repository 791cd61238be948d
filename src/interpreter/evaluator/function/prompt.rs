use std::io::{BufRead, Write};

use crate::{
    ast::Node,
    error::{RuntimeError, Warning},
    interpreter::{
        evaluator::{
            core::{EvalResult, Scope},
            function::core::{Arity, check_arity},
        },
        value::core::Value,
    },
};

/// Reads a line from standard input.
///
/// See [`prompt_with`].
///
/// # Errors
/// Propagates evaluation, coercion and I/O errors.
pub fn prompt(args: &[Node], scope: &mut Scope, line: usize) -> EvalResult<Option<Value>> {
    prompt_with(&mut std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
                args,
                scope,
                line)
}

/// Shows a message, reads one line of input and coerces it.
///
/// The first argument is evaluated and written to `output` without a
/// newline. One line is then read from `input` with the trailing line break
/// removed. Only after that is the optional second argument evaluated; it
/// names the target type:
///
/// | type    | result                                   |
/// |---------|------------------------------------------|
/// | `str`   | the text as read (default)               |
/// | `int`   | a base-10 integer                        |
/// | `float` | a real number                            |
/// | `bool`  | `true` or `false`, ignoring letter case  |
///
/// An unknown type name records a warning and falls back to `str`.
///
/// The argument count is checked here as well as by the registered
/// built-in, since hosts may call this directly with their own streams.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use sapphire::{
///     ast::Node,
///     interpreter::{
///         evaluator::{core::Scope, function::prompt::prompt_with},
///         value::core::Value,
///     },
/// };
///
/// let mut input = Cursor::new("41\n");
/// let mut output = Vec::new();
/// let mut scope = Scope::new();
/// let args = [Node::atom("n? ", 1), Node::atom("int", 1)];
///
/// let v = prompt_with(&mut input, &mut output, &args, &mut scope, 1).unwrap();
///
/// assert_eq!(v, Some(Value::Integer(41)));
/// assert_eq!(output, b"n? ");
/// ```
///
/// # Errors
/// - `ArgumentCountMismatch` unless there are one or two arguments.
/// - `InvalidArgument` when the input does not parse as the requested type.
/// - Evaluation and I/O errors.
pub fn prompt_with(input: &mut dyn BufRead,
                   output: &mut dyn Write,
                   args: &[Node],
                   scope: &mut Scope,
                   line: usize)
                   -> EvalResult<Option<Value>> {
    check_arity("prompt", Arity::OneOf(&[1, 2]), args.len(), line)?;

    let message = scope.eval_child(&args[0], line)?;
    write!(output, "{message}")?;
    output.flush()?;

    let mut text = String::new();
    input.read_line(&mut text)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }

    let type_name = match args.get(1) {
        Some(arg) => scope.eval_child(arg, line)?.to_string(),
        None => "str".to_string(),
    };

    coerce(text, &type_name, scope, line).map(Some)
}

fn coerce(text: String, type_name: &str, scope: &mut Scope, line: usize) -> EvalResult<Value> {
    let invalid = |text: &str| RuntimeError::InvalidArgument { details: format!("\"{text}\" is not a valid {type_name}"),
                                                               line };

    match type_name {
        "str" => Ok(Value::Str(text)),
        "int" => text.trim().parse().map(Value::Integer).map_err(|_| invalid(&text)),
        "float" => text.trim().parse().map(Value::Real).map_err(|_| invalid(&text)),
        "bool" => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(invalid(&text)),
        },
        other => {
            scope.warn(Warning { message: format!("'{other}' is not a valid coercion type; returning the input as a string"),
                                 line });
            Ok(Value::Str(text))
        },
    }
}
