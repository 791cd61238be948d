//! # sapphire
//!
//! sapphire is an interpreter for Sapphire, a small line-oriented scripting
//! language, written in Rust. Source text is tokenized, parsed by a
//! backtracking recursive-descent parser into a syntax tree, and evaluated by
//! a tree-walking evaluator against one flat, mutable scope.
//!
//! ```
//! use sapphire::{Scope, Value, run};
//!
//! let mut scope = Scope::with_builtins();
//! run("{{ x :- 2 + 3 * 4. y :- x * 2. }}", &mut scope).unwrap();
//!
//! assert_eq!(run("y", &mut scope).unwrap(), Some(Value::Integer(28)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::ParseError, interpreter::parser::core::Parser};

/// Defines the structure of parsed code.
///
/// This module declares the [`ast::Node`] enum and related types that
/// represent one parsed line as a tree. The tree is built by the parser and
/// walked by the evaluator; assignments also store trees in the scope.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source line numbers to nodes for error reporting.
/// - Prints nodes in a compact prefix form for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating code, each carrying the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser,
///   evaluator).
/// - Defines the non-fatal warning raised by coercing assignments.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokenizing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32`, `usize`, and `f64` without silent
///   data loss.
pub mod util;

pub use error::Error;
pub use interpreter::{
    evaluator::{core::Scope, function::core::register_builtins},
    lexer::tokenize,
    value::core::Value,
};

/// Tokenizes and parses one line of source code.
///
/// The whole input must form a single line (an assignment, conditional,
/// call, block, boolean or expression); newlines are only whitespace.
///
/// # Errors
/// Returns the first tokenizer error, or a parse error pointing at the
/// furthest token any alternative reached.
///
/// # Examples
/// ```
/// use sapphire::parse;
///
/// let ast = parse("x :- 2 + 3 * 4").unwrap();
/// assert_eq!(ast.to_string(), "[x <- (+ 2 (* 3 4))]");
///
/// assert!(parse("2 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<ast::Node, ParseError> {
    let tokens = tokenize(source)?;
    tracing::debug!(tokens = tokens.len(), "parsing");

    Parser::new(&tokens).parse_program()
}

/// Parses and evaluates one line of source code against `scope`.
///
/// Bindings made by the line stay in `scope`, so consecutive runs share
/// state. Warnings raised while evaluating are collected in the scope; see
/// [`Scope::take_warnings`].
///
/// # Returns
/// The value of the line, or `None` when it produced no value (for example
/// an empty block or a call to `print`).
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use sapphire::{Scope, Value, run};
///
/// let mut scope = Scope::new();
///
/// let res = run("3 > 2 => 1 !! 2", &mut scope).unwrap();
/// assert_eq!(res, Some(Value::Integer(1)));
///
/// // 'x' is not bound.
/// assert!(run("x + 1", &mut scope).is_err());
/// ```
pub fn run(source: &str, scope: &mut Scope) -> Result<Option<Value>, Error> {
    let ast = parse(source)?;
    tracing::debug!(%ast, "evaluating");

    Ok(scope.eval(&ast)?)
}
