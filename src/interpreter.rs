/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks a parsed line, performs arithmetic and logical
/// operations, updates bindings in the scope, and dispatches calls to
/// built-ins and function definitions.
///
/// # Responsibilities
/// - Evaluates every node variant.
/// - Manages the flat scope and the call protocol.
/// - Reports runtime errors such as unbound identifiers or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each tagged with the line it starts on. Whitespace and newlines separate
/// tokens and are otherwise ignored.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles integer and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is a backtracking recursive-descent parser over an ordered
/// choice grammar: alternatives are tried in a fixed order and the first one
/// that succeeds wins.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees.
/// - Restores the token cursor when an alternative fails.
/// - Reports the furthest failure when no alternative succeeds.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, reals, strings, booleans and syntax trees (the
/// result of an assignment or a function definition).
pub mod value;
