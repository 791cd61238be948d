/// The parser state, backtracking primitives and the top-level `line` rule.
///
/// Defines [`core::Parser`], which owns the token cursor and the stack of
/// saved positions used to roll back failed alternatives.
pub mod core;

/// Binary operator parsing with precedence climbing.
///
/// Handles the boolean connectives (`||`, `$`, `&&`) and the arithmetic
/// operators (`+ - * / ^`), all folding left.
pub mod binary;

/// Block and call parsing.
///
/// Parses `{{ line. line. }}` blocks and `name:{ arg; arg }` calls.
pub mod block;

/// Prefix operators, grouping, comparisons and atoms.
pub mod unary;

/// Parsing of conditionals and assignments.
///
/// Both productions embed full lines: an assignment's right-hand side and a
/// conditional's branches may themselves be blocks, calls or conditionals.
pub mod statement;

/// Shared helpers for consuming tokens and building diagnostics.
pub mod utils;
