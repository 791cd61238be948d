/// Core evaluation logic and the scope.
///
/// Contains the main dispatch over node variants, the flat [`core::Scope`]
/// that carries all mutable state, and the bindings it stores.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements integer coercion (`+`), arithmetic negation (`-`) and logical
/// NOT (`~`).
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, exponentiation, comparisons and boolean connectives.
pub mod binary;

/// Evaluation of atoms, assignments, blocks and conditionals, plus the scope
/// accessors they rely on.
pub mod utils;

/// Function calls.
///
/// Implements the call protocol for built-ins and bound function definitions,
/// and the standard library of built-ins.
pub mod function;
