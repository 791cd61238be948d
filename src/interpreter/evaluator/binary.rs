/// Operator dispatch for binary operations.
pub mod core;
/// Integer and real arithmetic, plus string concatenation and repetition.
pub mod scalar;
/// Exponentiation.
pub mod power;
/// Relational and equality comparisons.
pub mod comparison;
/// Logical AND, XOR and OR.
pub mod logic;
