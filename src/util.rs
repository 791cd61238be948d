/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. All functions
/// return a `Result`, which is `Ok` if the conversion is valid, or a
/// `RuntimeError` if the value is out of range.
pub mod num;
