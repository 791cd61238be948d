/// Runtime values and the conversions between them.
///
/// Defines the `Value` enum, truthiness, numeric promotion, and the text
/// form values take when printed or coerced into a string.
pub mod core;
