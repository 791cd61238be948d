/// The call protocol and the built-in function table.
///
/// Resolves call targets, checks argument counts, runs function definitions
/// in their own frame, and registers the standard library into a scope.
pub mod core;
/// The `print` function implementation.
///
/// Writes the display form of its arguments to standard output.
pub mod print;
/// The `prompt` function implementation.
///
/// Reads one line of input and coerces it to a requested type.
pub mod prompt;
/// Small built-ins that need no I/O, such as `assert`.
pub mod builtin;
