//! Path argument validation
//!
//! Wraps operations so that selected positional arguments are validated
//! and normalized into absolute paths before the operation runs.

mod arg;
mod validator;
mod wrapped;

// Re-export public types
pub use arg::Arg;
pub use validator::PathValidator;
pub use wrapped::ValidatedOperation;

/// Wraps `operation` with a validator for the given argument positions
pub fn validate_path<F, I>(path_args: I, operation: F) -> ValidatedOperation<F>
where
    I: IntoIterator<Item = usize>,
{
    PathValidator::new(path_args).wrap(operation)
}
