//! Validated operations
//!
//! An operation bundled with the validator that runs before every call.

use super::arg::Arg;
use super::validator::PathValidator;
use crate::error::FileToolError;

/// An operation whose designated path arguments are validated before it runs
#[derive(Debug, Clone)]
pub struct ValidatedOperation<F> {
    validator: PathValidator,
    operation: F,
}

impl<F> ValidatedOperation<F> {
    pub fn new(validator: PathValidator, operation: F) -> Self {
        Self {
            validator,
            operation,
        }
    }

    pub fn validator(&self) -> &PathValidator {
        &self.validator
    }

    /// Validates `args`, then runs the operation with the rewritten arguments
    pub fn call<R>(&self, args: Vec<Arg>) -> Result<R, FileToolError>
    where
        F: Fn(Vec<Arg>) -> R,
    {
        let args = self.validator.validate_args(args)?;
        Ok((self.operation)(args))
    }

    /// Like [`ValidatedOperation::call`], for operations taking a receiver
    pub fn call_on<S, R>(&self, receiver: &S, args: Vec<Arg>) -> Result<R, FileToolError>
    where
        S: ?Sized,
        F: Fn(&S, Vec<Arg>) -> R,
    {
        let args = self.validator.validate_args(args)?;
        Ok((self.operation)(receiver, args))
    }

    /// Runs a fallible operation, folding validation failures into its error type
    pub fn try_call<R, E>(&self, args: Vec<Arg>) -> Result<R, E>
    where
        F: Fn(Vec<Arg>) -> Result<R, E>,
        E: From<FileToolError>,
    {
        let args = self.validator.validate_args(args)?;
        (self.operation)(args)
    }

    /// Validates `args` without blocking the runtime, then awaits the operation
    pub async fn call_async<Fut>(&self, args: Vec<Arg>) -> Result<Fut::Output, FileToolError>
    where
        F: Fn(Vec<Arg>) -> Fut,
        Fut: Future,
    {
        let args = self.validator.validate_args_async(args).await?;
        Ok((self.operation)(args).await)
    }
}
