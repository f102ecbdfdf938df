//! Path argument validation for file tools
//!
//! Validates and normalizes filesystem path arguments before a wrapped
//! operation runs.

pub mod config;
pub mod error;
pub mod path_args;
pub mod storage;
pub mod utils;

pub use config::ValidatorConfig;
pub use error::FileToolError;
pub use path_args::{Arg, PathValidator, ValidatedOperation, validate_path};
