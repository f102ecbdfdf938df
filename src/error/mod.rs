//! Error handling
//!
//! Defines the error type shared by validation and configuration.

pub mod types;

pub use types::*;
