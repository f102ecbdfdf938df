//! Error types
//!
//! Defines the error type raised while validating path arguments.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised by path argument validation
#[derive(Debug)]
pub enum FileToolError {
    /// The path contains a character that is not allowed in file names
    InvalidCharacter { path: String, character: char },
    /// The parent directory of the path could not be created
    DirectoryCreation { path: String, source: io::Error },
    /// The current working directory could not be read to resolve a relative path
    WorkingDirectory(io::Error),
    /// The resolved path is not valid UTF-8 and cannot be passed on as text
    NonUtf8Path(PathBuf),
    /// The validator configuration was rejected
    InvalidConfig(String),
}

impl fmt::Display for FileToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileToolError::InvalidCharacter { path, character } => {
                write!(f, "Invalid character '{}' in path: {}", character, path)
            }
            FileToolError::DirectoryCreation { path, source } => {
                write!(f, "Failed to create directory {}: {}", path, source)
            }
            FileToolError::WorkingDirectory(e) => {
                write!(f, "Cannot resolve current working directory: {}", e)
            }
            FileToolError::NonUtf8Path(p) => {
                write!(f, "Path is not valid UTF-8: {}", p.display())
            }
            FileToolError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for FileToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileToolError::DirectoryCreation { source, .. } => Some(source),
            FileToolError::WorkingDirectory(e) => Some(e),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for FileToolError {
    fn from(error: config::ConfigError) -> Self {
        FileToolError::InvalidConfig(error.to_string())
    }
}
