//! File system storage management
//!
//! Handles path validation and parent directory creation.

pub mod filesystem;
pub mod validation;

// Re-export commonly used validation functions
pub use filesystem::{ensure_parent_dir, ensure_parent_dir_async};
pub use validation::{FORBIDDEN_CHARS, resolve_and_validate_path};
