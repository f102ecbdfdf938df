//! File system operations
//!
//! Creates the parent directory of a validated path.

use log::{error, info};
use std::fs;
use std::path::Path;

use crate::error::FileToolError;

fn creation_error(dir: &Path, source: std::io::Error) -> FileToolError {
    error!("Failed to create directory {}: {}", dir.display(), source);
    FileToolError::DirectoryCreation {
        path: dir.to_string_lossy().into_owned(),
        source,
    }
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Ensures the parent directory of `path` exists, creating missing ancestors.
///
/// Returns `true` when a directory had to be created. The target itself is
/// never created.
pub fn ensure_parent_dir(path: &Path) -> Result<bool, FileToolError> {
    let Some(parent) = path.parent() else {
        return Ok(false);
    };
    if directory_exists(parent) {
        return Ok(false);
    }

    fs::create_dir_all(parent).map_err(|e| creation_error(parent, e))?;
    info!("Created directory {}", parent.display());
    Ok(true)
}

/// Async counterpart of [`ensure_parent_dir`]
pub async fn ensure_parent_dir_async(path: &Path) -> Result<bool, FileToolError> {
    let Some(parent) = path.parent() else {
        return Ok(false);
    };
    if tokio::fs::metadata(parent)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
    {
        return Ok(false);
    }

    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| creation_error(parent, e))?;
    info!("Created directory {}", parent.display());
    Ok(true)
}
