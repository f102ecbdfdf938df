//! Path validation
//!
//! Character checks and lexical normalization of path strings. Nothing in
//! this module touches the filesystem apart from reading the current
//! working directory.

use log::warn;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use crate::error::FileToolError;

/// Characters rejected in path arguments. `:` is absent so drive prefixes stay valid.
pub const FORBIDDEN_CHARS: &str = "<>\"|?*";

/// Separators accepted on input, regardless of host
pub const INPUT_SEPARATORS: [char; 2] = ['/', '\\'];

/// Returns the first character of `path` that appears in `forbidden`
pub fn find_forbidden_char(path: &str, forbidden: &str) -> Option<char> {
    path.chars().find(|c| forbidden.contains(*c))
}

/// Rejects a path containing any of the `forbidden` characters
pub fn check_path_chars(path: &str, forbidden: &str) -> Result<(), FileToolError> {
    match find_forbidden_char(path, forbidden) {
        Some(character) => {
            warn!("Rejected path {:?}: contains '{}'", path, character);
            Err(FileToolError::InvalidCharacter {
                path: path.to_string(),
                character,
            })
        }
        None => Ok(()),
    }
}

/// Rewrites every accepted separator to the host separator
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| {
            if INPUT_SEPARATORS.contains(&c) {
                MAIN_SEPARATOR
            } else {
                c
            }
        })
        .collect()
}

/// Resolves `.` and `..` without following symlinks. `..` never climbs above the root.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => match components.last() {
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir) | None => components.push(component),
                Some(_) => {
                    components.pop();
                }
            },
            Component::CurDir => {}
            other => components.push(other),
        }
    }

    if components.is_empty() {
        PathBuf::from(".")
    } else {
        components.iter().collect()
    }
}

/// Turns `path` into a normalized absolute path, using the current
/// working directory as the base for relative input.
pub fn resolve_absolute(path: &str) -> Result<PathBuf, FileToolError> {
    let host_path = normalize_separators(path);
    let candidate = Path::new(&host_path);

    let absolute = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(FileToolError::WorkingDirectory)?
            .join(candidate)
    };

    Ok(lexical_normalize(&absolute))
}

/// Checks `path` for forbidden characters, then resolves it to a normalized absolute path
pub fn resolve_and_validate_path(path: &str, forbidden: &str) -> Result<PathBuf, FileToolError> {
    check_path_chars(path, forbidden)?;
    resolve_absolute(path)
}

/// Converts a resolved path back into text.
///
/// Fails when the path is not valid UTF-8, which can only come from the
/// working directory joined to a relative input.
pub fn path_to_string(path: PathBuf) -> Result<String, FileToolError> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| FileToolError::NonUtf8Path(PathBuf::from(raw)))
}
