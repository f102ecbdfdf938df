//! Path argument validator
//!
//! Rewrites designated text arguments into normalized absolute paths whose
//! parent directory exists.

use log::debug;
use std::path::PathBuf;

use super::arg::Arg;
use super::wrapped::ValidatedOperation;
use crate::config::ValidatorConfig;
use crate::error::FileToolError;
use crate::storage::filesystem::{ensure_parent_dir, ensure_parent_dir_async};
use crate::storage::validation::{FORBIDDEN_CHARS, path_to_string, resolve_and_validate_path};

/// Validates the positional arguments listed in `path_args`
///
/// Positions are checked in the order given. Positions beyond the end of a
/// call's argument list are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct PathValidator {
    path_args: Vec<usize>,
    forbidden_chars: String,
}

impl PathValidator {
    /// Validator for `path_args` with the built-in character rules
    pub fn new<I>(path_args: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut positions = Vec::new();
        for index in path_args {
            if !positions.contains(&index) {
                positions.push(index);
            }
        }

        Self {
            path_args: positions,
            forbidden_chars: FORBIDDEN_CHARS.to_string(),
        }
    }

    /// Builds a validator from loaded settings
    ///
    /// Extra forbidden characters extend the built-in set, never replace it.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self, FileToolError> {
        config.validate()?;
        let mut validator = Self::new(config.path_args.iter().copied());
        for c in config.extra_forbidden_chars.chars() {
            if !validator.forbidden_chars.contains(c) {
                validator.forbidden_chars.push(c);
            }
        }
        Ok(validator)
    }

    pub fn path_args(&self) -> &[usize] {
        &self.path_args
    }

    /// Every character this validator rejects, built-in set first
    pub fn forbidden_chars(&self) -> &str {
        &self.forbidden_chars
    }

    /// Wraps `operation` so every call validates its arguments first
    pub fn wrap<F>(&self, operation: F) -> ValidatedOperation<F> {
        ValidatedOperation::new(self.clone(), operation)
    }

    /// Checks and resolves a single path string without touching the filesystem
    pub fn resolve(&self, path: &str) -> Result<PathBuf, FileToolError> {
        resolve_and_validate_path(path, &self.forbidden_chars)
    }

    /// Validates a single path string and ensures its parent directory exists
    pub fn validate_path(&self, path: &str) -> Result<String, FileToolError> {
        let resolved = self.resolve(path)?;
        ensure_parent_dir(&resolved)?;
        path_to_string(resolved)
    }

    /// Async counterpart of [`PathValidator::validate_path`]
    pub async fn validate_path_async(&self, path: &str) -> Result<String, FileToolError> {
        let resolved = self.resolve(path)?;
        ensure_parent_dir_async(&resolved).await?;
        path_to_string(resolved)
    }

    /// Rewrites the designated text arguments of one call.
    ///
    /// Stops at the first failure. Directories created for earlier
    /// arguments are left in place.
    pub fn validate_args(&self, mut args: Vec<Arg>) -> Result<Vec<Arg>, FileToolError> {
        for &index in &self.path_args {
            let Some(Arg::Text(raw)) = args.get(index) else {
                continue;
            };
            let validated = self.validate_path(raw)?;
            debug!("Argument {} resolved {:?} -> {:?}", index, raw, validated);
            args[index] = Arg::Text(validated);
        }
        Ok(args)
    }

    /// Async counterpart of [`PathValidator::validate_args`]
    pub async fn validate_args_async(&self, mut args: Vec<Arg>) -> Result<Vec<Arg>, FileToolError> {
        for &index in &self.path_args {
            let Some(Arg::Text(raw)) = args.get(index) else {
                continue;
            };
            let validated = self.validate_path_async(raw).await?;
            debug!("Argument {} resolved {:?} -> {:?}", index, raw, validated);
            args[index] = Arg::Text(validated);
        }
        Ok(args)
    }
}

impl Default for PathValidator {
    fn default() -> Self {
        Self::new([0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn text(path: &Path) -> Arg {
        Arg::Text(path.to_string_lossy().into_owned())
    }

    #[test]
    fn duplicate_positions_are_collapsed() {
        let validator = PathValidator::new([1, 0, 1]);
        assert_eq!(validator.path_args(), &[1, 0]);
    }

    #[test]
    fn out_of_range_positions_are_skipped() {
        let validator = PathValidator::new([0, 5]);
        let args = validator.validate_args(vec![Arg::Int(1)]).unwrap();
        assert_eq!(args, vec![Arg::Int(1)]);
    }

    #[test]
    fn undesignated_text_is_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let untouched = temp_dir.path().join("never").join("created.txt");
        let validator = PathValidator::new([0]);

        let args = validator
            .validate_args(vec![text(&temp_dir.path().join("a.txt")), text(&untouched)])
            .unwrap();

        assert_eq!(args[1], text(&untouched));
        assert!(!temp_dir.path().join("never").exists());
    }

    #[test]
    fn earlier_directories_survive_a_later_failure() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("kept").join("one.txt");
        let second = temp_dir.path().join("bad*name.txt");
        let validator = PathValidator::new([0, 1]);

        let err = validator
            .validate_args(vec![text(&first), text(&second)])
            .unwrap_err();

        assert!(matches!(err, FileToolError::InvalidCharacter { character: '*', .. }));
        assert!(temp_dir.path().join("kept").is_dir());
    }

    #[test]
    fn extra_forbidden_chars_extend_builtin_set() {
        let temp_dir = TempDir::new().unwrap();
        let config = ValidatorConfig {
            extra_forbidden_chars: "#?".into(),
            ..ValidatorConfig::default()
        };
        let validator = PathValidator::from_config(&config).unwrap();
        assert_eq!(validator.forbidden_chars(), "<>\"|?*#");

        assert!(matches!(
            validator.resolve("issue#1.txt"),
            Err(FileToolError::InvalidCharacter { character: '#', .. })
        ));

        let builtin = temp_dir.path().join("a?b*c.txt");
        let err = validator
            .validate_args(vec![text(&builtin)])
            .unwrap_err();
        assert!(matches!(err, FileToolError::InvalidCharacter { character: '?', .. }));
    }

    #[test]
    fn configured_validator_always_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let validator = PathValidator::from_config(&ValidatorConfig::default()).unwrap();

        let path = temp_dir.path().join("missing").join("file.txt");
        let result = validator.validate_path(&path.to_string_lossy()).unwrap();

        assert!(Path::new(&result).parent().unwrap().is_dir());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ValidatorConfig {
            extra_forbidden_chars: "\\".into(),
            ..ValidatorConfig::default()
        };
        assert!(matches!(
            PathValidator::from_config(&config),
            Err(FileToolError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn async_validation_matches_sync() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("async").join("file.txt");
        let validator = PathValidator::default();

        let args = validator
            .validate_args_async(vec![text(&path), Arg::Int(7)])
            .await
            .unwrap();

        assert_eq!(args[0], text(&path));
        assert_eq!(args[1], Arg::Int(7));
        assert!(temp_dir.path().join("async").is_dir());
    }
}
