//! # Existence Guard
//!
//! Verifies both input manifests exist before anything is read.

use crate::error::SwapError;
use std::path::Path;
use tracing::debug;

/// Fail with [`SwapError::FileNotFound`] for the first missing path.
///
/// The secret manifest is checked first, so when both are absent only the
/// secret manifest is reported.
pub fn ensure_files_exist(secret_file: &Path, values_file: &Path) -> Result<(), SwapError> {
    for path in [secret_file, values_file] {
        if !path.exists() {
            return Err(SwapError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!("Found input file: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_both_present() {
        let temp_dir = TempDir::new().unwrap();
        let secret = temp_dir.path().join("secret.yml");
        let values = temp_dir.path().join("values.yml");
        fs::write(&secret, "spec: {}").unwrap();
        fs::write(&values, "sealedsecrets: {}").unwrap();

        assert!(ensure_files_exist(&secret, &values).is_ok());
    }

    #[test]
    fn test_missing_secret_reported_first() {
        let temp_dir = TempDir::new().unwrap();
        let secret = temp_dir.path().join("secret.yml");
        let values = temp_dir.path().join("values.yml");

        let err = ensure_files_exist(&secret, &values).unwrap_err();
        assert!(err.is_file_not_found());
        assert_eq!(err.path(), secret.as_path());
    }

    #[test]
    fn test_missing_values_only() {
        let temp_dir = TempDir::new().unwrap();
        let secret = temp_dir.path().join("secret.yml");
        let values = temp_dir.path().join("values.yml");
        fs::write(&secret, "spec: {}").unwrap();

        let err = ensure_files_exist(&secret, &values).unwrap_err();
        assert_eq!(err.path(), values.as_path());
    }
}
