//! # Configuration
//!
//! Resolved settings for one swap run. The binary fills this from command-line
//! flags and environment variables; defaults match the fixed file names.

use crate::constants::{DEFAULT_SECRET_FILE, DEFAULT_VALUES_FILE};
use crate::swap::UnmatchedPolicy;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapConfig {
    /// SealedSecret manifest to strip ciphertext from
    pub secret_file: PathBuf,
    /// Helm values manifest to receive the ciphertext
    pub values_file: PathBuf,
    /// Render only; leave both files untouched
    pub dry_run: bool,
    pub unmatched: UnmatchedPolicy,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            secret_file: PathBuf::from(DEFAULT_SECRET_FILE),
            values_file: PathBuf::from(DEFAULT_VALUES_FILE),
            dry_run: false,
            unmatched: UnmatchedPolicy::Drop,
        }
    }
}

impl SwapConfig {
    /// Config for an explicit pair of files, everything else default
    #[must_use]
    pub fn new(secret_file: impl Into<PathBuf>, values_file: impl Into<PathBuf>) -> Self {
        Self {
            secret_file: secret_file.into(),
            values_file: values_file.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_file_names() {
        let config = SwapConfig::default();
        assert_eq!(config.secret_file, PathBuf::from("secret.yml"));
        assert_eq!(config.values_file, PathBuf::from("values.yml"));
        assert!(!config.dry_run);
        assert_eq!(config.unmatched, UnmatchedPolicy::Drop);
    }
}
