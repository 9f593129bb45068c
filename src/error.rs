//! # Errors
//!
//! Error taxonomy for the swap pipeline.
//!
//! Only [`SwapError::FileNotFound`] is recovered by the binary; every other
//! variant terminates the run with a non-zero exit status.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwapError {
    /// An input manifest does not exist
    #[error("The file {} does not exist.", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML
    #[error("Failed to parse YAML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An expected mapping is absent from the document
    #[error("{} is missing required field `{field}`", .path.display())]
    MissingField { path: PathBuf, field: String },

    /// The expected mapping exists but has the wrong shape
    #[error("Field `{field}` in {} is not a mapping of {expected}: {source}", .path.display())]
    InvalidField {
        path: PathBuf,
        field: String,
        expected: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SwapError {
    /// Check if this is the missing-input condition the CLI reports and recovers from
    #[must_use]
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, SwapError::FileNotFound { .. })
    }

    /// Path of the manifest the error refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            SwapError::FileNotFound { path }
            | SwapError::Read { path, .. }
            | SwapError::Parse { path, .. }
            | SwapError::MissingField { path, .. }
            | SwapError::InvalidField { path, .. }
            | SwapError::Serialize { path, .. }
            | SwapError::Write { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message_names_path() {
        let err = SwapError::FileNotFound {
            path: PathBuf::from("secret.yml"),
        };
        assert_eq!(err.to_string(), "The file secret.yml does not exist.");
        assert!(err.is_file_not_found());
    }

    #[test]
    fn test_missing_field_is_not_recovered() {
        let err = SwapError::MissingField {
            path: PathBuf::from("values.yml"),
            field: "sealedsecrets.encrypteddata".to_string(),
        };
        assert!(!err.is_file_not_found());
        assert_eq!(err.path(), Path::new("values.yml"));
        assert_eq!(
            err.to_string(),
            "values.yml is missing required field `sealedsecrets.encrypteddata`"
        );
    }
}
