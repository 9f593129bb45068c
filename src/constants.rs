//! # Constants
//!
//! Shared constants used throughout the swapper.
//!
//! The file names are only defaults; both can be overridden from the command
//! line or the environment (see [`crate::config`]).

/// Default secret manifest path, relative to the working directory
pub const DEFAULT_SECRET_FILE: &str = "secret.yml";

/// Default values manifest path, relative to the working directory
pub const DEFAULT_VALUES_FILE: &str = "values.yml";

/// Environment variable overriding the secret manifest path
pub const SECRET_FILE_ENV: &str = "SEALSWAP_SECRET_FILE";

/// Environment variable overriding the values manifest path
pub const VALUES_FILE_ENV: &str = "SEALSWAP_VALUES_FILE";

/// Path of the encrypted-data mapping inside the secret manifest
pub const SECRET_ENCRYPTED_DATA_PATH: [&str; 2] = ["spec", "encryptedData"];

/// Path of the encrypted-data mapping inside the values manifest
pub const VALUES_ENCRYPTED_DATA_PATH: [&str; 2] = ["sealedsecrets", "encrypteddata"];

/// Helm values path the generated template expressions point at
pub const TEMPLATE_VALUES_PREFIX: &str = ".Values.sealedsecrets.encrypteddata";

/// Printed after a blank line once both manifests are written
pub const SUCCESS_MESSAGE: &str = "Values in the files have been successfully swapped.";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "sealswap=warn,sealed_values_swap=warn";
