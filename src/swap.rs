//! # Key-Matching Swapper
//!
//! Moves ciphertext from the secret manifest into the values manifest and
//! leaves a Helm template expression in its place.
//!
//! A secret key `K` matches a values key iff `K.to_lowercase()` is present in
//! the values manifest's encrypted data. Nothing else is compared: payloads
//! of any type move unchanged, and non-string values keys never match.

use crate::constants::TEMPLATE_VALUES_PREFIX;
use crate::manifest::EncryptedData;
use serde_yaml::Value;
use tracing::{info, warn};

/// What happens to entries that have no counterpart in the other manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedPolicy {
    /// Leave them out of both outputs
    #[default]
    Drop,
    /// Keep unmatched secret entries in place and carry unmatched values entries over
    Keep,
}

/// Per-key record of one swap pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapReport {
    /// Secret keys whose payload moved to the values manifest
    pub swapped: Vec<String>,
    /// Secret keys with no values counterpart that were removed
    pub dropped: Vec<String>,
    /// Entries without a counterpart that were kept unchanged
    pub carried: Vec<String>,
    /// Values keys matched by more than one secret key
    pub collisions: Vec<String>,
}

/// Both rebuilt encrypted-data sections plus the report
#[derive(Debug, Clone)]
pub struct SwapOutcome {
    pub secret_data: EncryptedData<String>,
    pub values_data: EncryptedData<Value>,
    pub report: SwapReport,
}

/// Template expression referencing `key` in the values manifest
#[must_use]
pub fn template_expression(values_key: &str) -> String {
    format!("{{{{ {TEMPLATE_VALUES_PREFIX}.{values_key} }}}}")
}

/// Build new encrypted-data sections for both manifests.
///
/// Output order follows the secret manifest. Both outputs are built fresh, so
/// under [`UnmatchedPolicy::Drop`] anything that did not match is gone.
#[must_use]
pub fn swap_encrypted_data(
    secret_data: &EncryptedData<String>,
    values_data: &EncryptedData<Value>,
    policy: UnmatchedPolicy,
) -> SwapOutcome {
    let mut new_secret = EncryptedData::with_capacity(secret_data.len());
    let mut new_values = EncryptedData::with_capacity(values_data.len());
    let mut report = SwapReport::default();

    for (secret_key, secret_value) in secret_data {
        let values_key = secret_key.to_lowercase();

        let lookup = Value::String(values_key.clone());
        if !values_data.contains_key(&lookup) {
            match policy {
                UnmatchedPolicy::Drop => {
                    info!("Dropping {secret_key}: no '{values_key}' entry in values manifest");
                    report.dropped.push(secret_key.clone());
                }
                UnmatchedPolicy::Keep => {
                    new_secret.insert(secret_key.clone(), secret_value.clone());
                    report.carried.push(secret_key.clone());
                }
            }
            continue;
        }

        // Later payloads overwrite earlier ones but the key keeps its first position
        let previous = new_values.insert(lookup, secret_value.clone());
        if previous.is_some() {
            warn!(
                "Multiple secret keys lower-case to '{values_key}'; keeping the payload of {secret_key}"
            );
            report.collisions.push(values_key.clone());
        }
        new_secret.insert(
            secret_key.clone(),
            Value::String(template_expression(&values_key)),
        );
        info!("Swapped {secret_key} -> {values_key}");
        report.swapped.push(secret_key.clone());
    }

    if policy == UnmatchedPolicy::Keep {
        for (values_key, values_value) in values_data {
            if !new_values.contains_key(values_key) {
                new_values.insert(values_key.clone(), values_value.clone());
                report.carried.push(key_label(values_key));
            }
        }
    }

    SwapOutcome {
        secret_data: new_secret,
        values_data: new_values,
        report,
    }
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => format!("{other:?}"),
    }
}
