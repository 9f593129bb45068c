//! # Manifests
//!
//! Typed records for the two manifests the swapper reconciles.
//!
//! ## Schemas
//!
//! - **Secret manifest**: a SealedSecret holding ciphertext under
//!   `spec.encryptedData`. Keys must be strings (they are lower-cased to find
//!   their values counterpart); payloads are moved as-is, whatever their type.
//! - **Values manifest**: Helm values holding the same ciphertext under
//!   `sealedsecrets.encrypteddata`. Only the keys are read, and a key of any
//!   type is accepted. Non-string keys simply never match.
//!
//! The rest of each document is kept as an ordered tree, so unrelated fields
//! are written back unchanged and in their original order.

mod document;

use crate::constants::{SECRET_ENCRYPTED_DATA_PATH, VALUES_ENCRYPTED_DATA_PATH};
use crate::error::SwapError;
use document::{dotted, read_document, section, section_mut};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Encrypted-data section, in document order
pub type EncryptedData<K> = IndexMap<K, Value>;

/// Shape of one manifest kind
pub trait ManifestSchema {
    /// Key path of the encrypted-data mapping
    const ENCRYPTED_DATA_PATH: [&'static str; 2];
    /// Human-readable section description used in errors
    const EXPECTED: &'static str;
    type Key: DeserializeOwned + Clone + Eq + Hash + Into<Value>;
}

#[derive(Debug, Clone, Copy)]
pub struct SecretSchema;

impl ManifestSchema for SecretSchema {
    const ENCRYPTED_DATA_PATH: [&'static str; 2] = SECRET_ENCRYPTED_DATA_PATH;
    const EXPECTED: &'static str = "string keys to payloads";
    type Key = String;
}

#[derive(Debug, Clone, Copy)]
pub struct ValuesSchema;

impl ManifestSchema for ValuesSchema {
    const ENCRYPTED_DATA_PATH: [&'static str; 2] = VALUES_ENCRYPTED_DATA_PATH;
    const EXPECTED: &'static str = "keys to values";
    type Key = Value;
}

pub type SecretManifest = Manifest<SecretSchema>;
pub type ValuesManifest = Manifest<ValuesSchema>;

/// A loaded manifest: the full document plus its typed encrypted-data view
pub struct Manifest<S: ManifestSchema> {
    path: PathBuf,
    document: Value,
    encrypted_data: EncryptedData<S::Key>,
    _schema: PhantomData<S>,
}

impl<S: ManifestSchema> Manifest<S> {
    /// Load and validate a manifest file
    pub fn load(path: &Path) -> Result<Self, SwapError> {
        let document = read_document(path)?;
        Self::from_document(path, document)
    }

    /// Validate an already-parsed document
    pub fn from_document(path: &Path, document: Value) -> Result<Self, SwapError> {
        let segments = S::ENCRYPTED_DATA_PATH;
        let raw = section(&document, &segments, path)?;

        // `encryptedData:` with nothing under it parses as null
        let encrypted_data = if raw.is_null() {
            EncryptedData::new()
        } else {
            serde_yaml::from_value(raw.clone()).map_err(|source| SwapError::InvalidField {
                path: path.to_path_buf(),
                field: dotted(&segments),
                expected: S::EXPECTED,
                source,
            })?
        };

        debug!(
            "Loaded {} entries from {} at {}",
            encrypted_data.len(),
            path.display(),
            dotted(&segments)
        );

        Ok(Self {
            path: path.to_path_buf(),
            document,
            encrypted_data,
            _schema: PhantomData,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn encrypted_data(&self) -> &EncryptedData<S::Key> {
        &self.encrypted_data
    }

    /// Full document tree, including the current encrypted-data section
    #[must_use]
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Replace the encrypted-data section wholesale.
    ///
    /// The section keeps its position inside its parent mapping.
    pub fn replace_encrypted_data(
        &mut self,
        encrypted_data: EncryptedData<S::Key>,
    ) -> Result<(), SwapError> {
        let mapping: Mapping = encrypted_data
            .iter()
            .map(|(key, payload)| (key.clone().into(), payload.clone()))
            .collect();

        *section_mut(&mut self.document, &S::ENCRYPTED_DATA_PATH, &self.path)? =
            Value::Mapping(mapping);
        self.encrypted_data = encrypted_data;
        Ok(())
    }
}

impl<S: ManifestSchema> fmt::Debug for Manifest<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads are ciphertext; keep them out of logs
        f.debug_struct("Manifest")
            .field("path", &self.path)
            .field("entries", &self.encrypted_data.len())
            .finish_non_exhaustive()
    }
}
