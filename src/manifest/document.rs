//! # Document Navigation
//!
//! Reading a YAML file into a generic tree and walking fixed key paths in it.

use crate::error::SwapError;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// Read and parse a whole YAML file.
pub(crate) fn read_document(path: &Path) -> Result<Value, SwapError> {
    let content = std::fs::read_to_string(path).map_err(|source| SwapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    serde_yaml::from_str(&content).map_err(|source| SwapError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn dotted(segments: &[&str]) -> String {
    segments.join(".")
}

/// Follow `segments` through nested mappings.
///
/// Any absent key or non-mapping node on the way is reported as the whole
/// dotted path missing.
pub(crate) fn section<'a>(
    document: &'a Value,
    segments: &[&str],
    path: &Path,
) -> Result<&'a Value, SwapError> {
    segments
        .iter()
        .try_fold(document, |node, key| node.as_mapping()?.get(*key))
        .ok_or_else(|| missing(segments, path))
}

pub(crate) fn section_mut<'a>(
    document: &'a mut Value,
    segments: &[&str],
    path: &Path,
) -> Result<&'a mut Value, SwapError> {
    segments
        .iter()
        .try_fold(document, |node, key| node.as_mapping_mut()?.get_mut(*key))
        .ok_or_else(|| missing(segments, path))
}

fn missing(segments: &[&str], path: &Path) -> SwapError {
    SwapError::MissingField {
        path: path.to_path_buf(),
        field: dotted(segments),
    }
}
