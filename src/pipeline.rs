//! # Pipeline
//!
//! The whole swap as one linear sequence:
//!
//! 1. Check both input files exist
//! 2. Load and validate both manifests
//! 3. Swap the encrypted-data sections
//! 4. Render both manifests (templates bare in the secret manifest only)
//! 5. Write the secret manifest, then the values manifest
//!
//! Steps 1-4 happen in [`plan`] and touch nothing on disk. There is no
//! rollback: if the values write fails the secret manifest stays migrated.

use crate::config::SwapConfig;
use crate::error::SwapError;
use crate::guard::ensure_files_exist;
use crate::manifest::{SecretManifest, ValuesManifest};
use crate::swap::{swap_encrypted_data, SwapReport};
use crate::writer::{render, write_manifest, TemplateStyle};
use std::path::PathBuf;
use tracing::{debug, info};

/// Rendered output of a swap, not yet written
#[derive(Debug, Clone)]
pub struct SwapPlan {
    pub secret_file: PathBuf,
    pub secret_yaml: String,
    pub values_file: PathBuf,
    pub values_yaml: String,
    pub report: SwapReport,
}

impl SwapPlan {
    /// Overwrite both manifests with the rendered text
    pub fn apply(&self) -> Result<(), SwapError> {
        write_manifest(&self.secret_file, &self.secret_yaml)?;
        write_manifest(&self.values_file, &self.values_yaml)?;
        info!(
            "Swapped {} entries into {}",
            self.report.swapped.len(),
            self.values_file.display()
        );
        Ok(())
    }
}

/// Load, swap, and render without writing anything.
pub fn plan(config: &SwapConfig) -> Result<SwapPlan, SwapError> {
    ensure_files_exist(&config.secret_file, &config.values_file)?;

    let mut secret = SecretManifest::load(&config.secret_file)?;
    let mut values = ValuesManifest::load(&config.values_file)?;
    debug!("Loaded {secret:?} and {values:?}");

    let outcome = swap_encrypted_data(
        secret.encrypted_data(),
        values.encrypted_data(),
        config.unmatched,
    );
    secret.replace_encrypted_data(outcome.secret_data)?;
    values.replace_encrypted_data(outcome.values_data)?;

    Ok(SwapPlan {
        secret_yaml: render(secret.document(), TemplateStyle::Bare, secret.path())?,
        values_yaml: render(values.document(), TemplateStyle::Quoted, values.path())?,
        secret_file: config.secret_file.clone(),
        values_file: config.values_file.clone(),
        report: outcome.report,
    })
}

/// Run the full swap; in dry-run mode nothing is written.
pub fn run(config: &SwapConfig) -> Result<SwapPlan, SwapError> {
    let plan = plan(config)?;
    if config.dry_run {
        debug!(
            "Dry run: leaving {} and {} untouched",
            plan.secret_file.display(),
            plan.values_file.display()
        );
    } else {
        plan.apply()?;
    }
    Ok(plan)
}
