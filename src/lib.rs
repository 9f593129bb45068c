//! Sealed Values Swap Library
//!
//! Moves SealedSecret ciphertext out of a secret manifest
//! (`spec.encryptedData`) into a Helm values manifest
//! (`sealedsecrets.encrypteddata`), leaving
//! `{{ .Values.sealedsecrets.encrypteddata.<key> }}` placeholders behind.
//!
//! The `sealswap` binary is the intended entry point; the modules are public
//! so the pipeline can be tested end to end.

pub mod config;
pub mod constants;
pub mod error;
pub mod guard;
pub mod manifest;
pub mod pipeline;
pub mod swap;
pub mod writer;

pub use config::SwapConfig;
pub use error::SwapError;
pub use pipeline::{plan, run, SwapPlan};
pub use swap::{SwapReport, UnmatchedPolicy};
