//! Error types for reconciliation plans

use pc_comparator::CompareError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for reconciliation operations
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Errors that can occur while loading or running a plan
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Failed to read a plan file
    #[error("failed to read plan file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a YAML plan
    #[error("failed to parse YAML plan from {origin}: {source}")]
    ParseYaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse a JSON plan
    #[error("failed to parse JSON plan from {origin}: {source}")]
    ParseJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Plan declares no checks
    #[error("plan '{name}' has no checks")]
    EmptyPlan { name: String },

    /// A single check could not be evaluated
    #[error("check #{index} ({first} <-> {second}) failed: {source}")]
    Check {
        index: usize,
        first: String,
        second: String,
        #[source]
        source: CompareError,
    },

    /// Binding the instances failed
    #[error(transparent)]
    Compare(#[from] CompareError),
}
