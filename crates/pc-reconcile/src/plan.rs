//! Reconciliation plan files
//!
//! A plan names the field pairs to compare, in order:
//!
//! ```yaml
//! name: ledger-vs-statement
//! checks:
//!   - first: id
//!   - first: memo
//!     second: description
//!   - first: amounts
//!     kind: sequence
//! ```
//!
//! `second` defaults to `first` and `kind` defaults to `scalar`. Files ending
//! in `.json` are read as JSON, everything else as YAML.

use crate::error::{ReconcileError, ReconcileResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// How the two selected values are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    #[default]
    Scalar,
    Sequence,
}

/// One field pair of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldCheck {
    /// Field name in the first record's registry
    pub first: String,
    /// Field name in the second record's registry, if it differs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
    #[serde(default)]
    pub kind: CheckKind,
}

impl FieldCheck {
    pub fn scalar(first: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: None,
            kind: CheckKind::Scalar,
        }
    }

    pub fn sequence(first: impl Into<String>) -> Self {
        Self {
            kind: CheckKind::Sequence,
            ..Self::scalar(first)
        }
    }

    /// Use a different field name on the second record
    pub fn against(mut self, second: impl Into<String>) -> Self {
        self.second = Some(second.into());
        self
    }

    /// Field name looked up on the second record
    pub fn second_name(&self) -> &str {
        self.second.as_deref().unwrap_or(&self.first)
    }
}

/// A named, ordered list of field checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReconcilePlan {
    pub name: String,
    #[serde(default)]
    pub checks: Vec<FieldCheck>,
}

impl ReconcilePlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
        }
    }

    pub fn check(mut self, check: FieldCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Parse a plan from YAML text
    pub fn from_yaml_str(content: &str) -> ReconcileResult<Self> {
        Self::parse_yaml(content, "<inline>")
    }

    /// Parse a plan from JSON text
    pub fn from_json_str(content: &str) -> ReconcileResult<Self> {
        Self::parse_json(content, "<inline>")
    }

    /// Load a plan file
    pub fn from_file(path: impl AsRef<Path>) -> ReconcileResult<Self> {
        let path = path.as_ref();
        debug!("Loading reconciliation plan: {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| ReconcileError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let origin = path.display().to_string();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&content, &origin)
        } else {
            Self::parse_yaml(&content, &origin)
        }
    }

    /// Reject plans that would compare nothing
    pub fn validate(&self) -> ReconcileResult<()> {
        if self.checks.is_empty() {
            return Err(ReconcileError::EmptyPlan {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    fn parse_yaml(content: &str, origin: &str) -> ReconcileResult<Self> {
        let plan: Self = serde_yaml::from_str(content).map_err(|e| ReconcileError::ParseYaml {
            origin: origin.to_string(),
            source: e,
        })?;
        plan.validate()?;
        Ok(plan)
    }

    fn parse_json(content: &str, origin: &str) -> ReconcileResult<Self> {
        let plan: Self = serde_json::from_str(content).map_err(|e| ReconcileError::ParseJson {
            origin: origin.to_string(),
            source: e,
        })?;
        plan.validate()?;
        Ok(plan)
    }
}
