//! Configuration for the demo binary

use std::env;
use std::path::PathBuf;

/// Default log filter when neither `PAIRCHECK_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Plan file to run instead of the built-in plan
    pub plan_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl DemoConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let plan_path = lookup("PAIRCHECK_PLAN")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("PAIRCHECK_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            plan_path,
            log_filter,
        }
    }
}
