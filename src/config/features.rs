//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Enable request tracing
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_tracing: default_enable_tracing(),
            json_logs: false,
        }
    }
}

fn default_enable_tracing() -> bool {
    true
}
