//! Analysis configuration

use serde::Deserialize;

use crate::domain::topsis::UniformCriteriaPolicy;

/// Settings for how ranking requests are analyzed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    /// What to do when a criterion has the same value for every alternative
    #[serde(default)]
    pub uniform_criteria_policy: UniformCriteriaPolicy,
}
