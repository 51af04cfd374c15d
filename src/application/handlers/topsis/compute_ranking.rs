//! ComputeRankingHandler - Command handler for ranking alternatives with TOPSIS.
//!
//! Owns every check the engine expects its caller to make: input shape,
//! code uniqueness, weight sign, and uniform-criterion detection.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::foundation::ValidationError;
use crate::domain::topsis::{
    find_uniform_criteria, Alternative, Criterion, DecisionMatrix, TopsisEngine, TopsisResult,
    UniformCriteriaPolicy, UniformCriterion,
};

/// Command to rank a set of alternatives.
#[derive(Debug, Clone)]
pub struct ComputeRankingCommand {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

/// Result of a successful ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingOutcome {
    pub result: TopsisResult,
    /// Criteria that did not discriminate between alternatives.
    pub uniform_criteria: Vec<UniformCriterion>,
}

/// Errors returned before the engine is invoked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeRankingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Criteria have the same value for every alternative: {}", .0.join(", "))]
    UniformCriteria(Vec<String>),
}

/// Handler for TOPSIS ranking requests.
#[derive(Debug, Clone, Default)]
pub struct ComputeRankingHandler {
    policy: UniformCriteriaPolicy,
}

impl ComputeRankingHandler {
    pub fn new(policy: UniformCriteriaPolicy) -> Self {
        Self { policy }
    }

    pub fn handle(&self, cmd: ComputeRankingCommand) -> Result<RankingOutcome, ComputeRankingError> {
        // 1. Validate shape before touching the engine
        let matrix = DecisionMatrix::new(cmd.criteria, cmd.alternatives)?;

        // 2. Detect criteria with no discriminating signal
        let uniform_criteria = find_uniform_criteria(matrix.criteria(), matrix.alternatives());
        if !uniform_criteria.is_empty() {
            let codes: Vec<String> = uniform_criteria
                .iter()
                .map(|u| u.criterion_code.clone())
                .collect();

            warn!(
                criteria = %codes.join(","),
                policy = ?self.policy,
                "Uniform criteria detected"
            );

            if self.policy == UniformCriteriaPolicy::Reject {
                return Err(ComputeRankingError::UniformCriteria(codes));
            }
        }

        // 3. Rank
        let result = TopsisEngine::compute(matrix.criteria(), matrix.alternatives());

        debug!(
            criteria = matrix.criterion_count(),
            alternatives = matrix.alternative_count(),
            best = result.best().map(|s| s.code.as_str()).unwrap_or_default(),
            "Computed TOPSIS ranking"
        );

        Ok(RankingOutcome {
            result,
            uniform_criteria,
        })
    }
}
