//! TOPSIS command and query handlers.

mod compute_ranking;
mod normalize_weights;

pub use compute_ranking::{
    ComputeRankingCommand, ComputeRankingError, ComputeRankingHandler, RankingOutcome,
};
pub use normalize_weights::{NormalizeWeightsHandler, NormalizeWeightsQuery, WeightPreview};
