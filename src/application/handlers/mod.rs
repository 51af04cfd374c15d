//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod topsis;

pub use topsis::{
    ComputeRankingCommand, ComputeRankingError, ComputeRankingHandler, NormalizeWeightsHandler,
    NormalizeWeightsQuery, RankingOutcome, WeightPreview,
};
