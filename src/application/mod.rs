//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations. Following CQRS, it separates
//! command handlers (ranking) from query handlers (weight preview).

pub mod handlers;

pub use handlers::{
    ComputeRankingCommand, ComputeRankingError, ComputeRankingHandler, NormalizeWeightsHandler,
    NormalizeWeightsQuery, RankingOutcome, WeightPreview,
};
