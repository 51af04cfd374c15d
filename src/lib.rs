//! SPK TOPSIS - Decision support service for ranking alternatives
//!
//! This crate ranks alternatives against weighted benefit and cost criteria
//! using TOPSIS (Technique for Order of Preference by Similarity to Ideal
//! Solution) and exposes the full computation trace over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
