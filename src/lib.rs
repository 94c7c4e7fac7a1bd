//! Q-score engine
//!
//! Turns raw model performance telemetry into a 0-100 composite quality
//! score, a token minting verdict and improvement recommendations, and
//! ranks models for comparison.

pub mod aggregate;
pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod ranking;
pub mod recommendations;
pub mod runner;
pub mod scoring;

pub use aggregate::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD, MIN_SCORE_FOR_MINT, QualityTier};
pub use analyzer::{QScoreAnalyzer, calculate_q_score, calculate_q_score_with_category};
pub use catalog::{MetricsSource, MetricsStore, ModelCatalog};
pub use error::{QScoreError, Result};
pub use models::{
    CatalogEntry, MarketAnalysis, ModelCategory, PerformanceMetrics, PriceTrend, QScoreResult,
};
