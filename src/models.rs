use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an AI model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelCategory {
    /// Large language models
    #[default]
    Llm,
    ImageGeneration,
    Embedding,
    Audio,
    Multimodal,
}

impl ModelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::Llm => "llm",
            ModelCategory::ImageGeneration => "image_generation",
            ModelCategory::Embedding => "embedding",
            ModelCategory::Audio => "audio",
            ModelCategory::Multimodal => "multimodal",
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performance telemetry for one measurement window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceMetrics {
    /// Mean response latency in milliseconds
    pub avg_latency_ms: f64,
    pub p95_latency_ms: f64,
    pub p99_latency_ms: f64,
    /// Generation throughput
    pub tokens_per_second: f64,
    pub requests_per_minute: f64,
    /// Accuracy on a 0-1 scale (clamped when scored)
    pub accuracy_score: f64,
    /// Benchmark result on a 0-100 scale (clamped when scored)
    pub benchmark_score: f64,
    /// Availability, 0-100
    pub uptime_percentage: f64,
    /// Fraction of failed requests, 0-1
    pub error_rate: f64,
    /// Informational only, never scored
    pub cost_per_1k_tokens: f64,
    pub measurement_timestamp: Option<DateTime<Utc>>,
    /// Number of observations in the window
    pub sample_size: u64,
}

/// Result of a single Q-score calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QScoreResult {
    pub model_id: String,
    /// Composite score, 0-100
    pub q_score: f64,
    pub category: ModelCategory,
    /// Input metrics echoed back
    pub metrics: PerformanceMetrics,
    /// Component scores, 0-25 each
    pub latency_score: f64,
    pub throughput_score: f64,
    pub quality_score: f64,
    pub reliability_score: f64,
    /// Advisory messages in display order
    pub recommendations: Vec<String>,
    pub mint_eligible: bool,
}

impl QScoreResult {
    /// Sum of the four component scores
    pub fn component_total(&self) -> f64 {
        self.latency_score + self.throughput_score + self.quality_score + self.reliability_score
    }
}

/// Catalog metadata for a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub display_name: String,
    pub provider: String,
    pub category: ModelCategory,
}

/// Direction of the market average against its baseline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    #[default]
    Stable,
}

impl fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceTrend::Up => f.write_str("up"),
            PriceTrend::Down => f.write_str("down"),
            PriceTrend::Stable => f.write_str("stable"),
        }
    }
}

/// Market-wide summary over a set of scored models
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub total_models: usize,
    pub avg_q_score: f64,
    /// Models at or above the excellent threshold, best first
    pub top_performers: Vec<String>,
    /// Fraction of models eligible for minting, 0-1
    pub market_liquidity: f64,
    pub price_trend: PriceTrend,
}
