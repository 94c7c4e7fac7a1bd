//! Component scoring
//!
//! Each component maps one facet of the telemetry onto the unit interval.
//! Latency, throughput and reliability are step functions over fixed
//! threshold tables; quality is a clamped weighted blend.

use crate::error::{QScoreError, Result};
use crate::models::PerformanceMetrics;
use tracing::debug;

/// Boundary test for one row of a threshold table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// value < limit
    Below(f64),
    /// value <= limit
    AtMost(f64),
    /// value >= limit
    AtLeast(f64),
}

impl Boundary {
    fn contains(&self, value: f64) -> bool {
        match *self {
            Boundary::Below(limit) => value < limit,
            Boundary::AtMost(limit) => value <= limit,
            Boundary::AtLeast(limit) => value >= limit,
        }
    }
}

/// Latency in ms, lower is better. Strict upper bounds.
pub const LATENCY_THRESHOLDS: &[(Boundary, f64)] = &[
    (Boundary::Below(50.0), 1.0),
    (Boundary::Below(100.0), 0.8),
    (Boundary::Below(200.0), 0.6),
    (Boundary::Below(500.0), 0.4),
    (Boundary::Below(1000.0), 0.2),
];

/// Tokens per second, higher is better. Inclusive lower bounds.
pub const THROUGHPUT_THRESHOLDS: &[(Boundary, f64)] = &[
    (Boundary::AtLeast(1000.0), 1.0),
    (Boundary::AtLeast(500.0), 0.8),
    (Boundary::AtLeast(200.0), 0.6),
    (Boundary::AtLeast(100.0), 0.4),
    (Boundary::AtLeast(50.0), 0.2),
];

/// Uptime percentage, higher is better.
pub const UPTIME_THRESHOLDS: &[(Boundary, f64)] = &[
    (Boundary::AtLeast(99.9), 1.0),
    (Boundary::AtLeast(99.0), 0.9),
    (Boundary::AtLeast(95.0), 0.5),
    (Boundary::AtLeast(90.0), 0.2),
];

/// Error rate as a fraction, lower is better. The last row is strict.
pub const ERROR_RATE_THRESHOLDS: &[(Boundary, f64)] = &[
    (Boundary::AtMost(0.0), 1.0),
    (Boundary::AtMost(0.01), 0.9),
    (Boundary::AtMost(0.05), 0.5),
    (Boundary::Below(0.10), 0.2),
];

const ACCURACY_WEIGHT: f64 = 0.6;
const BENCHMARK_WEIGHT: f64 = 0.4;
const UPTIME_WEIGHT: f64 = 0.5;
const ERROR_RATE_WEIGHT: f64 = 0.5;

/// Score of the first row whose boundary contains `value`, or 0.0
pub fn step_score(table: &[(Boundary, f64)], value: f64) -> f64 {
    table
        .iter()
        .find(|(boundary, _)| boundary.contains(value))
        .map(|&(_, score)| score)
        .unwrap_or(0.0)
}

/// Latency component (0-1). A non-positive latency is a sentinel and scores 0.0.
pub fn latency_score(metrics: &PerformanceMetrics) -> f64 {
    let latency = metrics.avg_latency_ms;
    if latency <= 0.0 {
        return 0.0;
    }
    step_score(LATENCY_THRESHOLDS, latency)
}

/// Throughput component (0-1)
pub fn throughput_score(metrics: &PerformanceMetrics) -> f64 {
    step_score(THROUGHPUT_THRESHOLDS, metrics.tokens_per_second)
}

/// Quality component (0-1): 60% accuracy, 40% normalized benchmark
pub fn quality_score(metrics: &PerformanceMetrics) -> f64 {
    let accuracy = metrics.accuracy_score.clamp(0.0, 1.0);
    let benchmark = (metrics.benchmark_score / 100.0).clamp(0.0, 1.0);
    accuracy * ACCURACY_WEIGHT + benchmark * BENCHMARK_WEIGHT
}

/// Reliability component (0-1): equal blend of uptime and error rate steps
pub fn reliability_score(metrics: &PerformanceMetrics) -> f64 {
    let uptime = step_score(UPTIME_THRESHOLDS, metrics.uptime_percentage);
    let errors = step_score(ERROR_RATE_THRESHOLDS, metrics.error_rate);
    uptime * UPTIME_WEIGHT + errors * ERROR_RATE_WEIGHT
}

/// The four component scores on the unit scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub latency: f64,
    pub throughput: f64,
    pub quality: f64,
    pub reliability: f64,
}

impl ComponentScores {
    /// Validate the metrics and compute every component
    pub fn from_metrics(metrics: &PerformanceMetrics) -> Result<Self> {
        validate_metrics(metrics)?;

        let scores = Self {
            latency: latency_score(metrics),
            throughput: throughput_score(metrics),
            quality: quality_score(metrics),
            reliability: reliability_score(metrics),
        };
        debug!(
            latency = scores.latency,
            throughput = scores.throughput,
            quality = scores.quality,
            reliability = scores.reliability,
            "component scores"
        );
        Ok(scores)
    }

    pub fn sum(&self) -> f64 {
        self.latency + self.throughput + self.quality + self.reliability
    }
}

/// Reject inputs the step tables and clamps do not cover
pub fn validate_metrics(metrics: &PerformanceMetrics) -> Result<()> {
    let non_negative = [
        ("avg_latency_ms", metrics.avg_latency_ms),
        ("p95_latency_ms", metrics.p95_latency_ms),
        ("p99_latency_ms", metrics.p99_latency_ms),
        ("tokens_per_second", metrics.tokens_per_second),
        ("requests_per_minute", metrics.requests_per_minute),
        ("cost_per_1k_tokens", metrics.cost_per_1k_tokens),
    ];
    for (field, value) in non_negative {
        check_not_nan(field, value)?;
        if value < 0.0 {
            return Err(invalid(field, value, "must not be negative"));
        }
    }

    // Clamped when scored, so only NaN is fatal.
    check_not_nan("accuracy_score", metrics.accuracy_score)?;
    check_not_nan("benchmark_score", metrics.benchmark_score)?;

    check_range("uptime_percentage", metrics.uptime_percentage, 0.0, 100.0)?;
    check_range("error_rate", metrics.error_rate, 0.0, 1.0)?;

    Ok(())
}

fn check_not_nan(field: &'static str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(invalid(field, value, "must be a number"));
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    check_not_nan(field, value)?;
    if value < min || value > max {
        return Err(invalid(field, value, "out of range"));
    }
    Ok(())
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> QScoreError {
    QScoreError::InvalidMetric {
        field,
        value,
        reason,
    }
}
