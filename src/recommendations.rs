use crate::aggregate::{EXCELLENT_THRESHOLD, MIN_SCORE_FOR_MINT};
use crate::scoring::ComponentScores;

/// Component scores below this suggest an improvement
const WEAK_COMPONENT: f64 = 0.5;

pub const LATENCY_ADVICE: &str = "Consider optimizing inference latency";
pub const THROUGHPUT_ADVICE: &str = "Throughput could be improved with batching";
pub const QUALITY_ADVICE: &str = "Model accuracy needs improvement";
pub const RELIABILITY_ADVICE: &str = "Improve uptime and reduce error rates";

pub const PREMIUM_MESSAGE: &str = "Excellent performance - eligible for premium rates";
pub const STANDARD_MESSAGE: &str = "Good performance - eligible for token minting";
pub const BELOW_THRESHOLD_MESSAGE: &str = "Below threshold - improvements needed before minting";

/// Build advisory messages for a scored model.
///
/// Component advice comes first in fixed order, followed by exactly one
/// closing message for the composite tier.
pub fn generate_recommendations(q_score: f64, scores: &ComponentScores) -> Vec<String> {
    let rules = [
        (scores.latency, LATENCY_ADVICE),
        (scores.throughput, THROUGHPUT_ADVICE),
        (scores.quality, QUALITY_ADVICE),
        (scores.reliability, RELIABILITY_ADVICE),
    ];

    let mut recommendations: Vec<String> = rules
        .iter()
        .filter(|(score, _)| *score < WEAK_COMPONENT)
        .map(|(_, advice)| advice.to_string())
        .collect();

    recommendations.push(closing_message(q_score).to_string());
    recommendations
}

fn closing_message(q_score: f64) -> &'static str {
    if q_score >= EXCELLENT_THRESHOLD {
        PREMIUM_MESSAGE
    } else if q_score >= MIN_SCORE_FOR_MINT {
        STANDARD_MESSAGE
    } else {
        BELOW_THRESHOLD_MESSAGE
    }
}
