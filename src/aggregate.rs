//! Composite Q-score and eligibility
//!
//! The four components carry equal weight. The thresholds below are shared
//! with the recommendation rules and the output layer so every tier label
//! agrees with the eligibility verdict.

use crate::scoring::ComponentScores;
use std::fmt;

/// Minimum composite score for token minting (inclusive)
pub const MIN_SCORE_FOR_MINT: f64 = 50.0;
/// Presentation threshold for "good" models
pub const GOOD_THRESHOLD: f64 = 60.0;
/// Presentation threshold for "excellent" models, also the premium tier
pub const EXCELLENT_THRESHOLD: f64 = 80.0;

/// Weight of each component in the composite
pub const COMPONENT_WEIGHT: f64 = 0.25;
/// Points a single component contributes at full marks
pub const COMPONENT_MAX_POINTS: f64 = 25.0;

/// Composite score on the 0-100 scale
pub fn composite_score(scores: &ComponentScores) -> f64 {
    scores.sum() * COMPONENT_WEIGHT * 100.0
}

/// Scale a unit component score to its 0-25 points
pub fn component_points(unit_score: f64) -> f64 {
    unit_score * COMPONENT_MAX_POINTS
}

pub fn is_mint_eligible(q_score: f64) -> bool {
    q_score >= MIN_SCORE_FOR_MINT
}

/// Presentation tier of a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    Excellent,
    Good,
    Eligible,
    BelowThreshold,
}

impl QualityTier {
    pub fn from_score(q_score: f64) -> Self {
        if q_score >= EXCELLENT_THRESHOLD {
            QualityTier::Excellent
        } else if q_score >= GOOD_THRESHOLD {
            QualityTier::Good
        } else if is_mint_eligible(q_score) {
            QualityTier::Eligible
        } else {
            QualityTier::BelowThreshold
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityTier::Excellent => "excellent",
            QualityTier::Good => "good",
            QualityTier::Eligible => "eligible",
            QualityTier::BelowThreshold => "below threshold",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(latency: f64, throughput: f64, quality: f64, reliability: f64) -> ComponentScores {
        ComponentScores {
            latency,
            throughput,
            quality,
            reliability,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert_eq!(COMPONENT_WEIGHT * 4.0, 1.0);
        assert_eq!(COMPONENT_MAX_POINTS * 4.0, 100.0);
    }

    #[test]
    fn test_composite_extremes() {
        assert_eq!(composite_score(&scores(1.0, 1.0, 1.0, 1.0)), 100.0);
        assert_eq!(composite_score(&scores(0.0, 0.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_composite_equals_sum_of_points() {
        let s = scores(0.8, 0.6, 0.91, 0.95);
        let points = component_points(s.latency)
            + component_points(s.throughput)
            + component_points(s.quality)
            + component_points(s.reliability);
        assert!((composite_score(&s) - points).abs() < 1e-9);
    }

    #[test]
    fn test_mint_threshold_inclusive() {
        assert!(is_mint_eligible(50.0));
        assert!(is_mint_eligible(50.000001));
        assert!(!is_mint_eligible(49.999999));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(QualityTier::from_score(100.0), QualityTier::Excellent);
        assert_eq!(QualityTier::from_score(80.0), QualityTier::Excellent);
        assert_eq!(QualityTier::from_score(79.9), QualityTier::Good);
        assert_eq!(QualityTier::from_score(60.0), QualityTier::Good);
        assert_eq!(QualityTier::from_score(59.9), QualityTier::Eligible);
        assert_eq!(QualityTier::from_score(50.0), QualityTier::Eligible);
        assert_eq!(QualityTier::from_score(49.9), QualityTier::BelowThreshold);
    }

    #[test]
    fn test_thresholds_ordered() {
        assert!(MIN_SCORE_FOR_MINT < GOOD_THRESHOLD);
        assert!(GOOD_THRESHOLD < EXCELLENT_THRESHOLD);
    }
}
