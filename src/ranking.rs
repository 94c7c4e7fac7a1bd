use crate::aggregate::EXCELLENT_THRESHOLD;
use crate::models::{MarketAnalysis, PriceTrend, QScoreResult};

/// Dead band around the baseline average before a trend is reported
const TREND_DEAD_BAND: f64 = 1.0;

/// Order results by descending Q-score. Equal scores keep their input order.
pub fn rank_results(mut results: Vec<QScoreResult>) -> Vec<QScoreResult> {
    results.sort_by(|a, b| b.q_score.total_cmp(&a.q_score));
    results
}

/// Summarize a set of results, expected in ranked order
pub fn market_analysis(ranked: &[QScoreResult], baseline_avg_q_score: Option<f64>) -> MarketAnalysis {
    if ranked.is_empty() {
        return MarketAnalysis::default();
    }

    let total_models = ranked.len();
    let avg_q_score = calculate_mean(ranked.iter().map(|r| r.q_score), total_models);
    let eligible = ranked.iter().filter(|r| r.mint_eligible).count();

    let top_performers = ranked
        .iter()
        .filter(|r| r.q_score >= EXCELLENT_THRESHOLD)
        .map(|r| r.model_id.clone())
        .collect();

    MarketAnalysis {
        total_models,
        avg_q_score,
        top_performers,
        market_liquidity: eligible as f64 / total_models as f64,
        price_trend: price_trend(avg_q_score, baseline_avg_q_score),
    }
}

fn calculate_mean(scores: impl Iterator<Item = f64>, count: usize) -> f64 {
    let sum: f64 = scores.sum();
    sum / count as f64
}

/// Trend of the current average against a previous one
pub fn price_trend(avg_q_score: f64, baseline: Option<f64>) -> PriceTrend {
    match baseline {
        Some(previous) if avg_q_score - previous > TREND_DEAD_BAND => PriceTrend::Up,
        Some(previous) if previous - avg_q_score > TREND_DEAD_BAND => PriceTrend::Down,
        _ => PriceTrend::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::is_mint_eligible;
    use crate::models::{ModelCategory, PerformanceMetrics};

    fn result(model_id: &str, q_score: f64) -> QScoreResult {
        QScoreResult {
            model_id: model_id.to_string(),
            q_score,
            category: ModelCategory::Llm,
            metrics: PerformanceMetrics::default(),
            latency_score: q_score / 4.0,
            throughput_score: q_score / 4.0,
            quality_score: q_score / 4.0,
            reliability_score: q_score / 4.0,
            recommendations: Vec::new(),
            mint_eligible: is_mint_eligible(q_score),
        }
    }

    fn ids(results: &[QScoreResult]) -> Vec<&str> {
        results.iter().map(|r| r.model_id.as_str()).collect()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank_results(vec![result("A", 80.0), result("B", 60.0), result("C", 90.0)]);
        assert_eq!(ids(&ranked), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let ranked = rank_results(vec![
            result("first", 70.0),
            result("top", 90.0),
            result("second", 70.0),
            result("third", 70.0),
        ]);
        assert_eq!(ids(&ranked), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_results(Vec::new()).is_empty());
    }

    #[test]
    fn test_market_analysis_empty() {
        let analysis = market_analysis(&[], Some(70.0));
        assert_eq!(analysis, MarketAnalysis::default());
    }

    #[test]
    fn test_market_analysis_summary() {
        let ranked = rank_results(vec![
            result("a", 90.0),
            result("b", 85.0),
            result("c", 55.0),
            result("d", 30.0),
        ]);
        let analysis = market_analysis(&ranked, None);

        assert_eq!(analysis.total_models, 4);
        assert!((analysis.avg_q_score - 65.0).abs() < 1e-9);
        assert_eq!(analysis.top_performers, vec!["a".to_string(), "b".to_string()]);
        assert!((analysis.market_liquidity - 0.75).abs() < 1e-9);
        assert_eq!(analysis.price_trend, PriceTrend::Stable);
    }

    #[test]
    fn test_price_trend() {
        assert_eq!(price_trend(70.0, None), PriceTrend::Stable);
        assert_eq!(price_trend(70.0, Some(65.0)), PriceTrend::Up);
        assert_eq!(price_trend(60.0, Some(65.0)), PriceTrend::Down);
        assert_eq!(price_trend(65.5, Some(65.0)), PriceTrend::Stable);
        assert_eq!(price_trend(64.0, Some(65.0)), PriceTrend::Stable);
    }
}
