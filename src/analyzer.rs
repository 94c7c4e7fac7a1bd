//! Q-score calculation and model comparison
//!
//! [`calculate_q_score`] is a pure function of its inputs. [`QScoreAnalyzer`]
//! binds it to a model catalog and a metrics supplier so models can be
//! scored and ranked by identifier.

use crate::aggregate::{component_points, composite_score, is_mint_eligible};
use crate::catalog::{MetricsSource, ModelCatalog};
use crate::error::Result;
use crate::models::{MarketAnalysis, ModelCategory, PerformanceMetrics, QScoreResult};
use crate::ranking::{market_analysis, rank_results};
use crate::recommendations::generate_recommendations;
use crate::scoring::ComponentScores;
use tracing::{debug, warn};

/// Score a model in the default category. Any identifier is accepted.
pub fn calculate_q_score(model_id: &str, metrics: &PerformanceMetrics) -> Result<QScoreResult> {
    calculate_q_score_with_category(model_id, ModelCategory::default(), metrics)
}

/// Score a model, tagging the result with `category`
pub fn calculate_q_score_with_category(
    model_id: &str,
    category: ModelCategory,
    metrics: &PerformanceMetrics,
) -> Result<QScoreResult> {
    let scores = ComponentScores::from_metrics(metrics)?;
    let q_score = composite_score(&scores);
    let recommendations = generate_recommendations(q_score, &scores);

    debug!(model_id, q_score, "calculated q-score");

    Ok(QScoreResult {
        model_id: model_id.to_string(),
        q_score,
        category,
        metrics: metrics.clone(),
        latency_score: component_points(scores.latency),
        throughput_score: component_points(scores.throughput),
        quality_score: component_points(scores.quality),
        reliability_score: component_points(scores.reliability),
        recommendations,
        mint_eligible: is_mint_eligible(q_score),
    })
}

/// Scores catalog models using metrics from a supplier
pub struct QScoreAnalyzer {
    catalog: ModelCatalog,
    metrics: Box<dyn MetricsSource>,
}

impl QScoreAnalyzer {
    pub fn new(catalog: ModelCatalog, metrics: impl MetricsSource + 'static) -> Self {
        Self {
            catalog,
            metrics: Box::new(metrics),
        }
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Score a single catalog model
    pub fn score_model(&self, model_id: &str) -> Result<QScoreResult> {
        let entry = self.catalog.require(model_id)?;
        calculate_q_score_with_category(model_id, entry.category, &self.metrics_window(model_id))
    }

    /// Score any identifier. Models outside the catalog get the default category.
    pub fn calculate_model(&self, model_id: &str) -> Result<QScoreResult> {
        let category = match self.catalog.get(model_id) {
            Some(entry) => entry.category,
            None => {
                warn!(model_id, "model not in catalog, scoring with default category");
                ModelCategory::default()
            }
        };
        calculate_q_score_with_category(model_id, category, &self.metrics_window(model_id))
    }

    fn metrics_window(&self, model_id: &str) -> PerformanceMetrics {
        match self.metrics.metrics_for(model_id) {
            Some(metrics) => metrics,
            None => {
                warn!(model_id, "no metrics available, scoring default window");
                PerformanceMetrics::default()
            }
        }
    }

    /// Score each model and rank by descending Q-score
    pub fn compare_models<S: AsRef<str>>(&self, model_ids: &[S]) -> Result<Vec<QScoreResult>> {
        let results = model_ids
            .iter()
            .map(|id| self.score_model(id.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(rank_results(results))
    }

    /// Rank every model in the catalog
    pub fn get_all_q_scores(&self) -> Result<Vec<QScoreResult>> {
        self.compare_models(&self.catalog.ids())
    }

    /// Market summary over the whole catalog
    pub fn get_market_analysis(&self, baseline_avg_q_score: Option<f64>) -> Result<MarketAnalysis> {
        let ranked = self.get_all_q_scores()?;
        Ok(market_analysis(&ranked, baseline_avg_q_score))
    }
}
