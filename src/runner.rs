use crate::analyzer::QScoreAnalyzer;
use crate::catalog::ModelCatalog;
use crate::config::Config;
use crate::models::{MarketAnalysis, QScoreResult};
use crate::ranking::{market_analysis, rank_results};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// What a run should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Score the requested models in the order given, or the whole catalog in catalog order
    Calculate,
    /// Score models and rank them by Q-score
    Compare,
    /// Market-wide summary of the whole catalog
    Market,
}

/// Output of a single run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub action: Action,
    pub results: Vec<QScoreResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketAnalysis>,
}

/// Orchestrates a scoring run over the configured catalog
pub struct Runner {
    analyzer: Arc<QScoreAnalyzer>,
    storage_path: Option<String>,
    baseline_avg_q_score: Option<f64>,
}

impl Runner {
    /// Create a new runner with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let (catalog, store) = config.build_catalog()?;
        info!(models = catalog.len(), measured = store.len(), "loaded model catalog");

        Ok(Self {
            analyzer: Arc::new(QScoreAnalyzer::new(catalog, store)),
            storage_path: config.storage_path,
            baseline_avg_q_score: config.baseline_avg_q_score,
        })
    }

    /// Run `action` over `model_ids`, or over the whole catalog when empty
    pub async fn run(&self, action: Action, model_ids: &[String]) -> Result<RunReport> {
        let ids = match action {
            Action::Market => self.analyzer.catalog().ids(),
            _ if model_ids.is_empty() => self.analyzer.catalog().ids(),
            _ => model_ids.to_vec(),
        };
        info!(?action, models = ids.len(), "starting run");

        let scored = self.score_concurrently(action, &ids).await?;
        let report = match action {
            Action::Calculate => RunReport {
                action,
                results: scored,
                market: None,
            },
            Action::Compare => RunReport {
                action,
                results: rank_results(scored),
                market: None,
            },
            Action::Market => {
                let ranked = rank_results(scored);
                let market = market_analysis(&ranked, self.baseline_avg_q_score);
                RunReport {
                    action,
                    results: ranked,
                    market: Some(market),
                }
            }
        };

        self.store_results_if_configured(&report)?;
        Ok(report)
    }

    /// Model catalog the runner scores against
    pub fn catalog(&self) -> &ModelCatalog {
        self.analyzer.catalog()
    }

    /// Score every model on its own task, returning results in input order.
    /// Only `Calculate` accepts identifiers outside the catalog.
    async fn score_concurrently(&self, action: Action, ids: &[String]) -> Result<Vec<QScoreResult>> {
        let mut tasks = JoinSet::new();
        for (index, id) in ids.iter().enumerate() {
            let analyzer = Arc::clone(&self.analyzer);
            let id = id.clone();
            tasks.spawn(async move {
                let result = match action {
                    Action::Calculate => analyzer.calculate_model(&id),
                    Action::Compare | Action::Market => analyzer.score_model(&id),
                };
                (index, id, result)
            });
        }

        let mut slots: Vec<Option<QScoreResult>> = vec![None; ids.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, id, result) = joined.context("Scoring task failed")?;
            let result = result.with_context(|| format!("Failed to score model: {}", id))?;
            debug!(model_id = %id, q_score = result.q_score, "scored model");
            slots[index] = Some(result);
        }

        Ok(slots.into_iter().flatten().collect())
    }

    /// Store the report if a storage path is configured
    fn store_results_if_configured(&self, report: &RunReport) -> Result<()> {
        if let Some(storage_path) = &self.storage_path {
            self.store_results(report, storage_path)?;
        }
        Ok(())
    }

    /// Store the report to a JSON file
    fn store_results(&self, report: &RunReport, path: &str) -> Result<()> {
        let json_content =
            serde_json::to_string_pretty(report).context("Failed to serialize results to JSON")?;
        self.ensure_directory_exists(path)?;
        std::fs::write(path, json_content)
            .with_context(|| format!("Failed to write results to: {}", path))?;
        info!(path, "results stored");

        Ok(())
    }

    /// Ensure the directory for the results file exists
    fn ensure_directory_exists(&self, path: &str) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }
}
