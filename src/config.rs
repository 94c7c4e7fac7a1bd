use crate::catalog::{MetricsStore, ModelCatalog};
use crate::models::{CatalogEntry, ModelCategory, PerformanceMetrics};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A model listed in the run file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Unique model identifier
    pub id: String,
    /// Human-readable name, defaults to the id
    #[serde(default)]
    pub display_name: Option<String>,
    /// Organisation serving the model
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub category: ModelCategory,
    /// Latest metrics window, if one was measured
    #[serde(default)]
    pub metrics: Option<PerformanceMetrics>,
}

fn default_provider() -> String {
    "unknown".to_string()
}

impl ModelConfig {
    fn catalog_entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: self.id.clone(),
            display_name: self.display_name.clone().unwrap_or_else(|| self.id.clone()),
            provider: self.provider.clone(),
            category: self.category,
        }
    }
}

/// Root configuration of a scoring run
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Optional local path to store the report as JSON
    #[serde(default)]
    pub storage_path: Option<String>,
    /// Previous market average, used to report the trend
    #[serde(default)]
    pub baseline_avg_q_score: Option<f64>,
    /// Model catalog with metrics
    #[serde(default)]
    pub models: Vec<ModelConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        // Build once to surface duplicate ids at load time.
        config.build_catalog()?;
        Ok(config)
    }

    /// Split the model list into a catalog and a metrics supplier
    pub fn build_catalog(&self) -> Result<(ModelCatalog, MetricsStore)> {
        let mut catalog = ModelCatalog::new();
        let mut store = MetricsStore::new();

        for model in &self.models {
            catalog.register(model.catalog_entry())?;
            if let Some(metrics) = &model.metrics {
                store.insert(model.id.clone(), metrics.clone());
            }
        }

        Ok((catalog, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MetricsSource;
    use crate::error::QScoreError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_parsing() {
        let toml_content = r#"
storage_path = "/tmp/qscores.json"
baseline_avg_q_score = 62.5

[[models]]
id = "neo-llm-7b"
display_name = "Neo LLM 7B"
provider = "neo-labs"
category = "llm"

[models.metrics]
avg_latency_ms = 45.0
p95_latency_ms = 90.0
p99_latency_ms = 140.0
tokens_per_second = 1200.0
requests_per_minute = 600.0
accuracy_score = 0.93
benchmark_score = 81.0
uptime_percentage = 99.95
error_rate = 0.002
cost_per_1k_tokens = 0.002
measurement_timestamp = "2026-10-01T12:00:00Z"
sample_size = 5000

[[models]]
id = "pixel-diffusion"
category = "image_generation"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storage_path.as_deref(), Some("/tmp/qscores.json"));
        assert_eq!(config.baseline_avg_q_score, Some(62.5));
        assert_eq!(config.models.len(), 2);

        let first = &config.models[0];
        assert_eq!(first.provider, "neo-labs");
        let metrics = first.metrics.as_ref().unwrap();
        assert_eq!(metrics.tokens_per_second, 1200.0);
        assert_eq!(metrics.sample_size, 5000);
        assert!(metrics.measurement_timestamp.is_some());

        assert_eq!(config.models[1].category, ModelCategory::ImageGeneration);
    }

    #[test]
    fn test_config_defaults() {
        let toml_content = r#"
[[models]]
id = "bare"

[models.metrics]
avg_latency_ms = 120.0
"#;

        let config = Config::from_toml(toml_content).unwrap();
        assert!(config.storage_path.is_none());
        assert!(config.baseline_avg_q_score.is_none());

        let model = &config.models[0];
        assert_eq!(model.provider, "unknown");
        assert_eq!(model.category, ModelCategory::Llm);
        assert!(model.display_name.is_none());
        let metrics = model.metrics.as_ref().unwrap();
        assert_eq!(metrics.avg_latency_ms, 120.0);
        assert_eq!(metrics.uptime_percentage, 0.0);
    }

    #[test]
    fn test_build_catalog() {
        let toml_content = r#"
[[models]]
id = "a"
display_name = "Model A"

[models.metrics]
avg_latency_ms = 30.0

[[models]]
id = "b"
category = "audio"
"#;

        let config = Config::from_toml(toml_content).unwrap();
        let (catalog, store) = config.build_catalog().unwrap();

        assert_eq!(catalog.ids(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(catalog.get("a").unwrap().display_name, "Model A");
        assert_eq!(catalog.get("b").unwrap().display_name, "b");
        assert_eq!(catalog.get("b").unwrap().category, ModelCategory::Audio);
        assert_eq!(store.len(), 1);
        assert!(store.metrics_for("b").is_none());
    }

    #[test]
    fn test_duplicate_model_ids_rejected() {
        let toml_content = r#"
[[models]]
id = "twin"

[[models]]
id = "twin"
"#;

        let err = Config::from_toml(toml_content).unwrap_err();
        assert_eq!(
            err.downcast_ref::<QScoreError>(),
            Some(&QScoreError::DuplicateModel("twin".to_string()))
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        let toml_content = r#"
[[models]]
id = "x"
category = "robotics"
"#;

        assert!(Config::from_toml(toml_content).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/run.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
