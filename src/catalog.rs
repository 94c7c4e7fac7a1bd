use crate::error::{QScoreError, Result};
use crate::models::{CatalogEntry, PerformanceMetrics};
use std::collections::HashMap;

/// Supplies the current metrics window for a model
pub trait MetricsSource: Send + Sync {
    /// Metrics for `model_id`, or `None` if nothing was measured
    fn metrics_for(&self, model_id: &str) -> Option<PerformanceMetrics>;
}

/// Metrics held in memory, keyed by model id
#[derive(Debug, Clone, Default)]
pub struct MetricsStore {
    metrics: HashMap<String, PerformanceMetrics>,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, model_id: impl Into<String>, metrics: PerformanceMetrics) {
        self.metrics.insert(model_id.into(), metrics);
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl MetricsSource for MetricsStore {
    fn metrics_for(&self, model_id: &str) -> Option<PerformanceMetrics> {
        self.metrics.get(model_id).cloned()
    }
}

/// Known models in registration order
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl ModelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model. Ids must be unique.
    pub fn register(&mut self, entry: CatalogEntry) -> Result<()> {
        if self.index.contains_key(&entry.id) {
            return Err(QScoreError::DuplicateModel(entry.id));
        }
        self.index.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, model_id: &str) -> Option<&CatalogEntry> {
        self.index.get(model_id).map(|&i| &self.entries[i])
    }

    /// Look up a model, failing for identifiers not in the catalog
    pub fn require(&self, model_id: &str) -> Result<&CatalogEntry> {
        self.get(model_id)
            .ok_or_else(|| QScoreError::UnknownModel(model_id.to_string()))
    }

    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
