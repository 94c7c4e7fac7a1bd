use thiserror::Error;

/// Errors raised by the scoring engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QScoreError {
    /// A metric is NaN, negative, or outside its domain
    #[error("invalid metric {field} = {value}: {reason}")]
    InvalidMetric {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Identifier not present in the model catalog
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Identifier registered twice in the model catalog
    #[error("duplicate model id: {0}")]
    DuplicateModel(String),
}

pub type Result<T> = std::result::Result<T, QScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_metric_message() {
        let err = QScoreError::InvalidMetric {
            field: "avg_latency_ms",
            value: -1.0,
            reason: "must not be negative",
        };
        assert_eq!(
            err.to_string(),
            "invalid metric avg_latency_ms = -1: must not be negative"
        );
    }

    #[test]
    fn test_unknown_model_message() {
        let err = QScoreError::UnknownModel("ghost".to_string());
        assert_eq!(err.to_string(), "unknown model: ghost");
    }

    #[test]
    fn test_duplicate_model_message() {
        let err = QScoreError::DuplicateModel("twin".to_string());
        assert_eq!(err.to_string(), "duplicate model id: twin");
    }
}
