use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MlpError>;

/// Every way configuring, loading or training a network can fail.
#[derive(Debug, Error)]
pub enum MlpError {
    /// A vector or matrix disagrees with the configured unit counts.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An activation, weight or error value became non-finite while training.
    /// `pattern` is the index (in load order) of the pattern being visited.
    #[error("numeric divergence at epoch {epoch}, pattern {pattern}")]
    NumericDivergence { epoch: usize, pattern: usize },

    /// Training was requested before any pattern was loaded.
    #[error("no training patterns loaded")]
    EmptyPatternSet,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MlpError {
    pub(crate) fn mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        MlpError::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }
}
