use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed metric name {name:?}: {reason}")]
    MalformedName { name: String, reason: String },

    #[error("Duplicate metric name: {0}")]
    DuplicateName(String),

    #[error("Empty description for metric: {0}")]
    EmptyDescription(String),

    #[error("Invalid value kind for metric: {0}")]
    InvalidKind(String),

    #[error("Convention violation in {name:?}: {reason}")]
    ConventionViolation { name: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn malformed(name: &str, reason: impl Into<String>) -> Self {
        CatalogError::MalformedName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
