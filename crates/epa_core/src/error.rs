use thiserror::Error;

/// Errors raised at the edges of the analytics core.
///
/// The computations themselves never fail on missing or zero data; these
/// variants cover record lookups, dataset validation, configuration and
/// localization loading.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Localization error: {0}")]
    Localization(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyticsError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AnalyticsError::NotFound { entity, id: id.to_string() }
    }

    /// Failures of the request or its environment (unknown ids, missing
    /// files) that a retry with other arguments may clear. Invalid data and
    /// configuration are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AnalyticsError::NotFound { .. } => true,
            AnalyticsError::Localization(_) => true,
            AnalyticsError::InvalidInput(_) => false,
            AnalyticsError::Config(_) | AnalyticsError::Yaml(_) => false,
            AnalyticsError::Serialization(_) => false,
            AnalyticsError::Io(_) => true,
        }
    }
}

impl From<validator::ValidationErrors> for AnalyticsError {
    fn from(err: validator::ValidationErrors) -> Self {
        AnalyticsError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
