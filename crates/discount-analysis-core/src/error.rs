use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscountError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("External data unavailable: {0}")]
    ExternalData(String),

    #[error("Report generation failed: {0}")]
    Report(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DiscountError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DiscountError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DiscountError {
    fn from(e: serde_json::Error) -> Self {
        DiscountError::SerializationError(e.to_string())
    }
}
