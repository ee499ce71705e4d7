use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced by the write path of the engine.
///
/// The read path (balance computation, settlement planning) never returns
/// errors for data-shape issues; it degrades to empty or partial results.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = AppError::validation("total amount must be greater than 0");
        assert_eq!(
            err.to_string(),
            "validation failed: total amount must be greater than 0"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = AppError::not_found("group", "42");
        assert_eq!(err.to_string(), "group not found: 42");
    }
}
