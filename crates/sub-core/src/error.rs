//! Core error types for Submit RS

use thiserror::Error;

/// Core error type for all Submit RS operations
#[derive(Error, Debug)]
pub enum SubError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SubError {
    /// HTTP status code the surrounding request layer should map this error to
    pub fn status_code(&self) -> u16 {
        match self {
            SubError::NotFound { .. } => 404,
            SubError::Config(_) | SubError::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SubError::NotFound { .. } => "not_found",
            SubError::Config(_) => "configuration_error",
            SubError::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = SubError::NotFound {
            entity: "User",
            field: "id",
            value: "ghost".to_string(),
        };
        assert_eq!(err.to_string(), "Not found: User with id=ghost");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "not_found");
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let err = SubError::Config("missing vcs_url".to_string());
        assert_eq!(err.status_code(), 500);
    }
}
