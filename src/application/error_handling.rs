// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides consistent error format for the UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found
    NotFound,

    /// Rejected user input
    Validation,

    /// Local storage failure
    Storage,

    /// Catalog unreachable or returned an error
    ExternalService,

    /// Other/unknown error
    Internal,
}

/// Result type returned by every command
pub type CommandResult<T> = Result<T, ErrorResponse>;

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Resource"),

            AppError::Domain(domain_error) => Self::from_domain_error(domain_error),

            AppError::Catalog(message) => {
                log::warn!("Catalog error: {}", message);
                Self::new(
                    ErrorType::ExternalService,
                    "Could not reach the anime catalog".to_string(),
                    Some(message),
                )
            }

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Storage,
                    "Storage operation failed".to_string(),
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Storage, "Storage is unavailable".to_string(), None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::Storage,
                    "File system operation failed".to_string(),
                    Some(io_error.to_string()),
                )
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed".to_string(), None)
            }

            AppError::Config(message) | AppError::Other(message) => {
                log::error!("Internal error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    fn from_domain_error(error: DomainError) -> Self {
        match error {
            DomainError::DuplicateName(_) => {
                Self::validation("Collection name must be unique".to_string())
            }
            DomainError::EmptySelection => {
                Self::validation("Select a collection or enter a new collection name".to_string())
            }
            DomainError::InvariantViolation(message) => Self::validation(message),
            DomainError::NotFound(resource) => Self::not_found(&resource),
        }
    }

    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        Self::from_domain_error(error)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} ({})", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
    }

    #[test]
    fn test_duplicate_name_message() {
        let error = ErrorResponse::from(DomainError::DuplicateName("Favorites".to_string()));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Collection name must be unique");
    }

    #[test]
    fn test_catalog_error_is_external() {
        let error = ErrorResponse::from(AppError::Catalog("timeout".to_string()));
        assert_eq!(error.error_type, ErrorType::ExternalService);
        assert_eq!(error.details.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Collection");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Collection not found"));
    }
}
