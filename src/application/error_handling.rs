// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → view-friendly responses
// - Provides consistent error format for the view layer
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for the view layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for the view layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Database/persistence error (500)
    Database,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Movie"),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Database operation failed".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Database connection failed".to_string(),
                    details: None,
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Config(message) | AppError::Other(message) => {
                log::error!("Internal error: {}", message);
                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    /// JSON form handed to the view
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}
