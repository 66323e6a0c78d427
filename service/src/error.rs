//! Error handling for the poultry weighing service
//!
//! Provides consistent error details in Spanish and English

use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_es: String,
    },

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    // Storage errors
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error detail handed to presentation code
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_es: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// Shorthand for a validation failure reported by the shared validators
    pub fn invalid(field: &str, message: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
            message_es: format!("Dato inválido en {}: {}", field, message),
        }
    }

    pub fn detail(&self) -> ErrorDetail {
        match self {
            AppError::Validation {
                field,
                message,
                message_es,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_es: message_es.clone(),
                field: Some(field.clone()),
            },
            AppError::DuplicateEntry(resource) => ErrorDetail {
                code: "DUPLICATE_ENTRY".to_string(),
                message_en: format!("{} already exists", resource),
                message_es: format!("{} ya existe", resource),
                field: None,
            },
            AppError::NotFound(resource) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message_en: format!("{} not found", resource),
                message_es: format!("No se encontró {}", resource),
                field: None,
            },
            AppError::InvalidStateTransition(msg) => ErrorDetail {
                code: "INVALID_STATE_TRANSITION".to_string(),
                message_en: msg.clone(),
                message_es: format!("No se puede cambiar el estado: {}", msg),
                field: None,
            },
            AppError::StorageError(msg) => ErrorDetail {
                code: "STORAGE_ERROR".to_string(),
                message_en: format!("Storage error: {}", msg),
                message_es: format!("Error de almacenamiento: {}", msg),
                field: None,
            },
            AppError::Serialization(_) => ErrorDetail {
                code: "SERIALIZATION_ERROR".to_string(),
                message_en: "Stored data could not be read".to_string(),
                message_es: "No se pudieron leer los datos guardados".to_string(),
                field: None,
            },
            AppError::Configuration(e) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message_en: format!("Configuration error: {}", e),
                message_es: format!("Error de configuración: {}", e),
                field: None,
            },
            AppError::Internal(msg) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message_en: msg.clone(),
                message_es: "Error interno".to_string(),
                field: None,
            },
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        let field = fields.first().copied().unwrap_or("input").to_string();

        AppError::Validation {
            message_es: format!("Datos inválidos: {}", errors),
            message: errors.to_string(),
            field,
        }
    }
}

/// Result type alias for services
pub type AppResult<T> = Result<T, AppError>;
