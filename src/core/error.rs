//! Typed error handling for the pharmacy service
//!
//! Every store operation returns a [`PharmacyResult`], so callers can match on
//! the failure category instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`EntityError`]: the addressed record does not exist, or would collide
//! - [`ValidationError`]: a payload field is missing, malformed or unresolvable
//! - [`RequestError`]: the request itself is malformed (bad path id)
//! - [`StorageError`]: the backing store failed (opaque to clients)
//!
//! [`ConfigError`] is kept apart: configuration is loaded before any request
//! is served, so it never becomes an HTTP response.
//!
//! # Example
//!
//! ```rust,ignore
//! match medicines.delete(id).await {
//!     Ok(()) => println!("deleted"),
//!     Err(PharmacyError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("medicine {} does not exist", id);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type of the service
#[derive(Debug)]
pub enum PharmacyError {
    /// Record lookup errors
    Entity(EntityError),

    /// Payload validation errors
    Validation(ValidationError),

    /// Malformed request errors
    Request(RequestError),

    /// Storage backend errors
    Storage(StorageError),
}

impl fmt::Display for PharmacyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PharmacyError::Entity(e) => write!(f, "{}", e),
            PharmacyError::Validation(e) => write!(f, "{}", e),
            PharmacyError::Request(e) => write!(f, "{}", e),
            PharmacyError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PharmacyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PharmacyError::Entity(e) => Some(e),
            PharmacyError::Validation(e) => Some(e),
            PharmacyError::Request(e) => Some(e),
            PharmacyError::Storage(e) => Some(e),
        }
    }
}

/// Error body returned to HTTP clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PharmacyError {
    /// Shorthand for a record that does not exist
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        PharmacyError::Entity(EntityError::NotFound { resource, id })
    }

    /// Shorthand for a unique key clash
    pub fn already_exists(
        resource: &'static str,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        PharmacyError::Entity(EntityError::AlreadyExists {
            resource,
            field: field.into(),
            value: value.into(),
        })
    }

    /// Shorthand for a single-field validation failure
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        PharmacyError::Validation(ValidationError::FieldError {
            field: field.into(),
            message: message.into(),
        })
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PharmacyError::Entity(e) => e.status_code(),
            PharmacyError::Validation(_) => StatusCode::BAD_REQUEST,
            PharmacyError::Request(_) => StatusCode::BAD_REQUEST,
            PharmacyError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PharmacyError::Entity(e) => e.error_code(),
            PharmacyError::Validation(_) => "VALIDATION_ERROR",
            PharmacyError::Request(e) => e.error_code(),
            PharmacyError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Whether this error is a client-side rejection (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        // Storage failures stay opaque; the detail goes to the log instead.
        let message = match self {
            PharmacyError::Storage(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        ErrorResponse {
            code: self.error_code().to_string(),
            message,
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            PharmacyError::Entity(EntityError::NotFound { resource, id }) => {
                Some(serde_json::json!({
                    "resource": resource,
                    "id": id,
                }))
            }
            PharmacyError::Validation(ValidationError::FieldError { field, message }) => {
                let mut fields = serde_json::Map::new();
                fields.insert(field.clone(), serde_json::json!([message]));
                Some(serde_json::json!({ "fields": fields }))
            }
            PharmacyError::Validation(ValidationError::FieldErrors(errors)) => {
                let mut fields = serde_json::Map::new();
                for error in errors {
                    let entry = fields
                        .entry(error.field.clone())
                        .or_insert_with(|| serde_json::Value::Array(Vec::new()));
                    if let Some(messages) = entry.as_array_mut() {
                        messages.push(serde_json::Value::String(error.message.clone()));
                    }
                }
                Some(serde_json::json!({ "fields": fields }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for PharmacyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(code = self.error_code(), error = %self, "request rejected");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to addressing a record
#[derive(Debug)]
pub enum EntityError {
    /// Record was not found
    NotFound { resource: &'static str, id: i64 },

    /// A record with the same unique key already exists
    AlreadyExists {
        resource: &'static str,
        field: String,
        value: String,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { resource, id } => {
                write!(f, "{} with id '{}' not found", resource, id)
            }
            EntityError::AlreadyExists {
                resource,
                field,
                value,
            } => {
                write!(f, "{} with {} '{}' already exists", resource, field, value)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
        }
    }
}

impl From<EntityError> for PharmacyError {
    fn from(err: EntityError) -> Self {
        PharmacyError::Entity(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Body is not valid JSON, or does not have the expected shape
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for PharmacyError {
    fn from(err: ValidationError) -> Self {
        PharmacyError::Validation(err)
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldValidationError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| describe_validation_code(&e.code)),
                })
            })
            .collect();

        // field_errors() is backed by a HashMap
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError::FieldErrors(fields)
    }
}

impl From<validator::ValidationErrors> for PharmacyError {
    fn from(errors: validator::ValidationErrors) -> Self {
        PharmacyError::Validation(errors.into())
    }
}

fn describe_validation_code(code: &str) -> String {
    match code {
        "required" => "This field is required.".to_string(),
        "length" => "This field has an invalid length.".to_string(),
        "range" => "Ensure this value is greater than or equal to 0.".to_string(),
        other => format!("Invalid value ({}).", other),
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to the shape of the HTTP request
#[derive(Debug)]
pub enum RequestError {
    /// Path id is not an integer
    InvalidEntityId { id: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidEntityId { id } => {
                write!(f, "Invalid entity ID format: '{}'", id)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidEntityId { .. } => "INVALID_ENTITY_ID",
        }
    }
}

impl From<RequestError> for PharmacyError {
    fn from(err: RequestError) -> Self {
        PharmacyError::Request(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Query execution error
    QueryError { backend: String, message: String },

    /// A lock guarding in-memory state was poisoned
    LockPoisoned { table: &'static str },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StorageError::LockPoisoned { table } => {
                write!(f, "Lock on in-memory table '{}' is poisoned", table)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for PharmacyError {
    fn from(err: StorageError) -> Self {
        PharmacyError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config file '{file}': {message}")]
    ParseError { file: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while assembling the route table
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Resource '{resource}' is already registered")]
    DuplicateResource { resource: &'static str },

    #[error("Path '{path}' is already served by '{owner}'")]
    DuplicatePath {
        path: &'static str,
        owner: &'static str,
    },
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for PharmacyError {
    fn from(err: serde_json::Error) -> Self {
        PharmacyError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for PharmacyError {
    fn from(err: sqlx::Error) -> Self {
        PharmacyError::Storage(StorageError::QueryError {
            backend: "PostgreSQL".to_string(),
            message: err.to_string(),
        })
    }
}

/// A specialized Result type for store operations
pub type PharmacyResult<T> = Result<T, PharmacyError>;
