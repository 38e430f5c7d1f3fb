//! Error types for Gantry
//!
//! Errors carry structured fields so that diagnostics can name the resource
//! and field at fault. Validation errors go back to the immediate caller;
//! unexpected-object errors are reported to a diagnostic sink and skipped.

use thiserror::Error;

/// Default context value when no specific resource is known
pub const UNKNOWN_CONTEXT: &str = "unknown";

/// Main error type for Gantry operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed validation (malformed reference, duplicate listener, ...)
    #[error("validation error for {resource}: {message}")]
    Validation {
        /// Resource the input belongs to (e.g. "gateway default/edge")
        resource: String,
        /// Description of what's invalid
        message: String,
        /// The invalid field path (e.g. "spec.listeners[2].name")
        field: Option<String>,
    },

    /// A watch payload was not the object type the handler expected
    #[error("invalid type: expected {expected}, found {found}")]
    UnexpectedObject {
        /// Kind the handler can interpret (e.g. "GatewayClass")
        expected: String,
        /// Kind actually carried by the payload
        found: String,
    },

    /// Serialization/deserialization error
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of what failed
        message: String,
        /// The resource kind being converted (if known)
        kind: Option<String>,
    },
}

impl Error {
    /// Create a validation error with the given message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            resource: UNKNOWN_CONTEXT.to_string(),
            message: msg.into(),
            field: None,
        }
    }

    /// Create a validation error with resource context
    pub fn validation_for(resource: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            resource: resource.into(),
            message: msg.into(),
            field: None,
        }
    }

    /// Create a validation error with resource context and field path
    pub fn validation_for_field(
        resource: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Validation {
            resource: resource.into(),
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create an error for a payload of the wrong kind
    pub fn unexpected_object(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedObject {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a serialization error with the given message
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization {
            message: msg.into(),
            kind: None,
        }
    }

    /// Create a serialization error with resource kind context
    pub fn serialization_for_kind(kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Serialization {
            message: msg.into(),
            kind: Some(kind.into()),
        }
    }

    /// Check if this error is retryable
    ///
    /// None of these errors clear up on their own: the input has to change.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Validation { .. } => false,
            Error::UnexpectedObject { .. } => false,
            Error::Serialization { .. } => false,
        }
    }

    /// Get the resource name if this error is associated with one
    pub fn resource(&self) -> Option<&str> {
        match self {
            Error::Validation { resource, .. } => Some(resource),
            Error::UnexpectedObject { .. } => None,
            Error::Serialization { .. } => None,
        }
    }

    /// Get the invalid field path if one was recorded
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::serialization(e.to_string())
    }
}
