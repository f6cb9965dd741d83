//! Error types for the Folio pipeline.

use thiserror::Error;

/// A shared error type for the entire Folio workspace.
///
/// Every variant maps to one class of the failure taxonomy: a missing
/// setting, an upstream rejection, a network fault or a broken local file.
/// Use-case entry points downgrade all of them to empty records.
#[derive(Error, Debug, Clone)]
pub enum FolioError {
    /// No API credential was configured for an authenticated fetch
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// The remote service answered, but rejected the request or returned an error payload
    #[error("Upstream error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// Timeout, DNS, connection reset, aborted request
    #[error("Network error: {0}")]
    Network(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FolioError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a MissingCredential error
    pub fn missing_credential(what: impl Into<String>) -> Self {
        Self::MissingCredential(what.into())
    }

    /// Creates an Upstream error
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a MissingCredential error
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential(_))
    }

    /// Check if this is an Upstream error
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Serialization {
                format: "JSON".to_string(),
                message: err.to_string(),
            };
        }
        if let Some(status) = err.status() {
            return Self::upstream(Some(status.as_u16()), err.to_string());
        }
        Self::Network(err.to_string())
    }
}

/// A type alias for `Result<T, FolioError>`.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display_with_status() {
        let err = FolioError::upstream(Some(502), "bad gateway");
        assert_eq!(err.to_string(), "Upstream error (502): bad gateway");
        assert!(err.is_upstream());
    }

    #[test]
    fn test_upstream_display_without_status() {
        let err = FolioError::upstream(None, "Could not resolve to a User");
        assert_eq!(err.to_string(), "Upstream error: Could not resolve to a User");
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err: FolioError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
    }
}
