//! # Croissant Error Types
//!
//! Structured errors for card construction and serialization. Uses
//! `thiserror` for ergonomic error definitions with diagnostic context.

use thiserror::Error;

/// Errors from Croissant document operations.
#[derive(Error, Debug)]
pub enum CroissantError {
    /// The document failed structural validation and was rejected
    /// before serialization.
    #[error("metadata failed validation:\n{report}")]
    Invalid {
        /// Human-readable issue report from [`crate::validate`].
        report: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (output file operations).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for Croissant document operations.
pub type CroissantResult<T> = Result<T, CroissantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_display_includes_report() {
        let err = CroissantError::Invalid {
            report: "error: dangling reference".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("failed validation"));
        assert!(msg.contains("dangling reference"));
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = CroissantError::from(io_err);
        assert!(format!("{err}").contains("read-only"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = CroissantError::from(json_err);
        assert!(format!("{err}").starts_with("JSON error"));
    }
}
