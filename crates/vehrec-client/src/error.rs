//! Error types for the prediction client

use crate::config::ConfigError;

/// Request pipeline failures
///
/// Nothing here is retried; the caller decides what to show.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Client could not be configured
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No response arrived (connect, timeout, broken body)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("prediction endpoint returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// Body is not `{ "Success": { "prediction": [...] } }`
    #[error("malformed prediction response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl RequestError {
    /// Failed before any response was received
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Failed because the configured timeout elapsed
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = RequestError::Status {
            status: 503,
            body: "model offline".to_string(),
        };
        assert_eq!(err.to_string(), "prediction endpoint returned 503: model offline");
        assert!(!err.is_transport());
    }

    #[test]
    fn malformed_response_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RequestError::from(serde_err);
        assert!(matches!(err, RequestError::MalformedResponse(_)));
        assert!(!err.is_timeout());
    }
}
