//! Error types raised by the dispatch pipeline stages

use std::fmt;
use thiserror::Error;

use crate::domain::entities::recipient::UserId;

/// Recipient resolution failures
///
/// None of these are logged to the delivery log; the send is aborted before
/// the provider is contacted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: UserId },

    #[error("No dialing address on file for user {user_id}")]
    MissingDialingAddress { user_id: UserId },

    /// A directory lookup failed for a reason other than "not found"
    #[error("Recipient lookup failed: {message}")]
    Backend { message: String },
}

impl ResolutionError {
    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "user_not_found",
            Self::MissingDialingAddress { .. } => "missing_dialing_address",
            Self::Backend { .. } => "directory_unavailable",
        }
    }
}

/// Category of a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// DNS, TCP or TLS failure before the request was sent
    Connect,
    /// No complete response in time
    Timeout,
    /// Redirect loop or too many hops
    Redirect,
    /// The request could not be built or sent
    Request,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Redirect => "redirect",
            Self::Request => "request",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

/// Network-level delivery failure. HTTP status codes never produce this.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} error: {detail}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub detail: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Whether the request can be sent again
    ///
    /// Only a refused or failed connection qualifies. After a timeout the
    /// gateway may already hold the message.
    pub fn is_retryable(&self) -> bool {
        self.kind == TransportErrorKind::Connect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_resolution_error_messages() {
        let error = ResolutionError::UserNotFound {
            user_id: UserId::new(9),
        };
        assert_eq!(error.to_string(), "User not found: 9");
        assert_eq!(error.code(), "user_not_found");

        let error = ResolutionError::Backend {
            message: "pool timed out".to_string(),
        };
        assert!(error.to_string().contains("pool timed out"));
        assert_eq!(error.code(), "directory_unavailable");
    }

    #[test]
    fn test_transport_error_display_and_retry() {
        let error = TransportError::new(TransportErrorKind::Connect, "connection refused");
        assert_eq!(error.to_string(), "connect error: connection refused");
        assert!(error.is_retryable());

        assert!(!TransportError::new(TransportErrorKind::Timeout, "t").is_retryable());
        assert!(!TransportError::new(TransportErrorKind::Redirect, "r").is_retryable());
        assert!(!TransportError::new(TransportErrorKind::Request, "b").is_retryable());
    }

    #[test]
    fn test_domain_error_bridges() {
        let error: DomainError = ResolutionError::MissingDialingAddress {
            user_id: UserId::new(3),
        }
        .into();
        assert!(matches!(error, DomainError::Resolution(_)));
        assert_eq!(error.to_string(), "No dialing address on file for user 3");
    }
}
