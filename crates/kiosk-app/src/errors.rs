//! Error types for feed operations
//!
//! Fetch failures never crash the application and never touch board item
//! lists: they are logged by the runtime layer and surfaced to the UI as
//! the state notice. The variants here classify what went wrong so logs
//! and views can say something more useful than "request failed".

use serde::{Deserialize, Serialize};

/// Error raised when fetching a board's content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum FeedError {
    /// The endpoint answered with a non-success status.
    #[error("feed endpoint returned HTTP {status}")]
    Http {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },
    /// The request never completed (connect, timeout, TLS).
    #[error("feed transport failed: {message}")]
    Transport {
        /// Human-readable transport failure description.
        message: String,
    },
    /// The response body was not the expected JSON shape.
    #[error("feed response malformed: {message}")]
    Decode {
        /// Human-readable decode failure description.
        message: String,
    },
    /// No feed source is configured (offline/demo mode).
    #[error("feed source is offline")]
    Offline,
}

impl FeedError {
    /// Non-success HTTP status.
    pub fn http(status: u16) -> Self {
        Self::Http { status }
    }

    /// Transport-level failure (connect, timeout, TLS).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Response decode failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether a later attempt could succeed.
    ///
    /// Everything but `Offline` is worth retrying by hand; offline mode
    /// has no source to retry against.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Offline)
    }

    /// Short stable label for log fields.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Http { .. } => "FEED_HTTP",
            Self::Transport { .. } => "FEED_TRANSPORT",
            Self::Decode { .. } => "FEED_DECODE",
            Self::Offline => "FEED_OFFLINE",
        }
    }
}
