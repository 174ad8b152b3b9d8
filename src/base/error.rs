use std::io;
use thiserror::Error;

/// Crate-wide error type for the cookie harness.
///
/// Three failure surfaces exist in practice: a cookie-string mismatch
/// ([`HarnessError::CookieMismatch`]), a setup failure (bind, connect,
/// handshake), and a relay whose channel closed before replying. There are
/// no retries anywhere; every operation either succeeds or fails visibly.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("bind to {addr} failed: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("connection to {host}:{port} failed: {source}")]
    ConnectionFailedTo {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("HTTP handshake failed: {0}")]
    Handshake(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("cookie relay closed before replying")]
    RelayClosed,

    #[error("malformed set parameter: {0}")]
    MalformedSetParam(String),

    /// The observed cookie string did not match the expectation. `detail`
    /// carries the human-readable verdict ("The cookie was set as
    /// expected." / "The cookie was rejected.").
    #[error("{detail} expected {expected:?} but got {actual:?}")]
    CookieMismatch {
        expected: String,
        actual: String,
        detail: &'static str,
    },
}

impl HarnessError {
    /// Create a bind error with address context.
    pub fn bind_failed(addr: impl Into<String>, source: io::Error) -> Self {
        HarnessError::Bind {
            addr: addr.into(),
            source,
        }
    }

    /// Create a connection error with host/port context.
    pub fn connection_failed_to(host: impl Into<String>, port: u16, source: io::Error) -> Self {
        HarnessError::ConnectionFailedTo {
            host: host.into(),
            port,
            source,
        }
    }
}

impl From<url::ParseError> for HarnessError {
    fn from(err: url::ParseError) -> Self {
        HarnessError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        HarnessError::MalformedSetParam(err.to_string())
    }
}
