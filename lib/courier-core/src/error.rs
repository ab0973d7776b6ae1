//! Error types for courier.
//!
//! A fired request either yields data or it does not. Every failure a
//! request can produce is a "no data" failure ([`Error::is_no_data`]); the
//! variant records why, for logs and diagnostics. Only errors raised while
//! *assembling* a request (bad parameters, bad polling interval, no runtime)
//! are not.

use derive_more::{Display, Error, From};

/// Main error type for courier operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The server answered with a non-2xx status.
    #[display("no data: HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Response body, if available.
        #[error(not(source))]
        body: Option<bytes::Bytes>,
    },

    /// Network/connection errors.
    #[display("no data: connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("no data: TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("no data: request timeout")]
    #[from(skip)]
    Timeout,

    /// The descriptor target is not a valid URL.
    #[display("no data: invalid target: {_0}")]
    #[from]
    InvalidTarget(url::ParseError),

    /// The request could not be assembled for the wire.
    #[display("no data: invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// The server answered successfully but sent nothing.
    #[display("no data: empty response body")]
    #[from(skip)]
    EmptyBody,

    /// The payload does not have the shape of the requested model.
    #[display("no data: decode error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// JSON path to the error (e.g., "response.team.name").
        path: String,
        /// Error message.
        message: String,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// Parameters could not be built from the given source.
    #[display("invalid parameters: {_0}")]
    #[from(skip)]
    InvalidParameters(#[error(not(source))] String),

    /// A repeating request was scheduled with a zero interval.
    #[display("invalid polling interval: must be at least one minute")]
    #[from(skip)]
    InvalidInterval,

    /// A repeating request was started outside a Tokio runtime.
    #[display("no Tokio runtime to drive the repeating request")]
    #[from(skip)]
    NoRuntime,
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP error from status code and message.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Create an HTTP error with body.
    #[must_use]
    pub fn http_with_body(status: u16, message: impl Into<String>, body: bytes::Bytes) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: Some(body),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create an invalid parameters error.
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters(message.into())
    }

    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this error means a fired request produced no data.
    ///
    /// Transport failures, error statuses, empty bodies and decode failures
    /// all qualify.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        !matches!(
            self,
            Self::JsonSerialization(_)
                | Self::InvalidParameters(_)
                | Self::InvalidInterval
                | Self::NoRuntime
        )
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the payload could not be decoded into the model.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body if this is an HTTP error with a body.
    #[must_use]
    pub fn body(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
