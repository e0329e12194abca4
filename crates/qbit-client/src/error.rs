//! Error types for Web API operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Primary error type for Web API operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A request was attempted without an authenticated session.
    #[error("please login first")]
    LoginRequired,
    /// The daemon rejected the supplied credentials.
    #[error("login rejected")]
    LoginFailed {
        /// Reply body returned by the daemon.
        reason: String,
    },
    /// The probe endpoint is missing; the daemon predates Web API v2.
    #[error("daemon does not expose Web API v2; qBittorrent 4.1 or later is required")]
    UnsupportedDaemon,
    /// A URL could not be parsed.
    #[error("invalid URL")]
    InvalidUrl {
        /// Offending URL text.
        value: String,
        /// Parse failure detail.
        #[source]
        source: url::ParseError,
    },
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Setup {
        /// Construction failure detail.
        #[source]
        source: reqwest::Error,
    },
    /// An endpoint replied with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// Endpoint that was called.
        endpoint: &'static str,
        /// Status returned by the daemon.
        status: StatusCode,
    },
    /// A request could not be delivered.
    #[error("transport failure")]
    Transport {
        /// Endpoint that was called.
        endpoint: &'static str,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// A response body could not be decoded into the expected shape.
    #[error("failed to decode response")]
    Decode {
        /// Endpoint that was called.
        endpoint: &'static str,
        /// Decoding failure detail.
        #[source]
        source: reqwest::Error,
    },
    /// A plain-text response body did not parse as expected.
    #[error("unexpected response body")]
    UnexpectedBody {
        /// Endpoint that was called.
        endpoint: &'static str,
        /// Body returned by the daemon.
        body: String,
    },
    /// A request payload could not be encoded.
    #[error("failed to encode request payload")]
    Encode {
        /// Endpoint that was called.
        endpoint: &'static str,
        /// Encoding failure detail.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for Web API results.
pub type ClientResult<T> = Result<T, ClientError>;
