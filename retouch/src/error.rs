//! Error types for the retouch SDK.

use thiserror::Error;

/// Result type alias for retouch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for retouch operations.
///
/// Every failure is scoped to a single call; the SDK never retries and
/// never swallows a failure. Classification errors (`Blocked`,
/// `GenerationStopped`, `NoImageReturned`, `NoDescription`) carry a
/// context label naming the operation that produced them.
#[derive(Error, Debug)]
pub enum Error {
    /// The image resource could not be read or encoded for transport.
    #[error("image encoding failed: {0}")]
    Encoding(String),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// API error returned by the service.
    #[error("api error {status}: {message} (http_status={http_status})")]
    Api {
        http_status: u16,
        status: String,
        message: String,
    },

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// The service refused to process the request before generation began.
    #[error(
        "{context} request was blocked by the service: {reason} ({})",
        .message.as_deref().unwrap_or("no additional details")
    )]
    Blocked {
        reason: String,
        message: Option<String>,
        context: String,
    },

    /// Generation ended abnormally with no image produced.
    #[error("{context} stopped unexpectedly (finish reason: {reason})")]
    GenerationStopped { reason: String, context: String },

    /// The response contained neither a block nor an image part.
    #[error("no image was returned for {context}: {detail}")]
    NoImageReturned { detail: String, context: String },

    /// A description call returned neither a block nor usable text.
    #[error(
        "the model returned no description (finish reason: {})",
        .finish_reason.as_deref().unwrap_or("none")
    )]
    NoDescription { finish_reason: Option<String> },

    /// Uniform wrapper for any failure on the text-to-image path.
    #[error("image generation failed: {0}")]
    ImageSynthesis(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns true if the service refused the request outright.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Error::Blocked { .. })
    }

    /// Returns true if the call never completed at the transport level.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Api { .. } | Error::Json(_))
    }
}
