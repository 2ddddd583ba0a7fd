//! Error types for the kharcha-core library.

use thiserror::Error;

/// Main error type for the kharcha library.
#[derive(Error, Debug)]
pub enum KharchaError {
    /// Text recognition error.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// Scan pipeline error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the remote text-recognition service.
///
/// Variants stay distinguishable for logging, but the pipeline treats
/// every one of them as a total recognition failure with a manual-entry
/// fallback.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// Network failure before a response was received.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The service reported one or more processing errors.
    #[error("service error: {0}")]
    Service(String),

    /// The response body was not the expected JSON shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Recognition succeeded but found no text in the image.
    #[error("no text detected in image")]
    NoTextDetected,
}

/// Errors at the scan pipeline boundary.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Another scan is already in flight on this pipeline.
    #[error("another scan is already in progress")]
    Busy,

    /// The capture collaborator failed to supply an image.
    #[error("capture failed: {0}")]
    Capture(String),

    /// Image bytes were empty or not a recognizable image format.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the kharcha library.
pub type Result<T> = std::result::Result<T, KharchaError>;
