//! Custom error types for coordinate handling

use std::fmt;
use std::io;

/// Coordinate-specific error types
#[derive(Debug)]
pub enum GeoError {
    /// Input text matched none of the supported notations
    MalformedCoordinate(String),
    /// A captured magnitude token failed numeric conversion
    NumericConversion(String),
    /// Unrecognized format name
    UnsupportedFormat(String),
    /// Binary point data shorter than one encoded point
    TruncatedBinary(usize),
    /// I/O error
    IoError(io::Error),
    /// JSON encoding or decoding error
    JsonCodec(serde_json::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::MalformedCoordinate(text) => write!(f, "Unable to parse coordinate: {}", text),
            GeoError::NumericConversion(token) => write!(f, "Invalid numeric token: {}", token),
            GeoError::UnsupportedFormat(name) => write!(f, "Unsupported format: {}", name),
            GeoError::TruncatedBinary(len) => write!(f, "Binary point data too short: {} bytes", len),
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::JsonCodec(e) => write!(f, "JSON error: {}", e),
            GeoError::GenericError(msg) => write!(f, "Coordinate error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

/// Result type for coordinate operations
pub type GeoResult<T> = Result<T, GeoError>;

impl From<serde_json::Error> for GeoError {
    fn from(error: serde_json::Error) -> Self {
        GeoError::JsonCodec(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}
