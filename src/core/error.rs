//! Error types for the carousel core and its configuration

use thiserror::Error;

/// Errors raised while laying out or rendering the carousel
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    /// The carousel has no cards to place on the ring
    #[error("carousel has no cards")]
    NoCards,

    /// The measured card width cannot produce a usable radius
    #[error("invalid card width: {0}")]
    InvalidCardWidth(f64),

    /// The rotating container element is not in the document
    #[error("carousel container element is missing")]
    ContainerMissing,
}

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An environment override could not be parsed as a number
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    /// A value parsed but falls outside its allowed range
    #[error("{field} out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    /// Embedded JSON configuration could not be decoded
    #[error("malformed configuration: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}
