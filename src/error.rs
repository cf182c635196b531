//! Error types for the color generator.

use crate::color::Channel;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A channel write outside of `0..=255`.
    #[error("{channel} value {value} is outside of 0..=255")]
    ChannelOutOfRange { channel: Channel, value: i64 },

    /// Text typed into a channel field that is not a whole number.
    #[error("invalid channel input: {input:?}")]
    InvalidChannelInput { input: String },

    #[error("invalid hex color code: {0:?}")]
    InvalidHexCode(String),

    /// The native event loop could not be started.
    #[error("gui error: {0}")]
    Gui(#[from] eframe::Error),
}
