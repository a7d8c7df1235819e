use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a pixel buffer with a zero width or height
    #[error("Pixel buffer must not be empty, got {0}x{1}")]
    EmptyBuffer(u32, u32),

    /// Represents raw pixel data whose length does not match `width * height * 3`
    #[error(
        "Malformed pixel buffer: {width}x{height} RGB requires {expected} bytes, got {actual}"
    )]
    MalformedBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Represents two buffers that were expected to share their dimensions, for example cover and stego image
    #[error("Dimension mismatch: {left:?} vs. {right:?}")]
    DimensionMismatch { left: (u32, u32), right: (u32, u32) },

    /// Represents a color channel index outside of R, G, B
    #[error("Invalid color channel index: {0}, expected 0, 1 or 2")]
    InvalidChannel(usize),

    /// Represents a payload fraction outside of (0, 1]
    #[error("Invalid payload fraction: {0}, expected a value in (0, 1]")]
    InvalidPayload(f64),

    #[error(
        "Capacity Error: the message requires {required} bits but only {available} bits are available"
    )]
    CapacityExceeded { required: usize, available: usize },

    /// Represents an unsupported carrier media. For example, a WAV file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing cover image")]
    MissingCover,

    #[error("API Error: Missing stego image")]
    MissingStego,
}
