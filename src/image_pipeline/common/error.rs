use thiserror::Error;

/// Reasons a capture buffer cannot be decoded as a BRCM raw frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Capture is {actual} bytes, the raw frame alone needs {required}")]
    TooShort { actual: usize, required: usize },

    #[error("Raw frame marker mismatch: expected \"BRCM\", found {found:?}")]
    MissingMarker { found: [u8; 4] },

    #[error("Raw payload is {actual} bytes, row framing expects {expected}")]
    Framing { actual: usize, expected: usize },
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Malformed raw capture: {0}")]
    Format(#[from] FormatError),

    #[error("Capture failed: {0}")]
    CaptureError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error(
        "Sample point outside the decoded frame: row={row}, column={column}, channel={channel}"
    )]
    InvalidSamplePoint {
        row: usize,
        column: usize,
        channel: usize,
    },

    #[error("Mosaic pattern does not match capture orientation (hflip={hflip}, vflip={vflip})")]
    OrientationMismatch { hflip: bool, vflip: bool },

    #[error("Sample value {0} exceeds the 10-bit histogram range")]
    SampleOutOfRange(u16),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
