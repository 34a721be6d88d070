//! Capture sources
//!
//! Produce whole capture streams (JPEG preview followed by the raw block) for
//! the decoder, either from the camera or from saved files.

mod source;
mod raspistill;
mod file_source;

pub use source::CaptureSource;
pub use raspistill::RaspistillCapture;
pub use file_source::FileCaptureSource;
