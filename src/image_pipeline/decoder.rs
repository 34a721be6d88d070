//! One-call decode of a raw-mode capture into sparse colour planes.

use crate::image_pipeline::common::error::FormatError;
use crate::image_pipeline::mosaic::{MosaicPattern, RgbImageData, demosaic_sparse};
use crate::image_pipeline::raw::BrcmReader;

/// Decodes OV5647 raw captures into (1944, 2592, 3) red/green/blue planes.
///
/// Pure and stateless apart from the mosaic orientation, so one decoder can be
/// shared across threads decoding independent captures.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBayerDecoder {
    reader: BrcmReader,
    pattern: MosaicPattern,
}

impl RawBayerDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder for captures taken with a flipped orientation.
    pub fn with_pattern(pattern: MosaicPattern) -> Self {
        Self {
            reader: BrcmReader,
            pattern,
        }
    }

    pub fn pattern(&self) -> MosaicPattern {
        self.pattern
    }

    /// Decodes the raw block at the tail of `capture`.
    ///
    /// # Errors
    ///
    /// [`FormatError`] if the capture is shorter than the raw block, the block
    /// does not start with "BRCM", or its payload does not frame into rows.
    /// No partial output is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use picam_bayer_rs::image_pipeline::{Channel, RawBayerDecoder, SyntheticFrame};
    ///
    /// let mut frame = SyntheticFrame::new();
    /// frame.set_sample(1, 0, 640);
    ///
    /// let planes = RawBayerDecoder::new().decode(frame.as_bytes()).unwrap();
    /// assert_eq!(planes.shape(), (1944, 2592, 3));
    /// assert_eq!(planes.get(1, 0, Channel::Red), Some(640));
    /// ```
    pub fn decode(&self, capture: &[u8]) -> Result<RgbImageData, FormatError> {
        let mosaic = self.reader.unpack_frame(capture)?;
        Ok(demosaic_sparse(&mosaic, &self.pattern))
    }
}

/// Decodes a capture taken in the sensor's default orientation.
pub fn decode(capture: &[u8]) -> Result<RgbImageData, FormatError> {
    RawBayerDecoder::new().decode(capture)
}
