use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::RawImageData;

/// Turns a whole capture stream into the unpacked sensor mosaic.
pub trait RawFrameReader {
    fn unpack(&self, capture: &[u8]) -> Result<RawImageData>;
}
