use std::io::{Seek, Write};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::mosaic::RgbImageData;
use crate::image_pipeline::raw::RawImageData;
use crate::image_pipeline::tiff::types::TiffCompression;

pub trait TiffWriter {
    /// Single-channel mosaic as Gray16.
    fn write_mosaic<W: Write + Seek>(
        &self,
        image: &RawImageData,
        output: W,
        compression: TiffCompression,
    ) -> Result<()>;
    /// Sparse planes as RGB16.
    fn write_planes<W: Write + Seek>(
        &self,
        image: &RgbImageData,
        output: W,
        compression: TiffCompression,
    ) -> Result<()>;
}
