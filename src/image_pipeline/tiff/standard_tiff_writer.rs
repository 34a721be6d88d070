use std::io::{Seek, Write};

use tiff::encoder::colortype::{ColorType, Gray16, RGB16};
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder};
use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::mosaic::RgbImageData;
use crate::image_pipeline::raw::RawImageData;
use crate::image_pipeline::tiff::types::TiffCompression;
use crate::image_pipeline::tiff::writer::TiffWriter;

pub struct StandardTiffWriter;

impl StandardTiffWriter {
    fn encode<C, W>(
        &self,
        width: usize,
        height: usize,
        data: &[u16],
        output: W,
        compression: TiffCompression,
    ) -> Result<()>
    where
        C: ColorType<Inner = u16>,
        W: Write + Seek,
    {
        debug!("Encoding TIFF image: {}x{} ({:?})", width, height, compression);

        let compression = match compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut encoder = TiffEncoder::new(output)
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder
            .write_image::<C>(width as u32, height as u32, data)
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        debug!("TIFF encoding complete");
        Ok(())
    }
}

impl TiffWriter for StandardTiffWriter {
    fn write_mosaic<W: Write + Seek>(
        &self,
        image: &RawImageData,
        output: W,
        compression: TiffCompression,
    ) -> Result<()> {
        self.encode::<Gray16, W>(image.width, image.height, &image.data, output, compression)
    }

    fn write_planes<W: Write + Seek>(
        &self,
        image: &RgbImageData,
        output: W,
        compression: TiffCompression,
    ) -> Result<()> {
        self.encode::<RGB16, W>(image.width, image.height, &image.data, output, compression)
    }
}
