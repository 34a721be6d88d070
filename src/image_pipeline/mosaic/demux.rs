use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::mosaic::pattern::MosaicPattern;
use crate::image_pipeline::mosaic::types::RgbImageData;
use crate::image_pipeline::raw::RawImageData;

/// Spreads the mosaic over three planes, each site going to the plane its
/// filter colour names. Unfilled sites stay zero.
pub fn demosaic_sparse(raw: &RawImageData, pattern: &MosaicPattern) -> RgbImageData {
    let width = raw.width;
    debug!("Splitting {}x{} mosaic into sparse planes", width, raw.height);

    let mut rgb = RgbImageData::zeroed(width, raw.height, raw.bits_per_sample);
    if width == 0 {
        return rgb;
    }

    rgb.data
        .par_chunks_exact_mut(width * RgbImageData::CHANNELS)
        .zip(raw.data.par_chunks_exact(width))
        .enumerate()
        .for_each(|(row, (out, samples))| {
            for (column, (pixel, &value)) in out
                .chunks_exact_mut(RgbImageData::CHANNELS)
                .zip(samples)
                .enumerate()
            {
                pixel[pattern.channel_at(row, column).index()] = value;
            }
        });

    rgb
}
