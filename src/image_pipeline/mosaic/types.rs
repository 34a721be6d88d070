//! Types for channel-separated captures

use crate::image_pipeline::mosaic::pattern::Channel;

/// Red, green and blue planes over the full sensor area.
///
/// Each site holds a value only in the plane its filter colour dictates; the
/// other two planes are zero there. Nothing is interpolated.
#[derive(Debug, Clone)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u16>,
    /// Actual bits per sample from the sensor
    pub bits_per_sample: u32,
}

impl RgbImageData {
    pub const CHANNELS: usize = 3;

    pub fn zeroed(width: usize, height: usize, bits_per_sample: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * Self::CHANNELS],
            bits_per_sample,
        }
    }

    /// (height, width, channels), the shape the planes are addressed in.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, Self::CHANNELS)
    }

    pub fn get(&self, row: usize, column: usize, channel: Channel) -> Option<u16> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.data
            .get((row * self.width + column) * Self::CHANNELS + channel.index())
            .copied()
    }

    /// Row-major values of a single plane.
    pub fn plane(&self, channel: Channel) -> impl Iterator<Item = u16> + '_ {
        self.data
            .iter()
            .skip(channel.index())
            .step_by(Self::CHANNELS)
            .copied()
    }
}
