//! RAW image data types

/// Unpacked sensor data, one sample per photosite, before channel separation
#[derive(Debug, Clone)]
pub struct RawImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Row-major samples (single channel Bayer mosaic)
    pub data: Vec<u16>,
    /// Actual bits per sample from the sensor
    pub bits_per_sample: u32,
}

impl RawImageData {
    pub fn sample(&self, row: usize, column: usize) -> Option<u16> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.data.get(row * self.width + column).copied()
    }
}
