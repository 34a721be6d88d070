//! Histogram run configuration

use std::time::Duration;

use crate::image_pipeline::histogram::SamplePoint;
use crate::image_pipeline::mosaic::{Channel, MosaicPattern};
use crate::image_pipeline::tiff::TiffDump;

/// Configuration for a capture-to-histogram run
#[derive(Debug, Clone)]
pub struct HistogramConfig {
    /// Number of captures to decode and sample
    pub iterations: usize,
    /// Pause before the first capture so the sensor can settle
    pub warm_up: Duration,
    /// Sites sampled from every capture, one histogram each
    pub sample_points: Vec<SamplePoint>,
    /// Mosaic orientation of the captures
    pub pattern: MosaicPattern,
    /// Fresh captures to attempt when one fails to decode
    pub capture_retries: u32,
    /// Optional TIFF copy of the last decoded capture
    pub tiff_dump: Option<TiffDump>,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            warm_up: Duration::from_secs(2),
            sample_points: [1000, 1002, 1004, 1006]
                .into_iter()
                .map(|row| SamplePoint::new(row, 1500, Channel::Green))
                .collect(),
            pattern: MosaicPattern::OV5647_BGGR,
            capture_retries: 0,
            tiff_dump: None,
        }
    }
}

impl HistogramConfig {
    pub fn builder() -> HistogramConfigBuilder {
        HistogramConfigBuilder::default()
    }
}

/// Builder for HistogramConfig
#[derive(Default)]
pub struct HistogramConfigBuilder {
    iterations: Option<usize>,
    warm_up: Option<Duration>,
    sample_points: Option<Vec<SamplePoint>>,
    pattern: Option<MosaicPattern>,
    capture_retries: Option<u32>,
    tiff_dump: Option<Option<TiffDump>>,
}

impl HistogramConfigBuilder {
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn warm_up(mut self, warm_up: Duration) -> Self {
        self.warm_up = Some(warm_up);
        self
    }

    pub fn sample_points(mut self, points: Vec<SamplePoint>) -> Self {
        self.sample_points = Some(points);
        self
    }

    pub fn pattern(mut self, pattern: MosaicPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn capture_retries(mut self, retries: u32) -> Self {
        self.capture_retries = Some(retries);
        self
    }

    pub fn tiff_dump(mut self, dump: Option<TiffDump>) -> Self {
        self.tiff_dump = Some(dump);
        self
    }

    pub fn build(self) -> HistogramConfig {
        let default = HistogramConfig::default();
        HistogramConfig {
            iterations: self.iterations.unwrap_or(default.iterations),
            warm_up: self.warm_up.unwrap_or(default.warm_up),
            sample_points: self.sample_points.unwrap_or(default.sample_points),
            pattern: self.pattern.unwrap_or(default.pattern),
            capture_retries: self.capture_retries.unwrap_or(default.capture_retries),
            tiff_dump: self.tiff_dump.unwrap_or(default.tiff_dump),
        }
    }
}
