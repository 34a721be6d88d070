use crate::image_pipeline::mosaic::Channel;
use crate::image_pipeline::raw::layout::MAX_SAMPLE;

/// One bin per 10-bit intensity.
pub const HISTOGRAM_BINS: usize = MAX_SAMPLE as usize + 1;

/// A (row, column, plane) site sampled from every decoded capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplePoint {
    pub row: usize,
    pub column: usize,
    pub channel: Channel,
}

impl SamplePoint {
    pub fn new(row: usize, column: usize, channel: Channel) -> Self {
        Self {
            row,
            column,
            channel,
        }
    }
}

/// Frequency of each intensity observed at one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelHistogram {
    counts: Vec<u64>,
}

impl Default for PixelHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelHistogram {
    pub fn new() -> Self {
        Self {
            counts: vec![0; HISTOGRAM_BINS],
        }
    }

    /// Counts one observation. Returns `false` when `value` has no bin.
    pub fn record(&mut self, value: u16) -> bool {
        match self.counts.get_mut(usize::from(value)) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn count(&self, value: u16) -> u64 {
        self.counts.get(usize::from(value)).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Bins joined by ", ", lowest intensity first.
    pub fn to_csv_line(&self) -> String {
        self.counts
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
