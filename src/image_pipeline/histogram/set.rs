use std::io::Write;

use tracing::trace;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::histogram::types::{HISTOGRAM_BINS, PixelHistogram, SamplePoint};
use crate::image_pipeline::mosaic::RgbImageData;
use crate::image_pipeline::raw::layout::{ACTIVE_COLUMNS, ACTIVE_ROWS};

/// Histograms for a fixed list of sample points, each with its own bins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramSet {
    points: Vec<SamplePoint>,
    histograms: Vec<PixelHistogram>,
    captures: u64,
}

impl HistogramSet {
    /// Checks every point against the decoded frame size.
    pub fn new(points: Vec<SamplePoint>) -> Result<Self> {
        for point in &points {
            if point.row >= ACTIVE_ROWS || point.column >= ACTIVE_COLUMNS {
                return Err(PipelineError::InvalidSamplePoint {
                    row: point.row,
                    column: point.column,
                    channel: point.channel.index(),
                });
            }
        }
        let histograms = points.iter().map(|_| PixelHistogram::new()).collect();
        Ok(Self {
            points,
            histograms,
            captures: 0,
        })
    }

    /// Adds the value at every sample point of one decoded capture.
    ///
    /// Every point is read and checked before any bin changes, so a failed
    /// capture leaves all histograms and the capture count untouched.
    pub fn record(&mut self, planes: &RgbImageData) -> Result<()> {
        let mut values = Vec::with_capacity(self.points.len());
        for point in &self.points {
            let value = planes.get(point.row, point.column, point.channel).ok_or(
                PipelineError::InvalidSamplePoint {
                    row: point.row,
                    column: point.column,
                    channel: point.channel.index(),
                },
            )?;
            if usize::from(value) >= HISTOGRAM_BINS {
                return Err(PipelineError::SampleOutOfRange(value));
            }
            trace!(row = point.row, column = point.column, value, "sample");
            values.push(value);
        }

        for (histogram, value) in self.histograms.iter_mut().zip(values) {
            histogram.record(value);
        }
        self.captures += 1;
        Ok(())
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn histograms(&self) -> &[PixelHistogram] {
        &self.histograms
    }

    pub fn get(&self, point: &SamplePoint) -> Option<&PixelHistogram> {
        self.points
            .iter()
            .position(|p| p == point)
            .map(|index| &self.histograms[index])
    }

    /// Captures recorded so far.
    pub fn captures(&self) -> u64 {
        self.captures
    }

    /// One comma separated line of bins per sample point, in point order.
    pub fn write_csv<W: Write>(&self, output: &mut W) -> Result<()> {
        for histogram in &self.histograms {
            writeln!(output, "{}", histogram.to_csv_line())?;
        }
        Ok(())
    }
}
