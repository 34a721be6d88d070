//! Per-site intensity histograms across repeated captures

mod types;
mod set;


pub use types::{HISTOGRAM_BINS, PixelHistogram, SamplePoint};
pub use set::HistogramSet;
