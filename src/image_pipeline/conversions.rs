//! Pipeline conversions module
//!
//! Orchestrates capture, decode and histogram accumulation.

mod capture_histogram;

#[cfg(test)]
mod tests;

pub use capture_histogram::CaptureHistogramPipeline;
