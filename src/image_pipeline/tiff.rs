//! TIFF export module
//!
//! Writes decoded captures as 16-bit TIFF files for inspection in other tools.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::TiffWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{DumpLayout, TiffCompression, TiffDump};
