//! Channel separation for the Bayer mosaic
//!
//! Produces sparse colour planes straight from the sensor layout. There is no
//! demosaicing interpolation here.

mod demux;
pub mod pattern;
pub mod types;


pub use demux::demosaic_sparse;
pub use pattern::{Channel, MosaicPattern};
pub use types::RgbImageData;
