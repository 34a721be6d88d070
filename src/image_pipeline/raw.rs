//! RAW frame reading module
//!
//! This module unpacks the BRCM raw block into a single-plane sensor mosaic.

mod reader;
mod brcm_reader;
pub mod layout;
pub mod synthetic;
pub mod types;


pub use reader::RawFrameReader;
pub use brcm_reader::BrcmReader;
pub use synthetic::{SyntheticFrame, pack_group};
pub use types::RawImageData;
