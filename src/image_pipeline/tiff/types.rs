//! TIFF export configuration types

use std::path::PathBuf;

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// What a dump file contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpLayout {
    /// The unpacked sensor mosaic, one grey sample per photosite
    #[default]
    Mosaic,
    /// The sparse red, green and blue planes
    Planes,
}

/// Where and how to write the last decoded capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiffDump {
    pub path: PathBuf,
    pub layout: DumpLayout,
    pub compression: TiffCompression,
}

impl TiffDump {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            layout: DumpLayout::default(),
            compression: TiffCompression::default(),
        }
    }

    pub fn layout(mut self, layout: DumpLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = compression;
        self
    }
}
