//! Image processing pipeline module
//!
//! Decodes raw-mode captures from the OV5647 camera module into sparse colour
//! planes, and samples fixed sites across repeated captures into histograms.

pub mod raw;
pub mod mosaic;
pub mod decoder;
pub mod capture;
pub mod histogram;
pub mod tiff;
pub mod config;
pub mod conversions;
pub mod common;

pub use common::{
    FormatError,
    PipelineError,
    Result,
};

pub use raw::{
    BrcmReader,
    RawFrameReader,
    RawImageData,
    SyntheticFrame,
};

pub use mosaic::{
    Channel,
    MosaicPattern,
    RgbImageData,
    demosaic_sparse,
};

pub use decoder::{RawBayerDecoder, decode};

pub use capture::{
    CaptureSource,
    FileCaptureSource,
    RaspistillCapture,
};

pub use histogram::{
    HistogramSet,
    PixelHistogram,
    SamplePoint,
};

pub use self::tiff::{
    DumpLayout,
    StandardTiffWriter,
    TiffCompression,
    TiffDump,
    TiffWriter,
};

pub use config::{HistogramConfig, HistogramConfigBuilder};

pub use conversions::CaptureHistogramPipeline;
