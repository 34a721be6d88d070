use std::io::{BufWriter, Write};

use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::{
    capture::CaptureSource,
    common::error::{PipelineError, Result},
    config::HistogramConfig,
    histogram::HistogramSet,
    mosaic::{MosaicPattern, RgbImageData, demosaic_sparse},
    raw::{BrcmReader, RawFrameReader, RawImageData},
    tiff::{DumpLayout, StandardTiffWriter, TiffDump, TiffWriter},
};

/// Repeatedly captures, decodes and samples fixed sites into histograms.
pub struct CaptureHistogramPipeline<S: CaptureSource, R: RawFrameReader, W: TiffWriter> {
    source: S,
    reader: R,
    writer: W,
    config: HistogramConfig,
}

impl<S: CaptureSource> CaptureHistogramPipeline<S, BrcmReader, StandardTiffWriter> {
    pub fn new(source: S, config: HistogramConfig) -> Result<Self> {
        Self::with_custom(source, BrcmReader, StandardTiffWriter, config)
    }
}

impl<S: CaptureSource, R: RawFrameReader, W: TiffWriter> CaptureHistogramPipeline<S, R, W> {
    /// Fails with `InvalidSamplePoint` if a configured site lies outside the
    /// frame, or `OrientationMismatch` if the source flips frames the
    /// configured pattern does not account for.
    pub fn with_custom(
        source: S,
        reader: R,
        writer: W,
        config: HistogramConfig,
    ) -> Result<Self> {
        validate_config(&source, &config)?;
        Ok(Self {
            source,
            reader,
            writer,
            config,
        })
    }

    /// Takes `iterations` captures and returns one histogram per sample point.
    #[instrument(skip(self), fields(iterations = self.config.iterations))]
    pub fn run(&mut self) -> Result<HistogramSet> {
        let mut histograms = HistogramSet::new(self.config.sample_points.clone())?;

        if !self.config.warm_up.is_zero() {
            let _span = tracing::info_span!("warm_up").entered();
            info!("Warming up sensor for {:?}", self.config.warm_up);
            self.source.warm_up(self.config.warm_up)?;
        }

        let mut last = None;
        for iteration in 0..self.config.iterations {
            let _span = tracing::info_span!("capture", iteration).entered();

            let mosaic = self.capture_mosaic()?;
            let planes = {
                let _span = tracing::info_span!("split_channels").entered();
                demosaic_sparse(&mosaic, &self.config.pattern)
            };
            histograms.record(&planes)?;

            last = Some((mosaic, planes));
        }

        if let (Some(dump), Some((mosaic, planes))) = (&self.config.tiff_dump, &last) {
            let _span = tracing::info_span!("write_tiff_dump").entered();
            self.write_dump(dump, mosaic, planes)?;
        }

        info!(
            captures = histograms.captures(),
            points = histograms.points().len(),
            "Histogram run complete"
        );
        Ok(histograms)
    }

    /// Captures and unpacks one frame, taking a fresh capture on a format
    /// error while retries remain.
    fn capture_mosaic(&mut self) -> Result<RawImageData> {
        let mut attempt = 0;
        loop {
            let capture = {
                let _span = tracing::info_span!("acquire").entered();
                self.source.capture()?
            };

            let unpacked = {
                let _span = tracing::info_span!("decode_raw", bytes = capture.len()).entered();
                self.reader.unpack(&capture)
            };

            match unpacked {
                Err(PipelineError::Format(e)) if attempt < self.config.capture_retries => {
                    attempt += 1;
                    warn!(
                        "Discarding malformed capture ({}), retry {} of {}",
                        e, attempt, self.config.capture_retries
                    );
                }
                result => return result,
            }
        }
    }

    fn write_dump(
        &self,
        dump: &TiffDump,
        mosaic: &RawImageData,
        planes: &RgbImageData,
    ) -> Result<()> {
        info!(path = %dump.path.display(), layout = ?dump.layout, "Writing TIFF dump");

        let file = std::fs::File::create(&dump.path).map_err(|e| {
            PipelineError::OutputWriteError(format!("{}: {}", dump.path.display(), e))
        })?;
        let mut output = BufWriter::new(file);

        match dump.layout {
            DumpLayout::Mosaic => {
                self.writer.write_mosaic(mosaic, &mut output, dump.compression)?
            }
            DumpLayout::Planes => {
                self.writer.write_planes(planes, &mut output, dump.compression)?
            }
        }
        output.flush()?;

        debug!("TIFF dump written");
        Ok(())
    }

    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: HistogramConfig) -> Result<()> {
        validate_config(&self.source, &config)?;
        self.config = config;
        Ok(())
    }
}

fn validate_config<S: CaptureSource>(source: &S, config: &HistogramConfig) -> Result<()> {
    HistogramSet::new(config.sample_points.clone())?;

    if let Some((hflip, vflip)) = source.orientation() {
        if config.pattern != MosaicPattern::OV5647_BGGR.oriented(hflip, vflip) {
            return Err(PipelineError::OrientationMismatch { hflip, vflip });
        }
    }
    Ok(())
}
