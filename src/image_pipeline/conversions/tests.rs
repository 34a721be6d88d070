use std::collections::VecDeque;
use std::io::{Seek, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::image_pipeline::capture::CaptureSource;
use crate::image_pipeline::common::error::{FormatError, PipelineError, Result};
use crate::image_pipeline::config::HistogramConfig;
use crate::image_pipeline::conversions::CaptureHistogramPipeline;
use crate::image_pipeline::histogram::SamplePoint;
use crate::image_pipeline::mosaic::{Channel, MosaicPattern, RgbImageData};
use crate::image_pipeline::raw::{BrcmReader, RawFrameReader, RawImageData, SyntheticFrame};
use crate::image_pipeline::tiff::{
    DumpLayout, StandardTiffWriter, TiffCompression, TiffDump, TiffWriter,
};

struct MockSource {
    captures: VecDeque<Result<Vec<u8>>>,
    taken: Arc<Mutex<usize>>,
    warm_ups: Arc<Mutex<Vec<Duration>>>,
    orientation: Option<(bool, bool)>,
}

impl MockSource {
    fn new(captures: Vec<Result<Vec<u8>>>) -> (Self, Arc<Mutex<usize>>) {
        let taken = Arc::new(Mutex::new(0));
        let source = Self {
            captures: captures.into(),
            taken: taken.clone(),
            warm_ups: Arc::new(Mutex::new(Vec::new())),
            orientation: None,
        };
        (source, taken)
    }
}

impl CaptureSource for MockSource {
    fn capture(&mut self) -> Result<Vec<u8>> {
        *self.taken.lock().unwrap() += 1;
        self.captures
            .pop_front()
            .unwrap_or_else(|| {
                Err(PipelineError::CaptureError("mock source exhausted".to_string()))
            })
    }

    fn warm_up(&mut self, duration: Duration) -> Result<()> {
        self.warm_ups.lock().unwrap().push(duration);
        Ok(())
    }

    fn orientation(&self) -> Option<(bool, bool)> {
        self.orientation
    }
}

/// Reader producing a small constant mosaic without touching the input.
struct MockReader {
    value: u16,
}

impl RawFrameReader for MockReader {
    fn unpack(&self, _capture: &[u8]) -> Result<RawImageData> {
        Ok(RawImageData {
            width: 2592,
            height: 1944,
            data: vec![self.value; 2592 * 1944],
            bits_per_sample: 10,
        })
    }
}

struct MockWriter {
    written: Arc<Mutex<Vec<DumpLayout>>>,
}

impl TiffWriter for MockWriter {
    fn write_mosaic<W: Write + Seek>(
        &self,
        _image: &RawImageData,
        _output: W,
        _compression: TiffCompression,
    ) -> Result<()> {
        self.written.lock().unwrap().push(DumpLayout::Mosaic);
        Ok(())
    }

    fn write_planes<W: Write + Seek>(
        &self,
        _image: &RgbImageData,
        _output: W,
        _compression: TiffCompression,
    ) -> Result<()> {
        self.written.lock().unwrap().push(DumpLayout::Planes);
        Ok(())
    }
}

fn frame_with(value: u16) -> Vec<u8> {
    let mut frame = SyntheticFrame::new();
    frame.set_sample(1000, 1500, value).set_sample(1001, 1500, value / 2);
    frame.into_capture(b"\xFF\xD8jpeg preview\xFF\xD9")
}

fn config(iterations: usize) -> HistogramConfig {
    HistogramConfig::builder()
        .iterations(iterations)
        .warm_up(Duration::ZERO)
        .sample_points(vec![
            SamplePoint::new(1000, 1500, Channel::Green),
            SamplePoint::new(1001, 1500, Channel::Red),
            SamplePoint::new(1000, 1501, Channel::Blue),
        ])
        .build()
}

#[test]
fn test_successful_run() {
    let (source, taken) = MockSource::new(vec![
        Ok(frame_with(800)),
        Ok(frame_with(800)),
        Ok(frame_with(600)),
    ]);
    let mut pipeline = CaptureHistogramPipeline::new(source, config(3)).unwrap();

    let histograms = pipeline.run().unwrap();
    assert_eq!(*taken.lock().unwrap(), 3);
    assert_eq!(histograms.captures(), 3);

    let green = &histograms.histograms()[0];
    assert_eq!(green.count(800), 2);
    assert_eq!(green.count(600), 1);

    let red = &histograms.histograms()[1];
    assert_eq!(red.count(400), 2);
    assert_eq!(red.count(300), 1);

    let blue = &histograms.histograms()[2];
    assert_eq!(blue.count(0), 3);
}

#[test]
fn test_capture_failure_propagates() {
    let (source, _) = MockSource::new(vec![
        Ok(frame_with(10)),
        Err(PipelineError::CaptureError("camera busy".to_string())),
    ]);
    let mut pipeline = CaptureHistogramPipeline::new(source, config(5)).unwrap();

    let result = pipeline.run();
    assert!(matches!(result, Err(PipelineError::CaptureError(msg)) if msg == "camera busy"));
}

#[test]
fn test_malformed_capture_fails_without_retries() {
    let (source, taken) = MockSource::new(vec![Ok(b"jpeg only".to_vec()), Ok(frame_with(1))]);
    let mut pipeline = CaptureHistogramPipeline::new(source, config(1)).unwrap();

    let result = pipeline.run();
    assert!(matches!(
        result,
        Err(PipelineError::Format(FormatError::TooShort { .. }))
    ));
    assert_eq!(*taken.lock().unwrap(), 1);
}

#[test]
fn test_malformed_capture_retried_with_fresh_capture() {
    let mut bad_marker = frame_with(5);
    let start = bad_marker.len() - 6_404_096;
    bad_marker[start] = b'X';

    let (source, taken) = MockSource::new(vec![Ok(bad_marker), Ok(frame_with(321))]);
    let config = HistogramConfig::builder()
        .iterations(1)
        .warm_up(Duration::ZERO)
        .sample_points(vec![SamplePoint::new(1000, 1500, Channel::Green)])
        .capture_retries(1)
        .build();
    let mut pipeline = CaptureHistogramPipeline::new(source, config).unwrap();

    let histograms = pipeline.run().unwrap();
    assert_eq!(*taken.lock().unwrap(), 2);
    assert_eq!(histograms.histograms()[0].count(321), 1);
}

#[test]
fn test_retries_exhausted() {
    let (source, taken) = MockSource::new(vec![Ok(vec![0; 10]), Ok(vec![0; 10]), Ok(vec![0; 10])]);
    let config = HistogramConfig::builder()
        .iterations(1)
        .warm_up(Duration::ZERO)
        .capture_retries(1)
        .build();
    let mut pipeline = CaptureHistogramPipeline::new(source, config).unwrap();

    assert!(matches!(pipeline.run(), Err(PipelineError::Format(_))));
    assert_eq!(*taken.lock().unwrap(), 2);
}

#[test]
fn test_invalid_sample_point_rejected_at_construction() {
    let (source, _) = MockSource::new(Vec::new());
    let config = HistogramConfig::builder()
        .sample_points(vec![SamplePoint::new(2000, 0, Channel::Green)])
        .build();
    let result = CaptureHistogramPipeline::new(source, config);
    assert!(matches!(result, Err(PipelineError::InvalidSamplePoint { row: 2000, .. })));
}

#[test]
fn test_custom_reader_and_writer() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let dir = tempfile::tempdir().unwrap();
    let (source, _) = MockSource::new(vec![Ok(Vec::new()), Ok(Vec::new())]);
    let config = HistogramConfig::builder()
        .iterations(2)
        .warm_up(Duration::ZERO)
        .tiff_dump(Some(TiffDump::new(dir.path().join("dump.tiff")).layout(DumpLayout::Planes)))
        .build();

    let mut pipeline = CaptureHistogramPipeline::with_custom(
        source,
        MockReader { value: 42 },
        MockWriter { written: written.clone() },
        config,
    )
    .unwrap();

    let histograms = pipeline.run().unwrap();
    // default points are all green sites
    for histogram in histograms.histograms() {
        assert_eq!(histogram.count(42), 2);
    }
    assert_eq!(*written.lock().unwrap(), vec![DumpLayout::Planes]);
}

#[test]
fn test_tiff_dump_of_last_capture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last.tiff");
    let (source, _) = MockSource::new(vec![Ok(frame_with(100)), Ok(frame_with(200))]);
    let config = HistogramConfig::builder()
        .iterations(2)
        .warm_up(Duration::ZERO)
        .tiff_dump(Some(TiffDump::new(&path).compression(TiffCompression::DeflateFast)))
        .build();
    let mut pipeline =
        CaptureHistogramPipeline::with_custom(source, BrcmReader, StandardTiffWriter, config)
            .unwrap();
    pipeline.run().unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let mut decoder = tiff::decoder::Decoder::new(file).unwrap();
    assert_eq!(decoder.dimensions().unwrap(), (2592, 1944));
    match decoder.read_image().unwrap() {
        tiff::decoder::DecodingResult::U16(data) => {
            assert_eq!(data[1000 * 2592 + 1500], 200);
            assert_eq!(data[1001 * 2592 + 1500], 100);
        }
        _ => panic!("expected 16-bit samples"),
    }
}

#[test]
fn test_dump_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (source, _) = MockSource::new(vec![Ok(frame_with(1))]);
    let config = HistogramConfig::builder()
        .iterations(1)
        .warm_up(Duration::ZERO)
        .tiff_dump(Some(TiffDump::new(dir.path().join("absent").join("dump.tiff"))))
        .build();
    let mut pipeline = CaptureHistogramPipeline::new(source, config).unwrap();

    assert!(matches!(pipeline.run(), Err(PipelineError::OutputWriteError(_))));
}

#[test]
fn test_zero_iterations() {
    let (source, taken) = MockSource::new(Vec::new());
    let mut pipeline = CaptureHistogramPipeline::new(source, config(0)).unwrap();
    let histograms = pipeline.run().unwrap();
    assert_eq!(histograms.captures(), 0);
    assert_eq!(*taken.lock().unwrap(), 0);
}

#[test]
fn test_warm_up_handed_to_source_once() {
    let (source, taken) = MockSource::new(vec![Ok(frame_with(9)), Ok(frame_with(9))]);
    let warm_ups = source.warm_ups.clone();
    let config = HistogramConfig::builder()
        .iterations(2)
        .warm_up(Duration::from_secs(2))
        .build();
    let mut pipeline = CaptureHistogramPipeline::new(source, config).unwrap();

    pipeline.run().unwrap();
    assert_eq!(*warm_ups.lock().unwrap(), vec![Duration::from_secs(2)]);
    assert_eq!(*taken.lock().unwrap(), 2);
}

#[test]
fn test_zero_warm_up_skipped() {
    let (source, _) = MockSource::new(vec![Ok(frame_with(9))]);
    let warm_ups = source.warm_ups.clone();
    let mut pipeline = CaptureHistogramPipeline::new(source, config(1)).unwrap();

    pipeline.run().unwrap();
    assert!(warm_ups.lock().unwrap().is_empty());
}

#[test]
fn test_flipped_source_requires_flipped_pattern() {
    let (mut source, _) = MockSource::new(Vec::new());
    source.orientation = Some((true, false));
    let result = CaptureHistogramPipeline::new(source, config(1));
    assert!(matches!(
        result,
        Err(PipelineError::OrientationMismatch { hflip: true, vflip: false })
    ));

    let (mut source, _) = MockSource::new(Vec::new());
    source.orientation = Some((true, false));
    let config = HistogramConfig::builder()
        .pattern(MosaicPattern::OV5647_BGGR.hflip())
        .build();
    assert!(CaptureHistogramPipeline::new(source, config).is_ok());
}

#[test]
fn test_set_config_checks_orientation() {
    let (mut source, _) = MockSource::new(Vec::new());
    source.orientation = Some((false, false));
    let mut pipeline = CaptureHistogramPipeline::new(source, config(1)).unwrap();

    let flipped = HistogramConfig::builder()
        .pattern(MosaicPattern::OV5647_BGGR.vflip())
        .build();
    assert!(matches!(
        pipeline.set_config(flipped),
        Err(PipelineError::OrientationMismatch { .. })
    ));
    assert_eq!(pipeline.config().pattern, MosaicPattern::OV5647_BGGR);
}
