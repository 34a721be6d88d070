use std::io::Write;
use std::path::PathBuf;

use picam_bayer_rs::image_pipeline::{
    CaptureHistogramPipeline, CaptureSource, FileCaptureSource, HistogramConfig, HistogramSet,
    RaspistillCapture,
};
use picam_bayer_rs::logger;

use tracing::{error, info};

fn run<S: CaptureSource>(source: S, config: HistogramConfig) -> anyhow::Result<HistogramSet> {
    let mut pipeline = CaptureHistogramPipeline::new(source, config)?;
    Ok(pipeline.run()?)
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting picam_bayer...");

    // A directory of saved raw-mode captures replays them instead of using the camera.
    let replay_dir = std::env::args_os().nth(1).map(PathBuf::from);

    let config = HistogramConfig::builder()
        .iterations(10)
        .build();

    info!("Iterations: {}", config.iterations);
    for point in &config.sample_points {
        info!("Sampling row {} column {} ({})", point.row, point.column, point.channel);
    }

    let result = match replay_dir {
        Some(dir) => {
            info!("Replaying captures from {}", dir.display());
            let source = FileCaptureSource::from_dir(&dir)?;
            run(source, config)
        }
        None => run(RaspistillCapture::new(), config),
    };

    let histograms = match result {
        Ok(histograms) => histograms,
        Err(e) => {
            error!("Histogram run failed: {}", e);
            return Err(e);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    histograms.write_csv(&mut out)?;
    out.flush()?;

    Ok(())
}
