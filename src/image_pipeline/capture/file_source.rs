use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::image_pipeline::capture::source::CaptureSource;
use crate::image_pipeline::common::error::{PipelineError, Result};

/// Replays saved capture streams, cycling back to the first once exhausted.
#[derive(Debug, Clone)]
pub struct FileCaptureSource {
    paths: Vec<PathBuf>,
    next: usize,
}

impl FileCaptureSource {
    pub fn new(paths: Vec<PathBuf>) -> Result<Self> {
        if paths.is_empty() {
            return Err(PipelineError::CaptureError(
                "no capture files to replay".to_string(),
            ));
        }
        Ok(Self { paths, next: 0 })
    }

    /// Every regular file in `dir`, in name order.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| {
            PipelineError::InputReadError(format!("{}: {}", dir.display(), e))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        debug!("Replaying {} captures from {}", paths.len(), dir.display());
        Self::new(paths)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl CaptureSource for FileCaptureSource {
    /// Saved captures have no sensor to settle.
    fn warm_up(&mut self, _duration: Duration) -> Result<()> {
        Ok(())
    }

    fn capture(&mut self) -> Result<Vec<u8>> {
        let path = &self.paths[self.next];
        self.next = (self.next + 1) % self.paths.len();

        debug!("Reading capture {}", path.display());
        std::fs::read(path)
            .map_err(|e| PipelineError::InputReadError(format!("{}: {}", path.display(), e)))
    }
}
