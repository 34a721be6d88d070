use std::process::Command;
use std::time::Duration;

use tracing::debug;

use crate::image_pipeline::capture::source::CaptureSource;
use crate::image_pipeline::common::error::{PipelineError, Result};

/// Captures through the `raspistill` tool with raw Bayer data appended.
///
/// Every call runs the tool once and reads the JPEG stream, raw block
/// included, from its stdout. The sensor is opened cold each time, so the
/// warm-up period is spent inside every run via `--timeout`.
#[derive(Debug, Clone)]
pub struct RaspistillCapture {
    program: String,
    /// Time the tool lets the sensor settle before the shot
    shot_delay: Duration,
    hflip: bool,
    vflip: bool,
}

impl Default for RaspistillCapture {
    fn default() -> Self {
        Self {
            program: "raspistill".to_string(),
            shot_delay: Duration::from_secs(2),
            hflip: false,
            vflip: false,
        }
    }
}

impl RaspistillCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn shot_delay(mut self, delay: Duration) -> Self {
        self.shot_delay = delay;
        self
    }

    /// Flips applied by the firmware. The decoder must be given the matching
    /// flipped mosaic pattern.
    pub fn flip(mut self, hflip: bool, vflip: bool) -> Self {
        self.hflip = hflip;
        self.vflip = vflip;
        self
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "--raw".to_string(),
            "--nopreview".to_string(),
            "--timeout".to_string(),
            self.shot_delay.as_millis().max(1).to_string(),
            "--encoding".to_string(),
            "jpg".to_string(),
            "--output".to_string(),
            "-".to_string(),
        ];
        if self.hflip {
            args.push("--hflip".to_string());
        }
        if self.vflip {
            args.push("--vflip".to_string());
        }
        args
    }
}

impl CaptureSource for RaspistillCapture {
    fn warm_up(&mut self, duration: Duration) -> Result<()> {
        debug!("Sensor settles for {:?} before every shot", duration);
        self.shot_delay = duration;
        Ok(())
    }

    fn orientation(&self) -> Option<(bool, bool)> {
        Some((self.hflip, self.vflip))
    }

    fn capture(&mut self) -> Result<Vec<u8>> {
        let args = self.args();
        debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| PipelineError::CaptureError(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(PipelineError::CaptureError(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        debug!("Captured {} bytes", output.stdout.len());
        Ok(output.stdout)
    }
}
