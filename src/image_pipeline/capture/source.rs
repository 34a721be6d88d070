use std::time::Duration;

use crate::image_pipeline::common::error::Result;

pub trait CaptureSource {
    /// Takes one capture and returns the complete stream.
    fn capture(&mut self) -> Result<Vec<u8>>;

    /// Lets the sensor settle for `duration` before the first capture.
    ///
    /// Sources that keep the camera open can simply wait; sources that open
    /// it per capture must apply the delay to every shot instead.
    fn warm_up(&mut self, duration: Duration) -> Result<()> {
        std::thread::sleep(duration);
        Ok(())
    }

    /// `(hflip, vflip)` applied to the frames, when the source controls it.
    fn orientation(&self) -> Option<(bool, bool)> {
        None
    }
}
