//! Reader for the BRCM raw block appended by the Raspberry Pi camera firmware.
//!
//! The block sits at the tail of a JPEG capture taken in raw mode. It starts
//! with a "BRCM" marked metadata header and is followed by 10-bit samples
//! packed four to five bytes, with padding rows and padding columns that are
//! dropped here. See [`layout`](super::layout) for the constants.

use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::common::error::{FormatError, Result};
use crate::image_pipeline::raw::layout::{
    ACTIVE_COLUMNS, ACTIVE_ROWS, FRAME_MARKER, GROUP_BYTES, GROUP_SAMPLES, HEADER_SIZE,
    RAW_FRAME_SIZE, ROW_PAYLOAD, ROW_STRIDE, SAMPLE_BITS, STORED_ROWS,
};
use crate::image_pipeline::raw::reader::RawFrameReader;
use crate::image_pipeline::raw::types::RawImageData;

/// Unpacks the OV5647 BRCM raw block into a 2592x1944 mosaic of 10-bit samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrcmReader;

impl BrcmReader {
    /// Extracts and unpacks the raw frame at the tail of `capture`.
    ///
    /// Anything before the last [`RAW_FRAME_SIZE`] bytes (the JPEG preview) is
    /// ignored. Fails without producing output if the capture is too short,
    /// the "BRCM" marker is missing or the payload does not split into rows.
    pub fn unpack_frame(&self, capture: &[u8]) -> std::result::Result<RawImageData, FormatError> {
        let frame = extract_frame(capture)?;

        let payload = &frame[HEADER_SIZE..];
        let expected = STORED_ROWS * ROW_STRIDE;
        if payload.len() != expected {
            return Err(FormatError::Framing {
                actual: payload.len(),
                expected,
            });
        }

        debug!(
            "Unpacking {} of {} stored rows, {} of {} bytes per row",
            ACTIVE_ROWS, STORED_ROWS, ROW_PAYLOAD, ROW_STRIDE
        );

        let mut data = vec![0u16; ACTIVE_ROWS * ACTIVE_COLUMNS];
        data.par_chunks_exact_mut(ACTIVE_COLUMNS)
            .zip(payload[..ACTIVE_ROWS * ROW_STRIDE].par_chunks_exact(ROW_STRIDE))
            .for_each(|(samples, row)| unpack_row(&row[..ROW_PAYLOAD], samples));

        Ok(RawImageData {
            width: ACTIVE_COLUMNS,
            height: ACTIVE_ROWS,
            data,
            bits_per_sample: SAMPLE_BITS,
        })
    }
}

impl RawFrameReader for BrcmReader {
    fn unpack(&self, capture: &[u8]) -> Result<RawImageData> {
        debug!("Decoding BRCM capture, {} bytes", capture.len());
        Ok(self.unpack_frame(capture)?)
    }
}

/// Returns the trailing raw block after checking its marker.
fn extract_frame(capture: &[u8]) -> std::result::Result<&[u8], FormatError> {
    let start = capture
        .len()
        .checked_sub(RAW_FRAME_SIZE)
        .ok_or(FormatError::TooShort {
            actual: capture.len(),
            required: RAW_FRAME_SIZE,
        })?;
    let frame = &capture[start..];

    let mut found = [0u8; 4];
    found.copy_from_slice(&frame[..FRAME_MARKER.len()]);
    if &found != FRAME_MARKER {
        return Err(FormatError::MissingMarker { found });
    }

    Ok(frame)
}

/// Unpacks one row of five-byte groups into `samples`, four per group.
///
/// The fifth byte of a group holds the low bit pairs of the four before it,
/// first sample in bits 7-6 down to the fourth in bits 1-0.
pub(crate) fn unpack_row(packed: &[u8], samples: &mut [u16]) {
    for (group, out) in packed
        .chunks_exact(GROUP_BYTES)
        .zip(samples.chunks_exact_mut(GROUP_SAMPLES))
    {
        // widened like the data bytes, so the field for position p sits (4 - p) pairs up
        let low_bits = u16::from(group[GROUP_SAMPLES]) << 2;
        for (position, sample) in out.iter_mut().enumerate() {
            let high = u16::from(group[position]) << 2;
            *sample = high | ((low_bits >> ((GROUP_SAMPLES - position) * 2)) & 0b11);
        }
    }
}
