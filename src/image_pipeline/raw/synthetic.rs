//! Builds BRCM raw blocks from known sample values.
//!
//! Used to exercise the decoder without a camera attached.

use crate::image_pipeline::raw::layout::{
    ACTIVE_COLUMNS, FRAME_MARKER, GROUP_BYTES, GROUP_SAMPLES, HEADER_SIZE, MAX_SAMPLE,
    RAW_FRAME_SIZE, ROW_STRIDE, STORED_ROWS,
};

/// Packs four 10-bit samples into the five-byte on-sensor representation.
pub fn pack_group(samples: [u16; GROUP_SAMPLES]) -> [u8; GROUP_BYTES] {
    let mut group = [0u8; GROUP_BYTES];
    for (position, &sample) in samples.iter().enumerate() {
        let sample = sample & MAX_SAMPLE;
        group[position] = (sample >> 2) as u8;
        group[GROUP_SAMPLES] |= ((sample & 0b11) as u8) << ((GROUP_SAMPLES - 1 - position) * 2);
    }
    group
}

/// A zeroed raw block with a valid marker, editable sample by sample.
#[derive(Debug, Clone)]
pub struct SyntheticFrame {
    bytes: Vec<u8>,
}

impl Default for SyntheticFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticFrame {
    pub fn new() -> Self {
        let mut bytes = vec![0u8; RAW_FRAME_SIZE];
        bytes[..FRAME_MARKER.len()].copy_from_slice(FRAME_MARKER);
        Self { bytes }
    }

    /// Writes a 10-bit `value` at a decoded (row, column) site, keeping the
    /// other three samples of its group intact.
    pub fn set_sample(&mut self, row: usize, column: usize, value: u16) -> &mut Self {
        assert!(column < ACTIVE_COLUMNS, "column {column} outside the active area");
        let group_start = self.row_offset(row) + column / GROUP_SAMPLES * GROUP_BYTES;
        let group = &mut self.bytes[group_start..group_start + GROUP_BYTES];

        let mut samples = [0u16; GROUP_SAMPLES];
        for (position, sample) in samples.iter_mut().enumerate() {
            let low = (group[GROUP_SAMPLES] >> ((GROUP_SAMPLES - 1 - position) * 2)) & 0b11;
            *sample = (u16::from(group[position]) << 2) | u16::from(low);
        }
        samples[column % GROUP_SAMPLES] = value;

        group.copy_from_slice(&pack_group(samples));
        self
    }

    /// Writes a raw byte at (stored row, byte offset within the row).
    /// Reaches the padding rows and padding bytes the decoder discards.
    pub fn set_row_byte(&mut self, row: usize, offset: usize, byte: u8) -> &mut Self {
        assert!(offset < ROW_STRIDE, "offset {offset} outside the row stride");
        let index = self.row_offset(row) + offset;
        self.bytes[index] = byte;
        self
    }

    /// Writes a raw byte inside the metadata header, after the marker.
    pub fn set_header_byte(&mut self, offset: usize, byte: u8) -> &mut Self {
        assert!(
            (FRAME_MARKER.len()..HEADER_SIZE).contains(&offset),
            "offset {offset} outside the metadata header"
        );
        self.bytes[offset] = byte;
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The raw block preceded by `preview`, the way the firmware emits it.
    pub fn into_capture(self, preview: &[u8]) -> Vec<u8> {
        let mut capture = Vec::with_capacity(preview.len() + self.bytes.len());
        capture.extend_from_slice(preview);
        capture.extend_from_slice(&self.bytes);
        capture
    }

    fn row_offset(&self, row: usize) -> usize {
        assert!(row < STORED_ROWS, "row {row} outside the stored rows");
        HEADER_SIZE + row * ROW_STRIDE
    }
}
