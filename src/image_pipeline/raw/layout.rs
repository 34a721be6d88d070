//! Byte layout of the raw block the OV5647 firmware appends to a JPEG capture.
//!
//! ```text
//! | JPEG preview (ignored) | "BRCM" + metadata (32768) | 1952 rows x 3264 bytes |
//!                          ^------------- RAW_FRAME_SIZE ------------------------^
//! ```
//!
//! Each kept row carries 648 groups of five bytes: four high bytes followed by
//! one byte holding their low bit pairs (`AABBCCDD`).

/// Size of the trailing raw block in a capture stream.
pub const RAW_FRAME_SIZE: usize = 6_404_096;

/// Marker at the very start of the raw block.
pub const FRAME_MARKER: &[u8; 4] = b"BRCM";

/// Metadata region at the start of the raw block, marker included.
pub const HEADER_SIZE: usize = 32_768;

/// Rows stored in the payload. The sensor's 1944 rows are rounded up to 16.
pub const STORED_ROWS: usize = 1952;

/// Bytes per stored row.
pub const ROW_STRIDE: usize = 3264;

/// Rows carrying sensor data.
pub const ACTIVE_ROWS: usize = 1944;

/// Leading bytes of a row carrying sensor data. The remaining 24 are padding.
pub const ROW_PAYLOAD: usize = 3240;

/// Bytes per packed group.
pub const GROUP_BYTES: usize = 5;

/// Samples per packed group.
pub const GROUP_SAMPLES: usize = 4;

/// Decoded samples per row.
pub const ACTIVE_COLUMNS: usize = ROW_PAYLOAD / GROUP_BYTES * GROUP_SAMPLES;

/// Bits of precision in a decoded sample.
pub const SAMPLE_BITS: u32 = 10;

/// Largest value a decoded sample can take.
pub const MAX_SAMPLE: u16 = (1 << SAMPLE_BITS) - 1;

const _: () = assert!(HEADER_SIZE + STORED_ROWS * ROW_STRIDE == RAW_FRAME_SIZE);
const _: () = assert!(ROW_PAYLOAD % GROUP_BYTES == 0);
const _: () = assert!(ACTIVE_COLUMNS == 2592);
