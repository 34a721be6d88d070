use std::fmt;

/// Colour planes of a decoded capture, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// The 2x2 colour filter tile, indexed by `[row % 2][column % 2]`.
///
/// The table follows the physical orientation of the sensor. A capture taken
/// with a horizontal or vertical flip needs the matching flipped pattern;
/// nothing here detects the orientation from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicPattern {
    tile: [[Channel; 2]; 2],
}

impl MosaicPattern {
    /// OV5647 in its default orientation (BGGR read bottom-up):
    ///
    /// ```text
    /// GBGBGB...
    /// RGRGRG...
    /// ```
    pub const OV5647_BGGR: MosaicPattern = MosaicPattern {
        tile: [
            [Channel::Green, Channel::Blue],
            [Channel::Red, Channel::Green],
        ],
    };

    pub const fn new(tile: [[Channel; 2]; 2]) -> Self {
        Self { tile }
    }

    pub fn channel_at(&self, row: usize, column: usize) -> Channel {
        self.tile[row & 1][column & 1]
    }

    /// Pattern for a capture mirrored left to right.
    pub fn hflip(self) -> Self {
        let [[a, b], [c, d]] = self.tile;
        Self::new([[b, a], [d, c]])
    }

    /// Pattern for a capture mirrored top to bottom.
    pub fn vflip(self) -> Self {
        let [top, bottom] = self.tile;
        Self::new([bottom, top])
    }

    /// Applies the camera's `hflip`/`vflip` settings.
    pub fn oriented(self, hflip: bool, vflip: bool) -> Self {
        let pattern = if hflip { self.hflip() } else { self };
        if vflip { pattern.vflip() } else { pattern }
    }
}

impl Default for MosaicPattern {
    fn default() -> Self {
        Self::OV5647_BGGR
    }
}
