//! Shared 4-level domain used by every metric strip.
//!
//! Level 0 is the darkest shade (highest power / fastest), level 3 the lightest
//! (lowest power / slowest). CPU decisions already live in this domain; the
//! binary MEM and OFFLOAD flags are lifted onto it so all three rows share one
//! legend.

use plotters::style::RGBColor;

/// Number of levels in the shared domain.
pub const LEVEL_COUNT: usize = 4;

/// Ordinal in `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    pub const DARKEST: Level = Level(0);
    pub const LIGHTEST: Level = Level(3);

    /// Returns `None` when `raw` falls outside `0..=3`.
    pub fn new(raw: u32) -> Option<Level> {
        if (raw as usize) < LEVEL_COUNT {
            Some(Level(raw as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// CPU power level passes through unchanged.
pub fn cpu_level(cpu_idx: u32) -> Option<Level> {
    Level::new(cpu_idx)
}

/// Binary flag → level: 0 stays darkest, anything else is lightest.
/// Used for both MEM and OFFLOAD.
pub fn binary_level(flag: u32) -> Level {
    if flag == 0 { Level::DARKEST } else { Level::LIGHTEST }
}

/// One shade per level.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    shades: [RGBColor; LEVEL_COUNT],
}

impl Palette {
    pub fn new(shades: [RGBColor; LEVEL_COUNT]) -> Self {
        Self { shades }
    }

    /// `#000000`, `#555555`, `#AAAAAA`, `#DDDDDD`.
    pub fn grayscale() -> Self {
        Self::new([
            RGBColor(0x00, 0x00, 0x00),
            RGBColor(0x55, 0x55, 0x55),
            RGBColor(0xAA, 0xAA, 0xAA),
            RGBColor(0xDD, 0xDD, 0xDD),
        ])
    }

    pub fn shade(&self, level: Level) -> RGBColor {
        self.shades[level.index()]
    }

    /// CSS hex string, used by the HTML legend.
    pub fn hex(&self, level: Level) -> String {
        let RGBColor(r, g, b) = self.shade(level);
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::grayscale()
    }
}
