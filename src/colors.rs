//! RGBA colors.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the clear color of every frame.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Flat fill used for triangles unless configured otherwise.
    pub const FILL: Self = Self::rgb(0, 128, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Pack into a `0xAARRGGBB` word.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_as_argb() {
        assert_eq!(Color::BLACK.to_argb(), 0xFF00_0000);
        assert_eq!(Color::FILL.to_argb(), 0xFF00_80FF);
        assert_eq!(Color::new(0x12, 0x34, 0x56, 0x78).to_argb(), 0x7812_3456);
    }

    #[test]
    fn unpacks_argb() {
        assert_eq!(Color::from_argb(0x7812_3456), Color::new(0x12, 0x34, 0x56, 0x78));
        assert_eq!(Color::from_argb(Color::FILL.to_argb()), Color::FILL);
    }
}
