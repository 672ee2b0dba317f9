//! Native panel colors
//!
//! The frame buffer holds 4 bits per pixel, two pixels per byte, left pixel in
//! the high nibble. Each nibble is one of the panel's palette indices below.

/// Palette index understood by the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// Black ink
    Black = 0x0,
    /// White ink
    #[default]
    White = 0x1,
    /// Green ink
    Green = 0x2,
    /// Blue ink
    Blue = 0x3,
    /// Red ink
    Red = 0x4,
    /// Yellow ink
    Yellow = 0x5,
    /// Orange ink
    Orange = 0x6,
    /// Leaves the particles unpowered ("clean" waveform)
    Clean = 0x7,
}

impl Color {
    /// Palette index as sent on the wire
    pub const fn nibble(self) -> u8 {
        self as u8
    }

    /// Pack two horizontally adjacent pixels into one frame buffer byte
    pub const fn pack(left: Color, right: Color) -> u8 {
        (left.nibble() << 4) | right.nibble()
    }

    /// Byte with both pixels set to `self`
    pub const fn byte(self) -> u8 {
        Self::pack(self, self)
    }

    /// Palette entry for a nibble; only the low 3 bits are significant
    pub const fn from_nibble(value: u8) -> Color {
        match value & 0x07 {
            0x0 => Color::Black,
            0x1 => Color::White,
            0x2 => Color::Green,
            0x3 => Color::Blue,
            0x4 => Color::Red,
            0x5 => Color::Yellow,
            0x6 => Color::Orange,
            _ => Color::Clean,
        }
    }
}

#[cfg(feature = "graphics")]
mod graphics {
    use super::Color;
    use embedded_graphics_core::pixelcolor::PixelColor;
    use embedded_graphics_core::pixelcolor::raw::{RawData, RawU4};

    impl PixelColor for Color {
        type Raw = RawU4;
    }

    impl From<RawU4> for Color {
        fn from(raw: RawU4) -> Self {
            Color::from_nibble(raw.into_inner())
        }
    }

    impl From<Color> for RawU4 {
        fn from(color: Color) -> Self {
            RawU4::new(color.nibble())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_pixel_in_high_nibble() {
        assert_eq!(Color::pack(Color::Red, Color::Blue), 0x43);
        assert_eq!(Color::pack(Color::Black, Color::White), 0x01);
    }

    #[test]
    fn solid_bytes() {
        assert_eq!(Color::White.byte(), 0x11);
        assert_eq!(Color::Orange.byte(), 0x66);
        assert_eq!(Color::Black.byte(), 0x00);
    }

    #[test]
    fn from_nibble_ignores_high_bit() {
        for value in 0..8u8 {
            assert_eq!(Color::from_nibble(value).nibble(), value);
        }
        assert_eq!(Color::from_nibble(0x0F), Color::Clean);
        assert_eq!(Color::from_nibble(0x09), Color::White);
    }
}
