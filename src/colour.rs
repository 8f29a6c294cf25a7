use crate::error::OverlayError;
use derive_more::Display;
use std::str::FromStr;

/// An 8-bit RGB colour used to fill text.
///
/// Colours are written and parsed as `#RRGGBB` strings; [Display] always emits
/// uppercase, zero-padded hex digits.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Display)]
#[display("#{r:02X}{g:02X}{b:02X}")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour; r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Parse a `#RRGGBB` string. Exactly six hex digits must follow the `#`,
    /// either case is accepted.
    pub fn from_hex(hex: &str) -> Result<Colour, OverlayError> {
        let invalid = || OverlayError::InvalidColour(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Colour {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
        })
    }

    /// The colour as an [image::Rgb] pixel
    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl FromStr for Colour {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour { r, g, b }
    }
}

impl From<Colour> for (u8, u8, u8) {
    fn from(c: Colour) -> Self {
        (c.r, c.g, c.b)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_rgb_bytes(0, 0, 0);
    pub const WHITE: Colour = Colour::new_rgb_bytes(255, 255, 255);
    pub const RED: Colour = Colour::new_rgb_bytes(255, 0, 0);
    pub const BLUE: Colour = Colour::new_rgb_bytes(0, 0, 255);
}
