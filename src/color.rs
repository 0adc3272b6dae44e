//! Pixel color types
//!
//! The panel is driven in 16-bit RGB565 mode (COLMOD 0x55), but the frame
//! buffer holds full 24-bit [`Rgb`] pixels so that drawing code never has to
//! think about the wire format. Conversion happens once per frame in
//! [`codec`](crate::codec).
//!
//! ## Example
//!
//! ```
//! use hx8357::{color, Rgb};
//!
//! let orange = Rgb::new(255, 128, 0);
//! assert_eq!(orange.to_rgb565(), 0xFC00);
//!
//! // Named colors are RGB565 words as the controller sees them
//! assert_eq!(Rgb::RED.to_rgb565(), color::RED);
//! ```

/// RGB565 black
pub const BLACK: u16 = 0x0000;
/// RGB565 blue
pub const BLUE: u16 = 0x001F;
/// RGB565 red
pub const RED: u16 = 0xF800;
/// RGB565 green
pub const GREEN: u16 = 0x07E0;
/// RGB565 cyan
pub const CYAN: u16 = 0x07FF;
/// RGB565 magenta
pub const MAGENTA: u16 = 0xF81F;
/// RGB565 yellow
pub const YELLOW: u16 = 0xFFE0;
/// RGB565 white
pub const WHITE: u16 = 0xFFFF;

/// A 24-bit RGB pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red (255, 0, 0)
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green (0, 255, 0)
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue (0, 0, 255)
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Cyan (0, 255, 255)
    pub const CYAN: Self = Self::new(0, 255, 255);
    /// Magenta (255, 0, 255)
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    /// Yellow (255, 255, 0)
    pub const YELLOW: Self = Self::new(255, 255, 0);

    /// Create a pixel from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from a packed `0xRRGGBB` word
    ///
    /// Bits above the low 24 are ignored.
    ///
    /// ```
    /// use hx8357::Rgb;
    ///
    /// assert_eq!(Rgb::from_u32(0x0A141E), Rgb::new(10, 20, 30));
    /// assert_eq!(Rgb::from_u32(0xFF_0A141E), Rgb::new(10, 20, 30));
    /// ```
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Convert to a 16-bit RGB565 word
    ///
    /// Components are truncated, not rounded: the low 3 bits of red and
    /// blue and the low 2 bits of green are dropped.
    pub const fn to_rgb565(self) -> u16 {
        ((self.r as u16 & 0xF8) << 8) | ((self.g as u16 & 0xFC) << 3) | (self.b as u16 >> 3)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb888> for Rgb {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb888) -> Self {
        use embedded_graphics_core::pixelcolor::RgbColor;
        Self::new(color.r(), color.g(), color.b())
    }
}

#[cfg(feature = "graphics")]
impl From<Rgb> for embedded_graphics_core::pixelcolor::Rgb888 {
    fn from(color: Rgb) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}
