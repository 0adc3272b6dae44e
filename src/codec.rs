//! RGB888 to RGB565 pixel codec
//!
//! Converts 24-bit [`Rgb`] pixels into the big-endian 16-bit stream the
//! controller expects after a RAM write command. Each pixel becomes two
//! bytes:
//!
//! | Byte | Bits                              |
//! |------|-----------------------------------|
//! | high | `(r & 0xF8) \| (g >> 5)`          |
//! | low  | `((g & 0x1C) << 3) \| (b >> 3)`   |
//!
//! All functions here are pure and can be called from any context.
//!
//! ## Example
//!
//! ```
//! use hx8357::{codec, Rgb};
//!
//! let pixels = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)];
//! let mut out = [0u8; 4];
//! let written = codec::encode_into(&pixels, &mut out);
//!
//! assert_eq!(written, 4);
//! assert_eq!(out, [0xF8, 0x00, 0x07, 0xE0]);
//! ```

use crate::color::Rgb;

/// Bytes per encoded pixel
pub const BYTES_PER_PIXEL: usize = 2;

/// Encode a single pixel as `[high, low]`
#[inline]
pub const fn encode_pixel(pixel: Rgb) -> [u8; 2] {
    [
        (pixel.r & 0xF8) | (pixel.g >> 5),
        ((pixel.g & 0x1C) << 3) | (pixel.b >> 3),
    ]
}

/// Length in bytes of the encoded form of `pixels` pixels
pub const fn encoded_len(pixels: usize) -> usize {
    pixels * BYTES_PER_PIXEL
}

/// Encode pixels into `out`, returning the number of bytes written
///
/// Only whole pixels are written. If `out` is too short for all of
/// `pixels`, encoding stops at the last pixel that fits; a trailing odd
/// byte in `out` is left untouched.
pub fn encode_into(pixels: &[Rgb], out: &mut [u8]) -> usize {
    let mut written = 0;
    for (pixel, slot) in pixels.iter().zip(out.chunks_exact_mut(BYTES_PER_PIXEL)) {
        slot.copy_from_slice(&encode_pixel(*pixel));
        written += BYTES_PER_PIXEL;
    }
    written
}

/// Lazily encode pixels as a byte stream
pub fn encode(pixels: &[Rgb]) -> impl Iterator<Item = u8> + '_ {
    pixels.iter().flat_map(|pixel| encode_pixel(*pixel))
}

/// Encode pixels into a freshly allocated buffer
#[cfg(feature = "alloc")]
pub fn encode_to_vec(pixels: &[Rgb]) -> alloc::vec::Vec<u8> {
    let mut out = alloc::vec![0u8; encoded_len(pixels.len())];
    encode_into(pixels, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn reference(r: u8, g: u8, b: u8) -> [u8; 2] {
        [(r & 0xF8) | (g >> 5), ((g & 0x1C) << 3) | (b >> 3)]
    }

    #[test]
    fn test_encode_red_green_pair() {
        let pixels = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)];
        let bytes: Vec<u8> = encode(&pixels).collect();
        assert_eq!(bytes, [0xF8, 0x00, 0x07, 0xE0]);
    }

    #[test]
    fn test_encode_pixel_matches_rgb565_word() {
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                let pixel = Rgb::new(r, g, r ^ g);
                let word = pixel.to_rgb565();
                assert_eq!(encode_pixel(pixel), word.to_be_bytes());
            }
        }
    }

    #[test]
    fn test_encode_pixel_bit_layout_all_components() {
        // Every value of every channel, with the other two held at a few levels
        for level in [0u8, 0x55, 0xAA, 0xFF] {
            for v in 0..=255u8 {
                assert_eq!(encode_pixel(Rgb::new(v, level, level)), reference(v, level, level));
                assert_eq!(encode_pixel(Rgb::new(level, v, level)), reference(level, v, level));
                assert_eq!(encode_pixel(Rgb::new(level, level, v)), reference(level, level, v));
            }
        }
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(320 * 480), 307_200);
    }

    #[test]
    fn test_encode_into_stops_at_last_whole_pixel() {
        let pixels = [Rgb::WHITE; 3];
        let mut out = [0u8; 5];
        let written = encode_into(&pixels, &mut out);
        assert_eq!(written, 4);
        assert_eq!(out, [0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_encode_into_short_input() {
        let pixels = [Rgb::BLUE];
        let mut out = [0xAAu8; 4];
        let written = encode_into(&pixels, &mut out);
        assert_eq!(written, 2);
        assert_eq!(out, [0x00, 0x1F, 0xAA, 0xAA]);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]).count(), 0);
        assert_eq!(encode_into(&[], &mut [0u8; 4]), 0);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_encode_to_vec() {
        let pixels = [Rgb::new(10, 20, 30); 4];
        let bytes = encode_to_vec(&pixels);
        assert_eq!(bytes.len(), 8);
        assert!(bytes.chunks(2).all(|c| c == encode_pixel(Rgb::new(10, 20, 30))));
    }
}
