//! In-memory RGB frame buffer
//!
//! A [`FrameBuffer`] is a row-major grid of [`Rgb`] pixels over caller
//! supplied storage. The storage can be a fixed array, a `Vec`, or a
//! mutable slice; a borrowed `&[Rgb]` works too for read-only frames passed
//! to [`Display::display_frame`](crate::Display::display_frame).
//!
//! ## Example
//!
//! ```
//! use hx8357::{FrameBuffer, Rgb};
//!
//! let mut frame = match FrameBuffer::new(4, 2, [Rgb::BLACK; 8]) {
//!     Ok(frame) => frame,
//!     Err(_) => return,
//! };
//! frame.set_pixel(3, 1, Rgb::RED);
//! assert_eq!(frame.pixel(3, 1), Some(Rgb::RED));
//! assert_eq!(frame.pixel(4, 1), None);
//! ```

use crate::color::Rgb;
use crate::config::Dimensions;
use crate::error::BuilderError;

/// Row-major grid of RGB pixels
#[derive(Clone, Debug)]
pub struct FrameBuffer<B> {
    width: u16,
    height: u16,
    pixels: B,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[Rgb]>,
{
    /// Wrap `pixels` as a `width` x `height` grid
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidDimensions` if width or height is zero
    /// - `BuilderError::BufferSizeMismatch` if `pixels` does not hold exactly
    ///   `width * height` pixels
    pub fn new(width: u16, height: u16, pixels: B) -> Result<Self, BuilderError> {
        let dims = Dimensions::new(width, height)?;
        let required = dims.pixel_count();
        let provided = pixels.as_ref().len();
        if provided != required {
            return Err(BuilderError::BufferSizeMismatch { required, provided });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Width and height as [`Dimensions`]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Rgb] {
        self.pixels.as_ref()
    }

    /// Pixel at (x, y), or `None` outside the grid
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels.as_ref()[i])
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> core::slice::ChunksExact<'_, Rgb> {
        self.pixels.as_ref().chunks_exact(self.width as usize)
    }

    /// Give back the underlying storage
    pub fn into_inner(self) -> B {
        self.pixels
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[Rgb]> + AsMut<[Rgb]>,
{
    /// Mutable access to all pixels, row-major
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        self.pixels.as_mut()
    }

    /// Set the pixel at (x, y); coordinates outside the grid are ignored
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels.as_mut()[i] = color;
        }
    }

    /// Fill the whole grid with one color
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.as_mut().fill(color);
    }

    /// Fill the rectangle at (x, y) of size w x h, clipped to the grid
    #[allow(clippy::many_single_char_names)]
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width) as usize;
        let y_end = y.saturating_add(h).min(self.height) as usize;
        let width = self.width as usize;
        let pixels = self.pixels.as_mut();
        for row in (y as usize)..y_end {
            let start = row * width;
            if (x as usize) < x_end {
                pixels[start + x as usize..start + x_end].fill(color);
            }
        }
    }
}
