//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Bad configuration, rejected before any hardware traffic
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use hx8357::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Zero-sized panel
//! let result = Dimensions::new(0, 480);
//! assert!(result.is_err());
//! ```

use crate::display::PanelState;
use crate::interface::DisplayInterface;

/// Largest transfer the driver will hand to the interface in one write
pub const MAX_CHUNK_SIZE: usize = 4096;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// None of these leave the driver in an inconsistent state; after an
/// [`Error::Interface`] the panel's address window is stale, which the
/// next [`display`](crate::Display::display) call re-issues anyway.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Address window is inverted or outside the panel
    ///
    /// A valid window satisfies `x0 <= x1 < width` and `y0 <= y1 < height`.
    InvalidWindow {
        /// First column
        x0: u16,
        /// First row
        y0: u16,
        /// Last column (inclusive)
        x1: u16,
        /// Last row (inclusive)
        y1: u16,
    },
    /// Frame dimensions differ from the panel
    DimensionMismatch {
        /// Panel dimensions as (width, height)
        expected: (u16, u16),
        /// Frame dimensions as (width, height)
        provided: (u16, u16),
    },
    /// Operation requires [`begin`](crate::Display::begin) to have completed
    NotReady {
        /// State the panel was in
        state: PanelState,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidWindow { x0, y0, x1, y1 } => {
                write!(f, "Invalid address window: ({x0}, {y0})-({x1}, {y1})")
            }
            Self::DimensionMismatch { expected, provided } => write!(
                f,
                "Frame is {}x{}, panel is {}x{}",
                provided.0, provided.1, expected.0, expected.1
            ),
            Self::NotReady { state } => {
                write!(f, "Panel not ready (state: {state:?}), call begin() first")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Width or height is zero
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
    /// Dimensions exceed the controller's frame memory in either orientation
    DimensionsExceedController {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
        /// Controller native width
        max_width: u16,
        /// Controller native height
        max_height: u16,
    },
    /// Chunk size must be even and within `2..=MAX_CHUNK_SIZE`
    InvalidChunkSize(usize),
    /// Pixel storage length differs from width * height
    BufferSizeMismatch {
        /// Required number of pixels
        required: usize,
        /// Provided number of pixels
        provided: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions {width}x{height} (must be non-zero)")
            }
            Self::DimensionsExceedController {
                width,
                height,
                max_width,
                max_height,
            } => write!(
                f,
                "Dimensions {width}x{height} exceed controller frame memory {max_width}x{max_height}"
            ),
            Self::InvalidChunkSize(size) => write!(
                f,
                "Invalid chunk size {size} (must be even, 2..={MAX_CHUNK_SIZE})"
            ),
            Self::BufferSizeMismatch { required, provided } => write!(
                f,
                "Buffer holds {provided} pixels, {required} required"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_builder_error_display() {
        let err = BuilderError::InvalidDimensions {
            width: 0,
            height: 480,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions 0x480 (must be non-zero)"
        );

        let err = BuilderError::BufferSizeMismatch {
            required: 6,
            provided: 5,
        };
        assert_eq!(err.to_string(), "Buffer holds 5 pixels, 6 required");
    }

    #[test]
    fn test_chunk_size_error_mentions_limit() {
        let msg = BuilderError::InvalidChunkSize(3).to_string();
        assert!(msg.contains("4096"));
    }
}
