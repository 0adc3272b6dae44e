//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_CHUNK_SIZE};
use crate::init::{HX8357D_INIT, ILI9341_INIT, InitStep};

/// Default transfer size for a single SPI write
///
/// Many SPI drivers (spidev in particular) cap a single transfer at 4 KiB.
pub const DEFAULT_CHUNK_SIZE: usize = MAX_CHUNK_SIZE;

/// Default desired SPI clock in Hz
pub const DEFAULT_SPI_FREQUENCY_HZ: u32 = 64_000_000;

/// Reduced SPI clock in Hz for boards whose wiring cannot sustain the default
pub const REDUCED_SPI_FREQUENCY_HZ: u32 = 16_000_000;

/// Display dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns
    pub width: u16,
    /// Number of rows
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if width or height is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size in bytes of one encoded RGB565 frame
    pub fn frame_bytes(&self) -> usize {
        crate::codec::encoded_len(self.pixel_count())
    }
}

/// Supported display controllers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Controller {
    /// Himax HX8357-D, 320x480
    #[default]
    Hx8357d,
    /// Ilitek ILI9341, 240x320
    Ili9341,
}

impl Controller {
    /// Native (width, height) of the controller's frame memory
    pub const fn native_size(self) -> (u16, u16) {
        match self {
            Self::Hx8357d => (320, 480),
            Self::Ili9341 => (240, 320),
        }
    }

    /// Native dimensions of the controller's frame memory
    pub fn native_dimensions(self) -> Dimensions {
        let (width, height) = self.native_size();
        Dimensions { width, height }
    }

    /// Vendor initialization table for the controller
    pub const fn init_sequence(self) -> &'static [InitStep] {
        match self {
            Self::Hx8357d => HX8357D_INIT,
            Self::Ili9341 => ILI9341_INIT,
        }
    }

    /// Whether `dims` fit the frame memory in portrait or landscape
    pub fn fits(self, dims: Dimensions) -> bool {
        let (w, h) = self.native_size();
        (dims.width <= w && dims.height <= h) || (dims.width <= h && dims.height <= w)
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Display controller
    pub controller: Controller,
    /// Initialization table replayed by `begin()`
    pub init_sequence: &'static [InitStep],
    /// Maximum bytes per SPI write
    pub chunk_size: usize,
    /// SPI clock the bus should be configured for
    ///
    /// The driver does not program the bus; platform code reads this when
    /// building the `SpiDevice`.
    pub spi_frequency_hz: u32,
}

impl Config {
    /// Check the invariants [`Builder::build`] enforces
    ///
    /// The fields are public, so a `Config` can be built by hand;
    /// [`Display::new`](crate::Display::new) runs this again.
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidDimensions` if width or height is zero
    /// - `BuilderError::DimensionsExceedController` if they do not fit the controller
    /// - `BuilderError::InvalidChunkSize` if the chunk size is odd, zero or above
    ///   [`MAX_CHUNK_SIZE`]
    pub fn validate(&self) -> Result<(), BuilderError> {
        let Dimensions { width, height } = self.dimensions;
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if !self.controller.fits(self.dimensions) {
            let (max_width, max_height) = self.controller.native_size();
            return Err(BuilderError::DimensionsExceedController {
                width,
                height,
                max_width,
                max_height,
            });
        }
        if self.chunk_size < 2 || self.chunk_size > MAX_CHUNK_SIZE || self.chunk_size % 2 != 0 {
            return Err(BuilderError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use hx8357::{Builder, Controller, Dimensions};
///
/// let dims = match Dimensions::new(240, 320) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .controller(Controller::Ili9341)
///     .dimensions(dims)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.chunk_size, 4096);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display controller
    controller: Controller,
    /// Initialization table override
    init_sequence: Option<&'static [InitStep]>,
    /// Maximum bytes per SPI write
    chunk_size: usize,
    /// Desired SPI clock
    spi_frequency_hz: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            controller: Controller::Hx8357d,
            init_sequence: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            spi_frequency_hz: DEFAULT_SPI_FREQUENCY_HZ,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the display controller
    pub fn controller(mut self, controller: Controller) -> Self {
        self.controller = controller;
        self
    }

    /// Replace the controller's initialization table
    ///
    /// For panels that need a different power or gamma setup than the
    /// stock table.
    pub fn init_sequence(mut self, steps: &'static [InitStep]) -> Self {
        self.init_sequence = Some(steps);
        self
    }

    /// Set the maximum number of bytes per SPI write
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set the SPI clock the platform should configure
    pub fn spi_frequency_hz(mut self, hz: u32) -> Self {
        self.spi_frequency_hz = hz;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::MissingDimensions` if dimensions were not set
    /// - `BuilderError::DimensionsExceedController` if they do not fit the controller
    /// - `BuilderError::InvalidChunkSize` if the chunk size is odd, zero or above
    ///   [`MAX_CHUNK_SIZE`]
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let config = Config {
            dimensions,
            controller: self.controller,
            init_sequence: self
                .init_sequence
                .unwrap_or_else(|| self.controller.init_sequence()),
            chunk_size: self.chunk_size,
            spi_frequency_hz: self.spi_frequency_hz,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command;

    #[test]
    fn test_dimensions_reject_zero() {
        assert_eq!(
            Dimensions::new(0, 480),
            Err(BuilderError::InvalidDimensions {
                width: 0,
                height: 480
            })
        );
        assert!(Dimensions::new(320, 0).is_err());
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_dimensions_sizes() {
        let dims = Dimensions::new(320, 480).unwrap();
        assert_eq!(dims.pixel_count(), 153_600);
        assert_eq!(dims.frame_bytes(), 307_200);
    }

    #[test]
    fn test_build_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_build_defaults() {
        let config = Builder::new()
            .dimensions(Dimensions::new(320, 480).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.controller, Controller::Hx8357d);
        assert_eq!(config.init_sequence, HX8357D_INIT);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.spi_frequency_hz, DEFAULT_SPI_FREQUENCY_HZ);
    }

    #[test]
    fn test_controller_selects_table() {
        let config = Builder::new()
            .controller(Controller::Ili9341)
            .dimensions(Dimensions::new(240, 320).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.init_sequence, ILI9341_INIT);
    }

    #[test]
    fn test_init_sequence_override() {
        static CUSTOM: &[InitStep] = &[InitStep::with_delay(command::SLPOUT, &[], 10)];
        let config = Builder::new()
            .dimensions(Dimensions::new(320, 480).unwrap())
            .init_sequence(CUSTOM)
            .build()
            .unwrap();
        assert_eq!(config.init_sequence, CUSTOM);
    }

    #[test]
    fn test_landscape_dimensions_fit() {
        let result = Builder::new()
            .dimensions(Dimensions::new(480, 320).unwrap())
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let result = Builder::new()
            .controller(Controller::Ili9341)
            .dimensions(Dimensions::new(320, 480).unwrap())
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::DimensionsExceedController {
                max_width: 240,
                max_height: 320,
                ..
            })
        ));
    }

    #[test]
    fn test_chunk_size_validation() {
        let dims = Dimensions::new(320, 480).unwrap();
        for bad in [0, 1, 3, MAX_CHUNK_SIZE + 2] {
            let result = Builder::new().dimensions(dims).chunk_size(bad).build();
            assert!(matches!(result, Err(BuilderError::InvalidChunkSize(size)) if size == bad));
        }
        assert!(Builder::new().dimensions(dims).chunk_size(2).build().is_ok());
        assert!(Builder::new().dimensions(dims).chunk_size(64).build().is_ok());
    }

    #[test]
    fn test_validate_hand_built_config() {
        let built = Builder::new()
            .dimensions(Dimensions::new(320, 480).unwrap())
            .build()
            .unwrap();
        assert_eq!(built.validate(), Ok(()));

        let zero = Config {
            dimensions: Dimensions {
                width: 0,
                height: 480,
            },
            ..built.clone()
        };
        assert!(matches!(
            zero.validate(),
            Err(BuilderError::InvalidDimensions { width: 0, .. })
        ));

        let odd = Config {
            chunk_size: 7,
            ..built
        };
        assert_eq!(odd.validate(), Err(BuilderError::InvalidChunkSize(7)));
    }
}
