//! HX8357 TFT Display Driver
//!
//! A driver for SPI-attached TFT panels built on the Himax HX8357-D (320x480)
//! and the Ilitek ILI9341 (240x320), both driven in 16-bit RGB565 mode.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Vendor init tables as data, replaceable per panel
//! - Full-frame and address-window updates
//! - Bounded SPI transfers, sized for spidev's 4 KiB limit
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use hx8357::{Builder, Controller, Dimensions, Display, Interface, Rgb};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let dims = match Dimensions::new(240, 320) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new()
//!     .controller(Controller::Ili9341)
//!     .dimensions(dims)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(interface, config, vec![Rgb::BLACK; dims.pixel_count()]) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.begin(&mut delay);
//! display.clear(Rgb::RED);
//! let _ = display.display();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB pixel values and RGB565 constants
pub mod color;
/// RGB565 wire encoding
pub mod codec;
/// Controller command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// In-memory RGB frame buffer
pub mod framebuffer;
/// Controller initialization tables
pub mod init;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Rgb;
pub use config::{
    Builder, Config, Controller, DEFAULT_CHUNK_SIZE, DEFAULT_SPI_FREQUENCY_HZ, Dimensions,
    MAX_CHUNK_SIZE, REDUCED_SPI_FREQUENCY_HZ,
};
pub use display::{AddressWindow, Display, PanelState};
pub use error::{BuilderError, Error};
pub use framebuffer::FrameBuffer;
pub use init::InitStep;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
