//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::codec;
use crate::color::Rgb;
use crate::command::{CASET, DISPOFF, DISPON, INVOFF, INVON, PASET, RAMWR};
use crate::config::{Config, Dimensions};
use crate::error::{BuilderError, Error, MAX_CHUNK_SIZE};
use crate::framebuffer::FrameBuffer;
use crate::init::total_delay_ms;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Lifecycle of the panel as seen by the driver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    /// Constructed, nothing sent yet
    #[default]
    Uninitialized,
    /// Hardware reset issued; panel registers are at power-on defaults
    Resetting,
    /// Replaying the init table
    Initializing,
    /// Init table complete; drawing commands are accepted
    Ready,
}

/// Rectangular region of panel RAM targeted by the next pixel write
///
/// Coordinates are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressWindow {
    /// First column
    pub x0: u16,
    /// First row
    pub y0: u16,
    /// Last column
    pub x1: u16,
    /// Last row
    pub y1: u16,
}

impl AddressWindow {
    /// Window covering the whole panel
    pub fn full(dims: Dimensions) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: dims.width - 1,
            y1: dims.height - 1,
        }
    }

    /// Whether the window is well-ordered and inside `dims`
    pub fn fits(&self, dims: Dimensions) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1 && self.x1 < dims.width && self.y1 < dims.height
    }

    /// CASET parameters: start and end column, big-endian
    pub fn column_bytes(&self) -> [u8; 4] {
        let [s_hi, s_lo] = self.x0.to_be_bytes();
        let [e_hi, e_lo] = self.x1.to_be_bytes();
        [s_hi, s_lo, e_hi, e_lo]
    }

    /// PASET parameters: start and end row, big-endian
    pub fn row_bytes(&self) -> [u8; 4] {
        let [s_hi, s_lo] = self.y0.to_be_bytes();
        let [e_hi, e_lo] = self.y1.to_be_bytes();
        [s_hi, s_lo, e_hi, e_lo]
    }

    /// Number of pixels in the window, 0 if it is inverted
    pub fn pixel_count(&self) -> usize {
        if self.x0 > self.x1 || self.y0 > self.y1 {
            return 0;
        }
        (self.x1 - self.x0 + 1) as usize * (self.y1 - self.y0 + 1) as usize
    }
}

/// Core display driver for HX8357-class SPI TFT panels
///
/// Owns the interface, the frame buffer, and the panel state. Draw into the
/// buffer (directly via [`frame_buffer_mut`](Self::frame_buffer_mut), or
/// through embedded-graphics with the `graphics` feature), then push it
/// with [`display`](Self::display).
///
/// ## Example
///
/// ```rust,no_run
/// use hx8357::{Builder, Dimensions, Display, Interface, Rgb};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// let interface = Interface::new(MockSpi, MockPin, MockPin);
/// let dims = match Dimensions::new(320, 480) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let buffer = vec![Rgb::BLACK; dims.pixel_count()];
/// let mut display = match Display::new(interface, config, buffer) {
///     Ok(display) => display,
///     Err(_) => return,
/// };
///
/// if display.begin(&mut delay).is_ok() {
///     display.clear(Rgb::BLUE);
///     display.frame_buffer_mut().fill_rect(10, 10, 50, 50, Rgb::YELLOW);
///     let _ = display.display();
/// }
/// ```
pub struct Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[Rgb]> + AsMut<[Rgb]>,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Frame buffer, always sized to the panel
    buffer: FrameBuffer<B>,
    /// Lifecycle state
    state: PanelState,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[Rgb]> + AsMut<[Rgb]>,
{
    /// Create a new Display instance
    ///
    /// `buffer` must hold exactly `width * height` pixels. No hardware
    /// traffic happens until [`begin`](Self::begin).
    ///
    /// # Errors
    ///
    /// - Any error from [`Config::validate`], for a hand-built `Config`
    /// - `BuilderError::BufferSizeMismatch` if the buffer length does not
    ///   match the configured dimensions
    pub fn new(interface: I, config: Config, buffer: B) -> Result<Self, BuilderError> {
        config.validate()?;
        let dims = config.dimensions;
        let buffer = FrameBuffer::new(dims.width, dims.height, buffer)?;
        Ok(Self {
            interface,
            config,
            buffer,
            state: PanelState::Uninitialized,
        })
    }

    /// Pulse the hardware reset line
    ///
    /// Leaves the panel in [`PanelState::Resetting`]; call
    /// [`begin`](Self::begin) to bring it back to `Ready`.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.state = PanelState::Resetting;
        self.interface.reset(delay).map_err(Error::Interface)
    }

    /// Reset the panel and replay the initialization table
    ///
    /// Blocks for the full settle time of the table (close to a second for
    /// the HX8357-D). On error the panel is left in the state that failed
    /// and is not `Ready`.
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!(
            "begin: {:?} {}x{}, SPI clock {} Hz, {} init steps, {} ms settle",
            self.config.controller,
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.spi_frequency_hz,
            self.config.init_sequence.len(),
            total_delay_ms(self.config.init_sequence)
        );
        self.reset(delay)?;
        self.init(delay)?;
        self.state = PanelState::Ready;
        debug!("begin: panel ready");
        Ok(())
    }

    /// Replay the configured init table
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.state = PanelState::Initializing;
        let steps = self.config.init_sequence;
        for step in steps {
            trace!(
                "init: cmd {:#04x}, {} data bytes, {} ms",
                step.command,
                step.data.len(),
                step.delay_ms
            );
            self.command(&[step.command])?;
            if !step.data.is_empty() {
                self.data(step.data)?;
            }
            if step.delay_ms > 0 {
                delay.delay_ms(step.delay_ms);
            }
        }
        Ok(())
    }

    /// Set the address window and prime the panel for a RAM write
    ///
    /// Emits CASET, PASET and RAMWR. Nothing is cached: calling this twice
    /// with the same bounds sends the same bytes twice.
    ///
    /// # Errors
    ///
    /// - `Error::NotReady` before [`begin`](Self::begin) completes
    /// - `Error::InvalidWindow` if `x0 > x1`, `y0 > y1`, or the window leaves the panel
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        self.ensure_ready()?;
        let window = AddressWindow { x0, y0, x1, y1 };
        if !window.fits(self.config.dimensions) {
            return Err(Error::InvalidWindow { x0, y0, x1, y1 });
        }
        self.write_window(window)
    }

    /// Set a window from (x0, y0) to the bottom-right corner of the panel
    pub fn set_window_from(&mut self, x0: u16, y0: u16) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        self.set_window(x0, y0, dims.width - 1, dims.height - 1)
    }

    /// Set the window to the whole panel
    pub fn set_full_window(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.write_window(AddressWindow::full(self.config.dimensions))
    }

    fn write_window(&mut self, window: AddressWindow) -> DisplayResult<I> {
        trace!(
            "window ({}, {})-({}, {}), {} pixels",
            window.x0,
            window.y0,
            window.x1,
            window.y1,
            window.pixel_count()
        );
        self.command(&[CASET])?;
        self.data(&window.column_bytes())?;
        self.command(&[PASET])?;
        self.data(&window.row_bytes())?;
        self.command(&[RAMWR])
    }

    /// Write the internal frame buffer to the panel
    ///
    /// # Errors
    ///
    /// - `Error::NotReady` before [`begin`](Self::begin) completes
    /// - `Error::Interface` on a transfer failure; the frame on the panel is
    ///   then partial until the next successful call
    pub fn display(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.set_full_window()?;
        let chunk_size = self.config.chunk_size;
        Self::stream_pixels(&mut self.interface, self.buffer.pixels(), chunk_size)
    }

    /// Write a caller-supplied frame to the panel
    ///
    /// The internal frame buffer is not touched.
    ///
    /// # Errors
    ///
    /// - `Error::NotReady` before [`begin`](Self::begin) completes
    /// - `Error::DimensionMismatch` if the frame is not exactly panel-sized
    /// - `Error::Interface` on a transfer failure
    pub fn display_frame<F>(&mut self, frame: &FrameBuffer<F>) -> DisplayResult<I>
    where
        F: AsRef<[Rgb]>,
    {
        self.ensure_ready()?;
        let dims = self.config.dimensions;
        if frame.dimensions() != dims {
            return Err(Error::DimensionMismatch {
                expected: (dims.width, dims.height),
                provided: (frame.width(), frame.height()),
            });
        }
        self.set_full_window()?;
        Self::stream_pixels(&mut self.interface, frame.pixels(), self.config.chunk_size)
    }

    /// Encode pixels and write them as `chunk_size` transfers
    ///
    /// Same wire behavior as [`send`](Self::send) with `is_data == true`,
    /// but encodes into a staging buffer one chunk at a time instead of
    /// taking a finished byte slice. Assumes RAMWR has just been sent.
    fn stream_pixels(interface: &mut I, pixels: &[Rgb], chunk_size: usize) -> DisplayResult<I> {
        trace!(
            "streaming {} pixels in {}-byte chunks",
            pixels.len(),
            chunk_size
        );
        let mut staging = [0u8; MAX_CHUNK_SIZE];
        let staging = &mut staging[..chunk_size];
        let pixels_per_chunk = chunk_size / codec::BYTES_PER_PIXEL;

        interface.set_data_mode(true).map_err(Error::Interface)?;
        for batch in pixels.chunks(pixels_per_chunk) {
            let len = codec::encode_into(batch, staging);
            interface.write(&staging[..len]).map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Fill the frame buffer with one color
    ///
    /// Nothing is sent until the next [`display`](Self::display). Accepts
    /// anything convertible to [`Rgb`], including `Rgb888` with the
    /// `graphics` feature.
    pub fn clear(&mut self, color: impl Into<Rgb>) {
        self.buffer.fill(color.into());
    }

    /// Send raw bytes as command (`is_data == false`) or data
    ///
    /// Bytes are split into transfers of at most the configured chunk size.
    /// Works in any state.
    pub fn send(&mut self, bytes: &[u8], is_data: bool) -> DisplayResult<I> {
        self.interface
            .set_data_mode(is_data)
            .map_err(Error::Interface)?;
        for chunk in bytes.chunks(self.config.chunk_size) {
            self.interface.write(chunk).map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Send command bytes
    pub fn command(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        self.send(bytes, false)
    }

    /// Send data bytes
    pub fn data(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        self.send(bytes, true)
    }

    /// Turn color inversion on or off
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.command(&[if inverted { INVON } else { INVOFF }])
    }

    /// Turn the panel output on or off
    ///
    /// Panel RAM is kept while off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.ensure_ready()?;
        self.command(&[if on { DISPON } else { DISPOFF }])
    }

    fn ensure_ready(&self) -> DisplayResult<I> {
        if self.state != PanelState::Ready {
            return Err(Error::NotReady { state: self.state });
        }
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Whether drawing commands are accepted
    pub fn is_ready(&self) -> bool {
        self.state == PanelState::Ready
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The frame buffer
    pub fn frame_buffer(&self) -> &FrameBuffer<B> {
        &self.buffer
    }

    /// The frame buffer, for drawing
    pub fn frame_buffer_mut(&mut self) -> &mut FrameBuffer<B> {
        &mut self.buffer
    }

    /// Give back the interface and pixel storage
    pub fn release(self) -> (I, B) {
        (self.interface, self.buffer.into_inner())
    }
}
