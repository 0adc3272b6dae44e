//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the panel controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The panel requires:
//! - SPI bus (MOSI + SCK, mode 0, MSB first), configured by the platform
//! - 1 or 2 GPIO pins:
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low, optional)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use hx8357::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI, DC and RST pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send a command, then its parameters
//! let _ = interface.set_data_mode(false);
//! let _ = interface.write(&[0x3A]);
//! let _ = interface.set_data_mode(true);
//! let _ = interface.write(&[0x55]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Reset timing: RST high before the pulse, in milliseconds
pub const RESET_PRE_HIGH_MS: u32 = 5;
/// Reset timing: RST held low, in milliseconds
pub const RESET_LOW_MS: u32 = 20;
/// Reset timing: settle after RST released, in milliseconds
pub const RESET_SETTLE_MS: u32 = 150;

/// Trait for the hardware interface to the panel controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a parallel bus, an inverted DC line),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Drive the DC line: `true` for data, `false` for command
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO write fails.
    fn set_data_mode(&mut self, is_data: bool) -> InterfaceResult<(), Self::Error>;

    /// Write bytes in a single transfer
    ///
    /// The driver never passes more than the configured chunk size.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails.
    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// With a reset line the implementation must:
    /// 1. Set RST high, wait 5ms
    /// 2. Set RST low, wait 20ms
    /// 3. Set RST high, wait 150ms
    ///
    /// Without a reset line this is a no-op.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO write fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// SPI + GPIO implementation of [`DisplayInterface`]
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use hx8357::{Builder, Dimensions, Display, Interface, Rgb};
/// # use core::convert::Infallible;
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
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // DC
///     MockPin,  // RST
/// );
///
/// // Use with Display
/// # let dims = match Dimensions::new(320, 480) {
/// #     Ok(dims) => dims,
/// #     Err(_) => return,
/// # };
/// # let config = match Builder::new().dimensions(dims).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// # let buffer = vec![Rgb::BLACK; dims.pixel_count()];
/// let _display = Display::new(interface, config, buffer);
/// ```
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low), if wired
    rst: Option<RST>,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface with a reset line
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst: Some(rst),
        }
    }

    /// Whether a reset line is wired
    pub fn has_reset(&self) -> bool {
        self.rst.is_some()
    }

    /// Give back the SPI device and pins
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC> Interface<SPI, DC, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new Interface for a panel whose reset line is not wired
    ///
    /// [`reset`](DisplayInterface::reset) becomes a no-op; the software
    /// reset at the start of the init table still runs.
    pub fn without_reset(spi: SPI, dc: DC) -> Self {
        Self { spi, dc, rst: None }
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn set_data_mode(&mut self, is_data: bool) -> InterfaceResult<(), Self::Error> {
        let result = if is_data {
            self.dc.set_high()
        } else {
            self.dc.set_low()
        };
        result.map_err(InterfaceError::Pin)
    }

    fn write(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.spi.write(bytes).map_err(InterfaceError::Spi)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };
        rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PRE_HIGH_MS);
        rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_LOW_MS);
        rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    /// Everything the mocks observed, in order
    #[derive(Debug, PartialEq)]
    enum Event {
        Dc(bool),
        Rst(bool),
        Delay(u32),
        Write(Vec<u8>),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations {
                if let embedded_hal::spi::Operation::Write(bytes) = op {
                    self.log.borrow_mut().push(Event::Write(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    struct MockPin {
        log: Log,
        is_reset: bool,
        fail: bool,
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false)
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true)
        }
    }

    impl MockPin {
        fn record(&mut self, level: bool) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }
            let event = if self.is_reset {
                Event::Rst(level)
            } else {
                Event::Dc(level)
            };
            self.log.borrow_mut().push(event);
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::Delay(ms));
        }
    }

    fn parts(log: &Log) -> (MockSpi, MockPin, MockPin) {
        (
            MockSpi {
                log: log.clone(),
                fail: false,
            },
            MockPin {
                log: log.clone(),
                is_reset: false,
                fail: false,
            },
            MockPin {
                log: log.clone(),
                is_reset: true,
                fail: false,
            },
        )
    }

    #[test]
    fn test_reset_pulse_timing() {
        let log = Log::default();
        let (spi, dc, rst) = parts(&log);
        let mut interface = Interface::new(spi, dc, rst);
        let mut delay = MockDelay { log: log.clone() };

        interface.reset(&mut delay).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Rst(true),
                Event::Delay(5),
                Event::Rst(false),
                Event::Delay(20),
                Event::Rst(true),
                Event::Delay(150),
            ]
        );
    }

    #[test]
    fn test_reset_without_pin_is_noop() {
        let log = Log::default();
        let (spi, dc, _) = parts(&log);
        let mut interface = Interface::without_reset(spi, dc);
        let mut delay = MockDelay { log: log.clone() };

        assert!(!interface.has_reset());
        interface.reset(&mut delay).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_reset_pin_error_propagates() {
        let log = Log::default();
        let (spi, dc, mut rst) = parts(&log);
        rst.fail = true;
        let mut interface = Interface::new(spi, dc, rst);
        let mut delay = MockDelay { log: log.clone() };

        let result = interface.reset(&mut delay);
        assert!(matches!(result, Err(InterfaceError::Pin(MockError))));
    }

    #[test]
    fn test_data_mode_drives_dc() {
        let log = Log::default();
        let (spi, dc, rst) = parts(&log);
        let mut interface = Interface::new(spi, dc, rst);

        interface.set_data_mode(false).unwrap();
        interface.write(&[0x2C]).unwrap();
        interface.set_data_mode(true).unwrap();
        interface.write(&[0x12, 0x34]).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Event::Dc(false),
                Event::Write(alloc::vec![0x2C]),
                Event::Dc(true),
                Event::Write(alloc::vec![0x12, 0x34]),
            ]
        );
    }

    #[test]
    fn test_spi_error_propagates() {
        let log = Log::default();
        let (mut spi, dc, rst) = parts(&log);
        spi.fail = true;
        let mut interface = Interface::new(spi, dc, rst);

        assert!(matches!(
            interface.write(&[0x00]),
            Err(InterfaceError::Spi(MockError))
        ));
    }
}
