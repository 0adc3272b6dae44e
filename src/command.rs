//! Controller command definitions
//!
//! Opcodes for the HX8357-D and ILI9341 controllers. Both follow the MIPI
//! DCS layout for the common commands (sleep, display on/off, address
//! window, RAM write), so those are shared; vendor extension registers are
//! prefixed with the controller name.
//!
//! Commands are sent with the DC line low, their parameters with DC high.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hx8357::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::without_reset(MockSpi, MockPin);
//! // Turn on colour inversion
//! let _ = interface.set_data_mode(false);
//! let _ = interface.write(&[command::INVON]);
//! ```

// MIPI DCS commands shared by both controllers

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset (0x01)
pub const SWRESET: u8 = 0x01;

/// Read display identification (0x04)
pub const RDDID: u8 = 0x04;

/// Read display status (0x09)
pub const RDDST: u8 = 0x09;

/// Read display power mode (0x0A)
pub const RDPOWMODE: u8 = 0x0A;

/// Read memory access control (0x0B)
pub const RDMADCTL: u8 = 0x0B;

/// Read pixel format (0x0C)
pub const RDCOLMOD: u8 = 0x0C;

/// Read display image mode (0x0D)
pub const RDDIM: u8 = 0x0D;

/// Read display self-diagnostic result (0x0F)
pub const RDDSDR: u8 = 0x0F;

/// Enter sleep mode (0x10)
pub const SLPIN: u8 = 0x10;

/// Exit sleep mode (0x11)
///
/// The controller needs a settle delay before further commands.
pub const SLPOUT: u8 = 0x11;

/// Partial mode on (0x12)
pub const PTLON: u8 = 0x12;

/// Normal display mode on (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVON: u8 = 0x21;

/// Gamma curve select (0x26)
pub const GAMMASET: u8 = 0x26;

/// Display off (0x28)
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Page (row) address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const PASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Every data byte following this command is pixel data for the current
/// address window.
pub const RAMWR: u8 = 0x2C;

/// Memory read (0x2E)
pub const RAMRD: u8 = 0x2E;

/// Partial area (0x30)
pub const PTLAR: u8 = 0x30;

/// Tearing effect line on (0x35)
pub const TEON: u8 = 0x35;

/// Memory access control (0x36)
///
/// Row/column exchange, mirroring and RGB/BGR order.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format (0x3A)
///
/// 0x55 selects 16 bits per pixel on both the RGB and MCU interfaces.
pub const COLMOD: u8 = 0x3A;

/// Set tear scanline (0x44)
pub const TEARLINE: u8 = 0x44;

// HX8357-D extension registers

/// HX8357: set internal oscillator (0xB0)
pub const HX8357_SETOSC: u8 = 0xB0;

/// HX8357: set power control (0xB1)
pub const HX8357_SETPWR1: u8 = 0xB1;

/// HX8357: set RGB interface (0xB3)
pub const HX8357_SETRGB: u8 = 0xB3;

/// HX8357-D: set display cycle (0xB4)
pub const HX8357D_SETCYC: u8 = 0xB4;

/// HX8357-D: set VCOM voltage (0xB6)
pub const HX8357D_SETCOM: u8 = 0xB6;

/// HX8357-D: enable extension command set (0xB9)
///
/// Requires the 3-byte key `FF 83 57`.
pub const HX8357D_SETC: u8 = 0xB9;

/// HX8357-D: set source option / standby (0xC0)
pub const HX8357D_SETSTBA: u8 = 0xC0;

/// HX8357: set panel characteristics (0xCC)
pub const HX8357_SETPANEL: u8 = 0xCC;

/// HX8357-D: set gamma curve (0xE0)
pub const HX8357D_SETGAMMA: u8 = 0xE0;

// ILI9341 extension registers

/// ILI9341: frame rate control, normal mode (0xB1)
pub const ILI9341_FRMCTR1: u8 = 0xB1;

/// ILI9341: display function control (0xB6)
pub const ILI9341_DFUNCTR: u8 = 0xB6;

/// ILI9341: power control 1 (0xC0)
pub const ILI9341_PWCTR1: u8 = 0xC0;

/// ILI9341: power control 2 (0xC1)
pub const ILI9341_PWCTR2: u8 = 0xC1;

/// ILI9341: VCOM control 1 (0xC5)
pub const ILI9341_VMCTR1: u8 = 0xC5;

/// ILI9341: VCOM control 2 (0xC7)
pub const ILI9341_VMCTR2: u8 = 0xC7;

/// ILI9341: power control A (0xCB)
pub const ILI9341_PWCTRA: u8 = 0xCB;

/// ILI9341: power control B (0xCF)
pub const ILI9341_PWCTRB: u8 = 0xCF;

/// ILI9341: positive gamma correction (0xE0)
pub const ILI9341_GMCTRP1: u8 = 0xE0;

/// ILI9341: negative gamma correction (0xE1)
pub const ILI9341_GMCTRN1: u8 = 0xE1;

/// ILI9341: driver timing control A (0xE8)
pub const ILI9341_DTCA: u8 = 0xE8;

/// ILI9341: driver timing control B (0xEA)
pub const ILI9341_DTCB: u8 = 0xEA;

/// ILI9341: power on sequence control (0xED)
pub const ILI9341_PWRSEQ: u8 = 0xED;

/// ILI9341: undocumented vendor register written at start-up (0xEF)
pub const ILI9341_VENDOR_EF: u8 = 0xEF;

/// ILI9341: enable 3-gamma control (0xF2)
pub const ILI9341_ENABLE3G: u8 = 0xF2;

/// ILI9341: pump ratio control (0xF7)
pub const ILI9341_PRC: u8 = 0xF7;
