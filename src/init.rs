//! Controller initialization tables
//!
//! Each table is the vendor bring-up script expressed as data: a command,
//! its parameter bytes, and the settle delay the datasheet requires before
//! the next command. The byte values and delays are what the panels were
//! validated with; shortening a delay shows up as a corrupted or blank
//! panel on real hardware.

use crate::command::*;

/// One step of an initialization table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitStep {
    /// Command byte (sent with DC low)
    pub command: u8,
    /// Parameter bytes (sent with DC high), may be empty
    pub data: &'static [u8],
    /// Delay after the step in milliseconds, 0 for none
    pub delay_ms: u32,
}

impl InitStep {
    /// A step with parameters and no settle delay
    pub const fn new(command: u8, data: &'static [u8]) -> Self {
        Self {
            command,
            data,
            delay_ms: 0,
        }
    }

    /// A step followed by a settle delay
    pub const fn with_delay(command: u8, data: &'static [u8], delay_ms: u32) -> Self {
        Self {
            command,
            data,
            delay_ms,
        }
    }
}

/// Total settle time of a table in milliseconds
pub fn total_delay_ms(steps: &[InitStep]) -> u32 {
    steps.iter().map(|step| step.delay_ms).sum()
}

/// HX8357-D bring-up sequence (320x480, 16 bpp)
pub const HX8357D_INIT: &[InitStep] = &[
    InitStep::new(SWRESET, &[]),
    // Unlock extension registers
    InitStep::with_delay(HX8357D_SETC, &[0xFF, 0x83, 0x57], 300),
    InitStep::new(HX8357_SETRGB, &[0x80, 0x00, 0x06, 0x06]),
    // VCOM -1.52V
    InitStep::new(HX8357D_SETCOM, &[0x25]),
    // Normal mode 70Hz, idle mode 55Hz
    InitStep::new(HX8357_SETOSC, &[0x68]),
    // BGR, gate direction swapped
    InitStep::new(HX8357_SETPANEL, &[0x05]),
    // Not deep standby, BT, VSPR, VSNR, AP, FS
    InitStep::new(HX8357_SETPWR1, &[0x00, 0x15, 0x1C, 0x1C, 0x83, 0xAA]),
    // OPON normal, OPON idle, STBA x3, GEN
    InitStep::new(HX8357D_SETSTBA, &[0x50, 0x50, 0x01, 0x3C, 0x1E, 0x08]),
    // NW, RTN, DIV, DUM, DUM, GDON, GDOFF
    InitStep::new(HX8357D_SETCYC, &[0x02, 0x40, 0x00, 0x2A, 0x2A, 0x0D, 0x78]),
    InitStep::new(
        HX8357D_SETGAMMA,
        &[
            0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27, 0x1B, 0x08,
            0x09, 0x03, 0x02, 0x0A, 0x11, 0x1D, 0x23, 0x35, 0x41, 0x4B, 0x4B, 0x42, 0x3A, 0x27,
            0x1B, 0x08, 0x09, 0x03, 0x00, 0x01,
        ],
    ),
    // 16 bits per pixel
    InitStep::new(COLMOD, &[0x55]),
    InitStep::new(MADCTL, &[0xC0]),
    // TE off
    InitStep::new(TEON, &[0x00]),
    InitStep::new(TEARLINE, &[0x00, 0x02]),
    InitStep::with_delay(SLPOUT, &[], 150),
    InitStep::with_delay(DISPON, &[], 500),
];

/// ILI9341 bring-up sequence (240x320, 16 bpp)
pub const ILI9341_INIT: &[InitStep] = &[
    InitStep::new(ILI9341_VENDOR_EF, &[0x03, 0x80, 0x02]),
    InitStep::new(ILI9341_PWCTRB, &[0x00, 0xC1, 0x30]),
    InitStep::new(ILI9341_PWRSEQ, &[0x64, 0x03, 0x12, 0x81]),
    InitStep::new(ILI9341_DTCA, &[0x85, 0x00, 0x78]),
    InitStep::new(ILI9341_PWCTRA, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    InitStep::new(ILI9341_PRC, &[0x20]),
    InitStep::new(ILI9341_DTCB, &[0x00, 0x00]),
    // VRH[5:0]
    InitStep::new(ILI9341_PWCTR1, &[0x23]),
    // SAP[2:0], BT[3:0]
    InitStep::new(ILI9341_PWCTR2, &[0x10]),
    InitStep::new(ILI9341_VMCTR1, &[0x3E, 0x28]),
    InitStep::new(ILI9341_VMCTR2, &[0x86]),
    InitStep::new(MADCTL, &[0x48]),
    InitStep::new(COLMOD, &[0x55]),
    InitStep::new(ILI9341_FRMCTR1, &[0x00, 0x18]),
    InitStep::new(ILI9341_DFUNCTR, &[0x08, 0x82, 0x27]),
    // 3-gamma off
    InitStep::new(ILI9341_ENABLE3G, &[0x00]),
    InitStep::new(GAMMASET, &[0x01]),
    InitStep::new(
        ILI9341_GMCTRP1,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    InitStep::new(
        ILI9341_GMCTRN1,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
    InitStep::with_delay(SLPOUT, &[], 120),
    InitStep::new(DISPON, &[]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hx8357d_table_shape() {
        assert_eq!(HX8357D_INIT.len(), 16);
        assert_eq!(HX8357D_INIT[0].command, SWRESET);
        assert_eq!(HX8357D_INIT[1].data, &[0xFF, 0x83, 0x57]);

        let gamma = HX8357D_INIT
            .iter()
            .find(|step| step.command == HX8357D_SETGAMMA)
            .map(|step| step.data.len());
        assert_eq!(gamma, Some(34));
    }

    #[test]
    fn test_hx8357d_delays() {
        let delays: alloc::vec::Vec<(u8, u32)> = HX8357D_INIT
            .iter()
            .filter(|step| step.delay_ms > 0)
            .map(|step| (step.command, step.delay_ms))
            .collect();
        assert_eq!(
            delays,
            [(HX8357D_SETC, 300), (SLPOUT, 150), (DISPON, 500)]
        );
        assert_eq!(total_delay_ms(HX8357D_INIT), 950);
    }

    #[test]
    fn test_both_tables_select_16bpp() {
        for table in [HX8357D_INIT, ILI9341_INIT] {
            let colmod = table.iter().find(|step| step.command == COLMOD);
            assert_eq!(colmod.map(|step| step.data), Some(&[0x55u8][..]));
        }
    }

    #[test]
    fn test_tables_end_with_display_on() {
        assert_eq!(HX8357D_INIT.last().map(|s| s.command), Some(DISPON));
        assert_eq!(ILI9341_INIT.last().map(|s| s.command), Some(DISPON));
    }

    #[test]
    fn test_ili9341_gamma_lengths() {
        for cmd in [ILI9341_GMCTRP1, ILI9341_GMCTRN1] {
            let len = ILI9341_INIT
                .iter()
                .find(|step| step.command == cmd)
                .map(|step| step.data.len());
            assert_eq!(len, Some(15));
        }
        assert_eq!(total_delay_ms(ILI9341_INIT), 120);
    }
}
