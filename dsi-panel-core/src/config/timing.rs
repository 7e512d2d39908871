//! Display timing record

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Video timing of a panel
///
/// Horizontal values are in pixels, vertical values in lines. Each panel
/// variant carries exactly one of these as a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayTiming {
    /// Pixel clock in Hz
    pub pixel_clock_hz: u32,
    /// Active pixels per line
    pub hactive: u16,
    /// Horizontal front porch
    pub hfront_porch: u16,
    /// Horizontal back porch
    pub hback_porch: u16,
    /// Horizontal sync pulse length
    pub hsync_len: u16,
    /// Active lines per frame
    pub vactive: u16,
    /// Vertical front porch
    pub vfront_porch: u16,
    /// Vertical back porch
    pub vback_porch: u16,
    /// Vertical sync pulse length
    pub vsync_len: u16,
}

impl DisplayTiming {
    /// Total pixels per line including blanking
    pub const fn h_total(&self) -> u32 {
        self.hactive as u32 + self.hfront_porch as u32 + self.hback_porch as u32
            + self.hsync_len as u32
    }

    /// Total lines per frame including blanking
    pub const fn v_total(&self) -> u32 {
        self.vactive as u32 + self.vfront_porch as u32 + self.vback_porch as u32
            + self.vsync_len as u32
    }

    /// Frame rate in whole Hz (rounded down)
    ///
    /// Returns 0 for a degenerate timing with no pixels.
    pub const fn refresh_rate_hz(&self) -> u32 {
        // Up to (4 * u16::MAX)^2 pixels per frame; does not fit in u32
        let pixels = self.h_total() as u64 * self.v_total() as u64;
        if pixels == 0 {
            0
        } else {
            (self.pixel_clock_hz as u64 / pixels) as u32
        }
    }
}
