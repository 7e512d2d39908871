//! MIPI-DSI command bus abstractions
//!
//! Provides the trait a DSI host implements for a single attached
//! peripheral, plus the link vocabulary (lanes, pixel format, mode flags)
//! a panel hands to the host.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors from DSI command-mode transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DsiError {
    /// Host did not complete the transfer in time
    Timeout,
    /// Peripheral reported an error or the packet was not acknowledged
    Io,
    /// Transfer attempted on a device that is not attached to the host
    NotAttached,
    /// Host is busy with another transfer
    Busy,
    /// Host-specific failure, carried as a negative errno value
    Other(i32),
}

impl DsiError {
    /// Numeric error code in negative-errno form
    ///
    /// Used for diagnostics so the log line matches what a C host
    /// driver would print.
    pub fn code(&self) -> i32 {
        match self {
            DsiError::Timeout => -110,
            DsiError::Io => -5,
            DsiError::NotAttached => -19,
            DsiError::Busy => -16,
            DsiError::Other(code) => *code,
        }
    }
}

impl core::fmt::Display for DsiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DsiError::Timeout => write!(f, "DSI transfer timed out"),
            DsiError::Io => write!(f, "DSI transfer failed"),
            DsiError::NotAttached => write!(f, "DSI device not attached"),
            DsiError::Busy => write!(f, "DSI host busy"),
            DsiError::Other(code) => write!(f, "DSI host error {code}"),
        }
    }
}

impl core::error::Error for DsiError {}

/// A peripheral on a DSI bus
///
/// One implementation corresponds to one virtual channel on one host.
/// Every call is exactly one bus transaction; implementations must not
/// buffer or retry.
pub trait DsiDevice {
    /// Register this device with the host
    ///
    /// `link` carries the lane count, pixel format and mode flags the panel
    /// fixed during probe; the host programs its PHY and video engine from
    /// it. A panel that was never probed passes [`LinkConfig::UNSET`];
    /// hosts should refuse that with [`DsiError::NotAttached`].
    fn attach(&mut self, link: &LinkConfig) -> Result<(), DsiError>;

    /// Issue `data` as a single DCS write
    ///
    /// The first byte is the DCS opcode, the rest are parameters.
    ///
    /// # Returns
    /// The number of bytes the host accepted.
    fn write_buffer(&mut self, data: &[u8]) -> Result<usize, DsiError>;
}

impl<T: DsiDevice + ?Sized> DsiDevice for &mut T {
    fn attach(&mut self, link: &LinkConfig) -> Result<(), DsiError> {
        T::attach(self, link)
    }

    fn write_buffer(&mut self, data: &[u8]) -> Result<usize, DsiError> {
        T::write_buffer(self, data)
    }
}

/// Pixel format on the video stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PixelFormat {
    /// 24 bits per pixel
    #[default]
    Rgb888,
    /// 18 bits per pixel, loosely packed into 24
    Rgb666,
    /// 18 bits per pixel, tightly packed
    Rgb666Packed,
    /// 16 bits per pixel
    Rgb565,
}

impl PixelFormat {
    /// Bits occupied by one pixel on the wire
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Rgb888 | PixelFormat::Rgb666 => 24,
            PixelFormat::Rgb666Packed => 18,
            PixelFormat::Rgb565 => 16,
        }
    }
}

/// DSI link mode flags
///
/// Bit positions follow the common MIPI-DSI host convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModeFlags(u32);

impl ModeFlags {
    /// No flags set
    pub const NONE: Self = Self(0);
    /// Video mode (as opposed to command mode)
    pub const VIDEO: Self = Self(1 << 0);
    /// Burst video transfers
    pub const VIDEO_BURST: Self = Self(1 << 1);
    /// Sync pulses rather than sync events
    pub const VIDEO_SYNC_PULSE: Self = Self(1 << 2);
    /// Disable end-of-transmission packets
    pub const NO_EOT_PACKET: Self = Self(1 << 9);
    /// Non-continuous clock lane
    pub const CLOCK_NON_CONTINUOUS: Self = Self(1 << 10);
    /// Commands may be sent in low-power mode
    pub const LPM: Self = Self(1 << 11);

    /// Raw bit value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Combine two flag sets (usable in `const` context)
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether every flag in `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether no flag is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for ModeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl core::ops::BitOrAssign for ModeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Characteristics of the DSI data link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkConfig {
    /// Number of data lanes (1-4)
    pub lanes: u8,
    /// Pixel format of the video stream
    pub format: PixelFormat,
    /// Link mode flags
    pub mode_flags: ModeFlags,
}

impl LinkConfig {
    /// Link not yet configured (no lanes, no flags)
    pub const UNSET: Self = Self {
        lanes: 0,
        format: PixelFormat::Rgb888,
        mode_flags: ModeFlags::NONE,
    };

    /// Create a link configuration
    pub const fn new(lanes: u8, format: PixelFormat, mode_flags: ModeFlags) -> Self {
        Self {
            lanes,
            format,
            mode_flags,
        }
    }

    /// Check whether the link has been configured
    pub const fn is_set(&self) -> bool {
        self.lanes != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DsiError::Timeout.code(), -110);
        assert_eq!(DsiError::Io.code(), -5);
        assert_eq!(DsiError::Other(-71).code(), -71);
    }

    #[test]
    fn test_mode_flags() {
        let flags = ModeFlags::VIDEO | ModeFlags::VIDEO_BURST | ModeFlags::LPM;
        assert_eq!(flags.bits(), 0b1000_0000_0011);
        assert!(flags.contains(ModeFlags::VIDEO | ModeFlags::LPM));
        assert!(!flags.contains(ModeFlags::VIDEO_SYNC_PULSE));
        assert!(ModeFlags::NONE.is_empty());

        let mut acc = ModeFlags::NONE;
        acc |= ModeFlags::VIDEO;
        assert_eq!(acc, ModeFlags::VIDEO);
    }

    #[test]
    fn test_link_config() {
        assert!(!LinkConfig::UNSET.is_set());
        let link = LinkConfig::new(2, PixelFormat::Rgb888, ModeFlags::VIDEO);
        assert!(link.is_set());
        assert_eq!(link.format.bits_per_pixel(), 24);
    }
}
