//! Riverdi panels
//!
//! RVT70HSMNWC00: 7" 1024x600 IPS, two-lane MIPI-DSI, RGB888 video.

use dsi_panel_core::config::{BringupDelays, Command, DisplayTiming, InitSequence};
use dsi_panel_hal::{LinkConfig, ModeFlags, PixelFormat};

use super::PanelDescriptor;

/// Vendor register table, replayed after the soft reset
const RVT70HSMNWC00_INIT: &[Command] = &[
    Command::WriteParam(0xB2, 0x50),
    Command::WriteParam(0x80, 0x4B),
    Command::WriteParam(0x81, 0xFF),
    Command::WriteParam(0x82, 0x1A),
    Command::WriteParam(0x83, 0x88),
    Command::WriteParam(0x84, 0x8F),
    Command::WriteParam(0x85, 0x35),
    Command::WriteParam(0x86, 0xB0),
];

/// Riverdi RVT70HSMNWC00
pub static RVT70HSMNWC00: PanelDescriptor = PanelDescriptor {
    name: "rvt70hsmnwc00_panel",
    compatible: "riverdi,rvt70hsmnwc00",
    timing: DisplayTiming {
        pixel_clock_hz: 52_000_000,
        hactive: 1024,
        hfront_porch: 160,
        hback_porch: 160,
        hsync_len: 1,
        vactive: 600,
        vfront_porch: 12,
        vback_porch: 23,
        vsync_len: 1,
    },
    link: LinkConfig::new(
        2,
        PixelFormat::Rgb888,
        ModeFlags::VIDEO
            .union(ModeFlags::VIDEO_BURST)
            .union(ModeFlags::LPM),
    ),
    init: InitSequence::new(RVT70HSMNWC00_INIT),
    delays: BringupDelays {
        reset_assert_ms: 1,
        reset_deassert_ms: 10,
        soft_reset_ms: 120,
        sleep_exit_ms: 125,
        display_on_ms: 20,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays() {
        let d = RVT70HSMNWC00.delays;
        assert_eq!(d.reset_assert_ms, 1);
        assert_eq!(d.reset_deassert_ms, 10);
        assert_eq!(d.soft_reset_ms, 120);
        assert_eq!(d.sleep_exit_ms, 125);
        assert_eq!(d.display_on_ms, 20);
        assert!(d.reset_assert_ms < d.reset_deassert_ms);
        assert!(d.soft_reset_ms > d.reset_deassert_ms);
    }

    #[test]
    fn test_init_table() {
        let init = RVT70HSMNWC00.init;
        assert_eq!(init.soft_reset, Command::Write(0x01));
        assert_eq!(init.commands.len(), 8);
        assert!(init.commands.iter().all(|c| c.param().is_some()));
        assert_eq!(init.commands[0], Command::WriteParam(0xB2, 0x50));
        assert_eq!(init.commands[7], Command::WriteParam(0x86, 0xB0));
    }

    #[test]
    fn test_link() {
        let link = RVT70HSMNWC00.link;
        assert_eq!(link.lanes, 2);
        assert_eq!(link.format, PixelFormat::Rgb888);
        assert_eq!(
            link.mode_flags,
            ModeFlags::VIDEO | ModeFlags::VIDEO_BURST | ModeFlags::LPM
        );
    }
}
