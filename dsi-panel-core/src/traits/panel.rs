//! Panel operations trait

use embedded_hal::delay::DelayNs;

use crate::config::DisplayTiming;

/// Operations a display controller invokes on a panel
///
/// The controller calls [`probe`](Panel::probe) once when the panel is
/// bound, then [`enable_backlight`](Panel::enable_backlight) once the
/// video pipeline is ready to stream. Neither is re-entrant.
pub trait Panel {
    /// Error returned by the fallible operations
    type Error;

    /// Reset the panel and fix the DSI link characteristics
    fn probe<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Run the full bring-up and light the panel
    ///
    /// Named after the final step; this attaches to the bus, sends the
    /// init sequence, exits sleep and turns the display on before the
    /// backlight is enabled.
    fn enable_backlight<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Static video timing of the panel
    ///
    /// Pure accessor; callable in any phase.
    fn display_timing(&self) -> DisplayTiming;
}
