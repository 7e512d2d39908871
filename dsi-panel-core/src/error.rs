//! Panel error taxonomy
//!
//! Only critical steps produce a [`PanelError`]. Best-effort register
//! writes are logged by the driver and never surface here.

use dsi_panel_hal::{BacklightError, DsiError, GpioError, LookupError};

/// Errors that abort panel construction or bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// A required resource could not be resolved from the platform
    Configuration(LookupError),
    /// A critical DSI transfer (attach, exit-sleep, display-on) failed
    Transport(DsiError),
    /// The backlight could not be enabled
    Backlight(BacklightError),
    /// An existing reset line could not be driven
    Gpio(GpioError),
}

impl From<LookupError> for PanelError {
    fn from(e: LookupError) -> Self {
        PanelError::Configuration(e)
    }
}

impl From<DsiError> for PanelError {
    fn from(e: DsiError) -> Self {
        PanelError::Transport(e)
    }
}

impl From<BacklightError> for PanelError {
    fn from(e: BacklightError) -> Self {
        PanelError::Backlight(e)
    }
}

impl From<GpioError> for PanelError {
    fn from(e: GpioError) -> Self {
        PanelError::Gpio(e)
    }
}

impl core::fmt::Display for PanelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PanelError::Configuration(e) => write!(f, "Configuration error: {e}"),
            PanelError::Transport(e) => write!(f, "Transport error: {e} ({})", e.code()),
            PanelError::Backlight(e) => write!(f, "Backlight error: {e}"),
            PanelError::Gpio(e) => write!(f, "GPIO error: {e}"),
        }
    }
}

impl core::error::Error for PanelError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            PanelError::Configuration(e) => Some(e),
            PanelError::Transport(e) => Some(e),
            PanelError::Backlight(e) => Some(e),
            PanelError::Gpio(e) => Some(e),
        }
    }
}
