//! Panel variants
//!
//! A panel variant is pure data: a [`PanelDescriptor`]. The bring-up
//! control flow lives once, in [`DsiPanel`]; new panels are added by
//! writing a descriptor and listing it in [`PANELS`].

mod lifecycle;
pub mod riverdi;

pub use lifecycle::DsiPanel;

use dsi_panel_core::config::{BringupDelays, DisplayTiming, InitSequence};
use dsi_panel_hal::LinkConfig;

/// Static description of one panel variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelDescriptor {
    /// Driver name used in diagnostics
    pub name: &'static str,
    /// Compatible string matched against the platform description
    pub compatible: &'static str,
    /// Video timing
    pub timing: DisplayTiming,
    /// DSI link characteristics fixed at probe
    pub link: LinkConfig,
    /// Vendor register initialisation
    pub init: InitSequence,
    /// Mandatory settle delays
    pub delays: BringupDelays,
}

/// All known panel variants
pub static PANELS: &[&PanelDescriptor] = &[&riverdi::RVT70HSMNWC00];

/// Find the descriptor for a compatible string
pub fn find_panel(compatible: &str) -> Option<&'static PanelDescriptor> {
    PANELS.iter().copied().find(|p| p.compatible == compatible)
}
