//! Collaborator contracts for DSI panel bring-up
//!
//! This crate defines the narrow interfaces a panel driver consumes from
//! the platform. Chip-specific DSI hosts, backlight drivers and board
//! description code implement these traits; the panel drivers only ever
//! see the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dsi-panel-drivers (lifecycle, panels)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dsi-panel-core (data model, phases)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dsi-panel-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  DSI host /   │       │   board /     │
//! │  backlight    │       │   devicetree  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`dsi::DsiDevice`] - Command-mode writes to a DSI peripheral
//! - [`backlight::Backlight`] - Backlight enable/disable
//! - [`platform::PlatformDescription`] - Resolving named board references
//!
//! The reset line is any [`embedded_hal::digital::OutputPin`]; failures are
//! normalised into [`gpio::GpioError`].

#![no_std]
#![deny(unsafe_code)]

pub mod backlight;
pub mod dsi;
pub mod gpio;
pub mod platform;

// Re-export key items at crate root for convenience
pub use backlight::{Backlight, BacklightError};
pub use dsi::{DsiDevice, DsiError, LinkConfig, ModeFlags, PixelFormat};
pub use gpio::GpioError;
pub use platform::{LookupError, PlatformDescription, Property};
