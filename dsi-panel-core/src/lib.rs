//! Board-agnostic core of MIPI-DSI panel bring-up
//!
//! This crate contains everything about a panel that does not touch
//! hardware:
//!
//! - Static panel data (display timing, init sequence, settle delays)
//! - Standard DCS opcodes
//! - Bring-up phase state machine
//! - Panel operations trait
//! - Error taxonomy

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod dcs;
pub mod error;
pub mod state;
pub mod traits;

pub use error::PanelError;
