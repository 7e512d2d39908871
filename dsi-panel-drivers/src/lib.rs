//! MIPI-DSI panel driver implementations
//!
//! This crate provides the hardware-facing half of panel bring-up:
//!
//! - DCS command encoder (best-effort and critical writes)
//! - Bring-up lifecycle controller, generic over panel descriptors
//! - Panel variant tables and a compatible-string registry
//!
//! Diagnostics go through the `log` facade; install a logger in the board
//! support code to see them.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod dcs;
pub mod panel;

#[cfg(test)]
pub(crate) mod mock;

pub use panel::{find_panel, DsiPanel, PanelDescriptor};
