//! Panel abstraction traits
//!
//! These traits define the interface between a display controller and
//! panel-specific implementations.

pub mod panel;

pub use panel::Panel;
