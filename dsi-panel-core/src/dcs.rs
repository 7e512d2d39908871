//! MIPI Display Command Set opcodes
//!
//! Only the user command set opcodes used during bring-up. Vendor
//! registers belong to the individual panel tables.

/// No operation
pub const NOP: u8 = 0x00;
/// Software reset; panel reloads register defaults
pub const SOFT_RESET: u8 = 0x01;
/// Enter sleep mode
pub const ENTER_SLEEP_MODE: u8 = 0x10;
/// Exit sleep mode; oscillator and booster start
pub const EXIT_SLEEP_MODE: u8 = 0x11;
/// Stop showing frame memory
pub const SET_DISPLAY_OFF: u8 = 0x28;
/// Start showing frame memory / video stream
pub const SET_DISPLAY_ON: u8 = 0x29;
