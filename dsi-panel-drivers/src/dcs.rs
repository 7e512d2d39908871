//! DCS command encoder
//!
//! Turns a [`Command`] into exactly one DSI write. Two flavours:
//!
//! - Best-effort ([`send_command`], [`send_command_with_param`], [`send`]):
//!   failures are logged with the numeric error and swallowed. Vendor
//!   register pokes during init tolerate transient bus errors.
//! - Critical ([`write`], [`exit_sleep_mode`], [`set_display_on`]):
//!   failures are returned to the caller, which aborts bring-up.
//!
//! No buffering, batching or retries happen here.

use dsi_panel_core::config::Command;
use dsi_panel_core::dcs::{EXIT_SLEEP_MODE, SET_DISPLAY_ON};
use dsi_panel_hal::{DsiDevice, DsiError};

/// Issue one command as a single bus transaction
pub fn write<D: DsiDevice + ?Sized>(dev: &mut D, cmd: &Command) -> Result<(), DsiError> {
    let mut buf = [0u8; 2];
    dev.write_buffer(cmd.encode(&mut buf))?;
    Ok(())
}

/// Issue one command, logging and discarding any failure
pub fn send<D: DsiDevice + ?Sized>(dev: &mut D, cmd: &Command) {
    if let Err(e) = write(dev, cmd) {
        log::error!("DCS write {:#04x} failed: {}", cmd.opcode(), e.code());
    }
}

/// Best-effort `[opcode]` write
pub fn send_command<D: DsiDevice + ?Sized>(dev: &mut D, opcode: u8) {
    send(dev, &Command::Write(opcode));
}

/// Best-effort `[opcode, value]` write
pub fn send_command_with_param<D: DsiDevice + ?Sized>(dev: &mut D, opcode: u8, value: u8) {
    send(dev, &Command::WriteParam(opcode, value));
}

/// Take the panel out of sleep mode
pub fn exit_sleep_mode<D: DsiDevice + ?Sized>(dev: &mut D) -> Result<(), DsiError> {
    write(dev, &Command::Write(EXIT_SLEEP_MODE))
}

/// Start showing the video stream
pub fn set_display_on<D: DsiDevice + ?Sized>(dev: &mut D) -> Result<(), DsiError> {
    write(dev, &Command::Write(SET_DISPLAY_ON))
}
