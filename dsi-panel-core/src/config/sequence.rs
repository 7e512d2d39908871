//! Init sequence and settle delay definitions
//!
//! A panel's register initialisation is an ordered table of [`Command`]s.
//! Panels do not echo status, so the table is replayed exactly as
//! declared: a missing or reordered entry corrupts panel state without
//! any way to detect it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dcs;

/// A single DCS write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Opcode only, encoded as `[opcode]`
    Write(u8),
    /// Opcode with one parameter byte, encoded as `[opcode, value]`
    WriteParam(u8, u8),
}

impl Command {
    /// The DCS opcode
    pub const fn opcode(&self) -> u8 {
        match self {
            Command::Write(op) | Command::WriteParam(op, _) => *op,
        }
    }

    /// The parameter byte, if any
    pub const fn param(&self) -> Option<u8> {
        match self {
            Command::Write(_) => None,
            Command::WriteParam(_, value) => Some(*value),
        }
    }

    /// Encode into the wire buffer handed to the DSI host
    ///
    /// Returns the used prefix of `buf` (1 or 2 bytes).
    pub fn encode<'b>(&self, buf: &'b mut [u8; 2]) -> &'b [u8] {
        match *self {
            Command::Write(op) => {
                buf[0] = op;
                &buf[..1]
            }
            Command::WriteParam(op, value) => {
                buf[0] = op;
                buf[1] = value;
                &buf[..2]
            }
        }
    }
}

/// Ordered vendor register initialisation
///
/// Replayed after bus attach: the software reset command first, then the
/// post-reset settle delay, then `commands` in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitSequence {
    /// Software reset issued before any parameter write
    pub soft_reset: Command,
    /// Register writes, in replay order
    pub commands: &'static [Command],
}

impl InitSequence {
    /// Create a sequence that starts with the standard DCS soft reset
    pub const fn new(commands: &'static [Command]) -> Self {
        Self {
            soft_reset: Command::Write(dcs::SOFT_RESET),
            commands,
        }
    }

    /// Number of bus writes the sequence issues, soft reset included
    pub const fn len(&self) -> usize {
        self.commands.len() + 1
    }

    /// A sequence always contains at least the soft reset
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// All writes in replay order, soft reset first
    pub fn iter(&self) -> impl Iterator<Item = &Command> + '_ {
        core::iter::once(&self.soft_reset).chain(self.commands.iter())
    }
}

/// Mandatory settle delays in milliseconds
///
/// These are floors dictated by the panel's power-on sequencing; shorter
/// holds risk an unreset or unresponsive panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BringupDelays {
    /// Hold after asserting the reset line
    pub reset_assert_ms: u32,
    /// Hold after deasserting the reset line
    pub reset_deassert_ms: u32,
    /// Settle after the software reset command
    pub soft_reset_ms: u32,
    /// Settle after exit-sleep before display-on is accepted
    pub sleep_exit_ms: u32,
    /// Settle after display-on before the backlight is lit
    pub display_on_ms: u32,
}
