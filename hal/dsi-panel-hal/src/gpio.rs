//! GPIO error normalisation
//!
//! Reset lines are plain [`embedded_hal::digital::OutputPin`]s. Each HAL
//! has its own pin error type; this module folds them into one small enum
//! so the panel error taxonomy does not become generic over the pin.

use embedded_hal::digital::Error;

/// Errors while driving a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// The line could not be driven
    Drive,
}

impl GpioError {
    /// Convert any embedded-hal digital error
    ///
    /// embedded-hal 1.0 only defines `ErrorKind::Other` for digital pins,
    /// so every pin error maps to [`GpioError::Drive`].
    pub fn from_hal<E: Error>(_err: E) -> Self {
        GpioError::Drive
    }
}

impl core::fmt::Display for GpioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GpioError::Drive => write!(f, "GPIO line could not be driven"),
        }
    }
}

impl core::error::Error for GpioError {}

/// Map a logical line level onto an embedded-hal pin state
pub fn pin_state(high: bool) -> embedded_hal::digital::PinState {
    if high {
        embedded_hal::digital::PinState::High
    } else {
        embedded_hal::digital::PinState::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, PinState};

    #[derive(Debug)]
    struct StuckPin;

    impl Error for StuckPin {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    #[test]
    fn test_from_hal() {
        assert_eq!(GpioError::from_hal(StuckPin), GpioError::Drive);
    }

    #[test]
    fn test_pin_state() {
        assert_eq!(pin_state(true), PinState::High);
        assert_eq!(pin_state(false), PinState::Low);
    }
}
