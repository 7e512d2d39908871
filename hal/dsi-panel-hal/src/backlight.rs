//! Backlight abstractions
//!
//! The panel driver only ever switches the backlight on at the end of
//! bring-up; brightness control belongs to the backlight driver itself.

/// Errors from backlight operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BacklightError {
    /// Backlight device is not ready (supply or PWM not up)
    NotReady,
    /// Enable/disable control failed
    Control,
    /// Device-specific failure, carried as a negative errno value
    Other(i32),
}

impl core::fmt::Display for BacklightError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BacklightError::NotReady => write!(f, "Backlight not ready"),
            BacklightError::Control => write!(f, "Backlight control failed"),
            BacklightError::Other(code) => write!(f, "Backlight error {code}"),
        }
    }
}

impl core::error::Error for BacklightError {}

/// Backlight device
pub trait Backlight {
    /// Switch the backlight on
    fn enable(&mut self) -> Result<(), BacklightError>;

    /// Switch the backlight off
    fn disable(&mut self) -> Result<(), BacklightError>;
}

impl<T: Backlight + ?Sized> Backlight for &mut T {
    fn enable(&mut self) -> Result<(), BacklightError> {
        T::enable(self)
    }

    fn disable(&mut self) -> Result<(), BacklightError> {
        T::disable(self)
    }
}
