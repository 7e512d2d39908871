//! Platform description lookup
//!
//! Board description data (a devicetree, a static board table) names the
//! resources a panel uses. This module provides the trait that resolves
//! those names into usable handles before bring-up starts.

use crate::backlight::Backlight;

/// Named references a panel resolves from the platform description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Property {
    /// Panel reset line (`reset-gpios`)
    ResetGpios,
    /// Backlight device phandle (`backlight`)
    Backlight,
}

impl Property {
    /// Property name as written in the platform description
    pub const fn name(self) -> &'static str {
        match self {
            Property::ResetGpios => "reset-gpios",
            Property::Backlight => "backlight",
        }
    }
}

/// Errors from platform description lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LookupError {
    /// The property is absent from the description
    NotFound,
    /// The property exists but does not reference a valid resource
    InvalidReference,
    /// The referenced device exists but failed to probe
    DeviceNotReady,
    /// The resource is already claimed by another driver
    Busy,
}

impl LookupError {
    /// Check whether this is the "property absent" case
    ///
    /// Callers use this to tell an optional resource that was simply not
    /// described apart from a broken description.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}

impl core::fmt::Display for LookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LookupError::NotFound => write!(f, "Property not found"),
            LookupError::InvalidReference => write!(f, "Invalid reference"),
            LookupError::DeviceNotReady => write!(f, "Referenced device not ready"),
            LookupError::Busy => write!(f, "Resource already claimed"),
        }
    }
}

impl core::error::Error for LookupError {}

/// Resolves named panel resources from platform description data
///
/// Implementations are expected to configure a returned GPIO as an output
/// before handing it over.
pub trait PlatformDescription {
    /// GPIO handle type for output lines
    type Gpio: embedded_hal::digital::OutputPin;

    /// Backlight handle type
    type Backlight: Backlight;

    /// Request an output GPIO by property
    ///
    /// Returns [`LookupError::NotFound`] if the property is absent.
    fn output_gpio(&mut self, property: Property) -> Result<Self::Gpio, LookupError>;

    /// Resolve a backlight device by property
    ///
    /// Returns [`LookupError::NotFound`] if the property is absent.
    fn backlight(&mut self, property: Property) -> Result<Self::Backlight, LookupError>;
}
