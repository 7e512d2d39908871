//! Events that advance the bring-up phase

use super::machine::CriticalStep;

/// Outcomes of bring-up steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// DSI host accepted the device
    Attached,
    /// Soft reset and register table replayed
    InitSent,
    /// Exit-sleep command accepted
    SleepExited,
    /// Display-on command accepted
    DisplayEnabled,
    /// Backlight switched on
    BacklightEnabled,
    /// A critical step failed
    StepFailed(CriticalStep),
}

impl Event {
    /// Check if this event aborts bring-up
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::StepFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_classification() {
        assert!(Event::StepFailed(CriticalStep::DisplayOn).is_failure());
        assert!(!Event::InitSent.is_failure());
        assert!(!Event::BacklightEnabled.is_failure());
    }
}
