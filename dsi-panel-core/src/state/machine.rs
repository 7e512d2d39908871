//! Phase definitions and transitions

use super::events::Event;

/// Bring-up phases, in the order they are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringupPhase {
    /// Reset pulse issued; panel logic is in its power-on state
    Reset,
    /// Attached to the DSI host
    BusAttach,
    /// Software reset and vendor register table sent
    InitSequenceSent,
    /// Panel left sleep mode
    SleepExited,
    /// Panel is showing the video stream
    DisplayOn,
    /// Backlight lit; bring-up complete
    BacklightOn,
    /// A critical step failed; bring-up abandoned
    Failed(CriticalStep),
}

/// Steps whose failure aborts bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CriticalStep {
    /// Driving an existing reset line
    ResetLine,
    /// Attaching to the DSI host
    BusAttach,
    /// Exit-sleep command
    SleepExit,
    /// Display-on command
    DisplayOn,
    /// Backlight enable
    Backlight,
}

impl BringupPhase {
    /// Check if bring-up has finished successfully
    pub fn is_complete(&self) -> bool {
        matches!(self, BringupPhase::BacklightOn)
    }

    /// Check if bring-up was abandoned
    pub fn is_failed(&self) -> bool {
        matches!(self, BringupPhase::Failed(_))
    }

    /// Check if no further transition is possible
    pub fn is_terminal(&self) -> bool {
        self.is_complete() || self.is_failed()
    }

    /// Check if the panel is driving the video stream
    pub fn is_displaying(&self) -> bool {
        matches!(self, BringupPhase::DisplayOn | BringupPhase::BacklightOn)
    }

    /// Process an event and return the next phase
    ///
    /// Events that do not match the current phase leave it unchanged, so
    /// an out-of-order event can never skip or revisit a phase.
    pub fn transition(self, event: Event) -> Self {
        use BringupPhase::*;

        match (self, event) {
            (Reset, Event::Attached) => BusAttach,
            (BusAttach, Event::InitSent) => InitSequenceSent,
            (InitSequenceSent, Event::SleepExited) => SleepExited,
            (SleepExited, Event::DisplayEnabled) => DisplayOn,
            (DisplayOn, Event::BacklightEnabled) => BacklightOn,

            // Abort edge from any in-progress phase
            (
                Reset | BusAttach | InitSequenceSent | SleepExited | DisplayOn,
                Event::StepFailed(step),
            ) => Failed(step),

            _ => self,
        }
    }
}

impl core::fmt::Display for BringupPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BringupPhase::Reset => write!(f, "reset"),
            BringupPhase::BusAttach => write!(f, "bus attach"),
            BringupPhase::InitSequenceSent => write!(f, "init sequence sent"),
            BringupPhase::SleepExited => write!(f, "sleep exited"),
            BringupPhase::DisplayOn => write!(f, "display on"),
            BringupPhase::BacklightOn => write!(f, "backlight on"),
            BringupPhase::Failed(step) => write!(f, "failed at {step}"),
        }
    }
}

impl core::fmt::Display for CriticalStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CriticalStep::ResetLine => write!(f, "reset line"),
            CriticalStep::BusAttach => write!(f, "bus attach"),
            CriticalStep::SleepExit => write!(f, "sleep exit"),
            CriticalStep::DisplayOn => write!(f, "display on"),
            CriticalStep::Backlight => write!(f, "backlight enable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: [Event; 5] = [
        Event::Attached,
        Event::InitSent,
        Event::SleepExited,
        Event::DisplayEnabled,
        Event::BacklightEnabled,
    ];

    #[test]
    fn test_full_bringup() {
        let mut phase = BringupPhase::Reset;
        for event in FORWARD {
            phase = phase.transition(event);
        }
        assert_eq!(phase, BringupPhase::BacklightOn);
        assert!(phase.is_complete());
        assert!(phase.is_terminal());
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        // Skipping init must not reach SleepExited
        let phase = BringupPhase::BusAttach.transition(Event::SleepExited);
        assert_eq!(phase, BringupPhase::BusAttach);

        // Replaying an earlier event must not go backwards
        let phase = BringupPhase::DisplayOn.transition(Event::Attached);
        assert_eq!(phase, BringupPhase::DisplayOn);
    }

    #[test]
    fn test_failure_from_any_in_progress_phase() {
        let phases = [
            BringupPhase::Reset,
            BringupPhase::BusAttach,
            BringupPhase::InitSequenceSent,
            BringupPhase::SleepExited,
            BringupPhase::DisplayOn,
        ];

        for phase in phases {
            let next = phase.transition(Event::StepFailed(CriticalStep::Backlight));
            assert_eq!(next, BringupPhase::Failed(CriticalStep::Backlight));
            assert!(next.is_terminal());
        }
    }

    #[test]
    fn test_terminal_phases_stay_put() {
        let done = BringupPhase::BacklightOn;
        assert_eq!(done.transition(Event::StepFailed(CriticalStep::BusAttach)), done);

        let failed = BringupPhase::Failed(CriticalStep::SleepExit);
        for event in FORWARD {
            assert_eq!(failed.transition(event), failed);
        }
    }

    #[test]
    fn test_displaying() {
        assert!(!BringupPhase::SleepExited.is_displaying());
        assert!(BringupPhase::DisplayOn.is_displaying());
        assert!(BringupPhase::BacklightOn.is_displaying());
    }
}
