//! Panel bring-up lifecycle
//!
//! Drives one panel from reset to a lit, video-driven state:
//!
//! ```text
//! probe:          reset high ─ 1ms ─ reset low ─ 10ms ─ fix link
//! enable_display: attach ─ soft reset ─ 120ms ─ init table
//!                 ─ exit sleep ─ 125ms ─ display on ─ 20ms ─ backlight
//! ```
//!
//! (Delays shown for the RVT70HSMNWC00; each descriptor carries its own.)
//!
//! Attach, exit-sleep, display-on and backlight enable are critical: the
//! first failure stops the sequence and is returned. Nothing already done
//! is rolled back; a half-initialised panel is only recoverable by
//! starting again from reset. Init table writes are best-effort.

use dsi_panel_core::config::DisplayTiming;
use dsi_panel_core::state::{BringupPhase, CriticalStep, Event};
use dsi_panel_core::traits::Panel;
use dsi_panel_core::PanelError;
use dsi_panel_hal::gpio::pin_state;
use dsi_panel_hal::{
    Backlight, DsiDevice, GpioError, LinkConfig, PlatformDescription, Property,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::PanelDescriptor;
use crate::dcs;

/// A DSI panel instance
///
/// Owns its collaborator handles for the duration of bring-up. Pass
/// `&mut` references as `D`/`B` to keep ownership with the caller; every
/// collaborator trait is implemented for mutable references.
pub struct DsiPanel<D, R, B> {
    descriptor: &'static PanelDescriptor,
    bus: D,
    /// `None` when the board has no reset line wired to the panel
    reset: Option<R>,
    backlight: B,
    link: LinkConfig,
}

impl<D, R, B> DsiPanel<D, R, B>
where
    D: DsiDevice,
    R: OutputPin,
    B: Backlight,
{
    /// Create a panel from already-resolved handles
    pub fn new(
        descriptor: &'static PanelDescriptor,
        bus: D,
        reset: Option<R>,
        backlight: B,
    ) -> Self {
        Self {
            descriptor,
            bus,
            reset,
            backlight,
            link: LinkConfig::UNSET,
        }
    }

    /// Resolve the reset line and backlight from the platform description
    ///
    /// A missing reset line is tolerated: the panel is then brought up
    /// without a hardware reset pulse. Any other reset lookup failure, and
    /// any backlight lookup failure, is a configuration error.
    pub fn from_platform<P>(
        descriptor: &'static PanelDescriptor,
        platform: &mut P,
        bus: D,
    ) -> Result<Self, PanelError>
    where
        P: PlatformDescription<Gpio = R, Backlight = B>,
    {
        let reset = match platform.output_gpio(Property::ResetGpios) {
            Ok(pin) => Some(pin),
            Err(e) => {
                log::warn!("{}: cannot get reset GPIO: {}", descriptor.name, e);
                if !e.is_not_found() {
                    return Err(PanelError::Configuration(e));
                }
                None
            }
        };

        let backlight = platform.backlight(Property::Backlight).map_err(|e| {
            log::error!("{}: cannot get backlight: {}", descriptor.name, e);
            PanelError::Configuration(e)
        })?;

        Ok(Self::new(descriptor, bus, reset, backlight))
    }

    /// Pulse the reset line and fix the DSI link characteristics
    ///
    /// Without a reset line the holds are still observed so the panel sees
    /// the same power-on timing.
    pub fn probe<DL: DelayNs>(&mut self, delay: &mut DL) -> Result<(), PanelError> {
        let delays = self.descriptor.delays;

        self.drive_reset(true)?;
        delay.delay_ms(delays.reset_assert_ms);
        self.drive_reset(false)?;
        delay.delay_ms(delays.reset_deassert_ms);

        self.link = self.descriptor.link;
        log::debug!(
            "{}: {} lanes, {:?}, flags {:#x}",
            self.descriptor.name,
            self.link.lanes,
            self.link.format,
            self.link.mode_flags.bits()
        );

        Ok(())
    }

    /// Attach, initialise and light the panel
    ///
    /// Expects [`probe`](Self::probe) to have run: the host is attached with
    /// the current [`link_config`](Self::link_config), which is
    /// [`LinkConfig::UNSET`] on an unprobed panel and left for the host to
    /// refuse. Returns the first critical failure; later steps are not
    /// attempted.
    pub fn enable_display<DL: DelayNs>(&mut self, delay: &mut DL) -> Result<(), PanelError> {
        let delays = self.descriptor.delays;
        let init = self.descriptor.init;

        if !self.link.is_set() {
            log::warn!("{}: attaching before probe", self.descriptor.name);
        }
        let result = self.bus.attach(&self.link).map_err(PanelError::from);
        let phase = self.advance(
            BringupPhase::Reset,
            result,
            CriticalStep::BusAttach,
            Event::Attached,
        )?;

        // Software reset must settle before any parameter write
        dcs::send(&mut self.bus, &init.soft_reset);
        delay.delay_ms(delays.soft_reset_ms);
        for cmd in init.commands {
            dcs::send(&mut self.bus, cmd);
        }
        // Best-effort writes only; this phase cannot fail
        let phase = phase.transition(Event::InitSent);
        log::debug!("{}: {}", self.descriptor.name, phase);

        let result = dcs::exit_sleep_mode(&mut self.bus).map_err(PanelError::from);
        let phase = self.advance(phase, result, CriticalStep::SleepExit, Event::SleepExited)?;
        delay.delay_ms(delays.sleep_exit_ms);

        let result = dcs::set_display_on(&mut self.bus).map_err(PanelError::from);
        let phase = self.advance(phase, result, CriticalStep::DisplayOn, Event::DisplayEnabled)?;
        delay.delay_ms(delays.display_on_ms);

        let result = self.backlight.enable().map_err(PanelError::from);
        let phase = self.advance(phase, result, CriticalStep::Backlight, Event::BacklightEnabled)?;

        log::info!("{}: {}", self.descriptor.name, phase);
        Ok(())
    }

    /// Static video timing; side-effect free and valid in any phase
    pub fn display_timing(&self) -> DisplayTiming {
        self.descriptor.timing
    }

    /// DSI link characteristics ([`LinkConfig::UNSET`] before probe)
    pub fn link_config(&self) -> LinkConfig {
        self.link
    }

    /// The panel variant this instance drives
    pub fn descriptor(&self) -> &'static PanelDescriptor {
        self.descriptor
    }

    /// Check whether a hardware reset line is available
    pub fn has_reset_line(&self) -> bool {
        self.reset.is_some()
    }

    /// Give back the collaborator handles
    pub fn release(self) -> (D, Option<R>, B) {
        (self.bus, self.reset, self.backlight)
    }

    fn drive_reset(&mut self, asserted: bool) -> Result<(), PanelError> {
        let Some(pin) = self.reset.as_mut() else {
            return Ok(());
        };

        pin.set_state(pin_state(asserted)).map_err(|e| {
            let err = GpioError::from_hal(e);
            log::error!(
                "{}: {}: {}",
                self.descriptor.name,
                BringupPhase::Failed(CriticalStep::ResetLine),
                err
            );
            PanelError::Gpio(err)
        })
    }

    /// Record the outcome of a step and move to the next phase
    fn advance(
        &self,
        phase: BringupPhase,
        result: Result<(), PanelError>,
        step: CriticalStep,
        event: Event,
    ) -> Result<BringupPhase, PanelError> {
        match result {
            Ok(()) => {
                let next = phase.transition(event);
                log::debug!("{}: {}", self.descriptor.name, next);
                Ok(next)
            }
            Err(e) => {
                let failed = phase.transition(Event::StepFailed(step));
                log::error!("{}: {}: {}", self.descriptor.name, failed, e);
                Err(e)
            }
        }
    }
}

impl<D, R, B> Panel for DsiPanel<D, R, B>
where
    D: DsiDevice,
    R: OutputPin,
    B: Backlight,
{
    type Error = PanelError;

    fn probe<DL: DelayNs>(&mut self, delay: &mut DL) -> Result<(), PanelError> {
        DsiPanel::probe(self, delay)
    }

    fn enable_backlight<DL: DelayNs>(&mut self, delay: &mut DL) -> Result<(), PanelError> {
        self.enable_display(delay)
    }

    fn display_timing(&self) -> DisplayTiming {
        DsiPanel::display_timing(self)
    }
}
