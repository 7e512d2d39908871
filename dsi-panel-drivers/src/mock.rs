//! Test doubles for the collaborator traits
//!
//! Every mock appends to one shared [`Log`] so tests can assert the exact
//! interleaving of GPIO, delay, bus and backlight operations.

use core::cell::RefCell;

use dsi_panel_hal::{
    Backlight, BacklightError, DsiDevice, DsiError, LinkConfig, LookupError, PlatformDescription,
    Property,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use heapless::Vec;

/// Recorded collaborator operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Reset line driven (true = asserted/high)
    Reset(bool),
    /// Blocking delay
    DelayMs(u32),
    /// DSI attach with the link handed to the host
    Attach(LinkConfig),
    /// DSI write with the exact wire bytes
    Write(Vec<u8, 2>),
    /// Backlight enable
    BacklightOn,
}

/// Shared operation log
pub type Log = RefCell<Vec<Op, 64>>;

/// Build a [`Op::Write`] from wire bytes
pub fn write_op(bytes: &[u8]) -> Op {
    Op::Write(Vec::from_slice(bytes).expect("DCS writes are at most 2 bytes"))
}

fn record(log: &Log, op: Op) {
    log.borrow_mut().push(op).expect("mock log full");
}

/// Mock DSI peripheral
pub struct MockDsi<'a> {
    log: &'a Log,
    fail_attach: bool,
    failing: &'a [u8],
}

impl<'a> MockDsi<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            fail_attach: false,
            failing: &[],
        }
    }

    /// Make attach fail
    pub fn failing_attach(mut self) -> Self {
        self.fail_attach = true;
        self
    }

    /// Make writes whose opcode is in `opcodes` fail (after being recorded)
    pub fn failing_opcodes(mut self, opcodes: &'a [u8]) -> Self {
        self.failing = opcodes;
        self
    }
}

impl DsiDevice for MockDsi<'_> {
    fn attach(&mut self, link: &LinkConfig) -> Result<(), DsiError> {
        record(self.log, Op::Attach(*link));
        if self.fail_attach {
            Err(DsiError::NotAttached)
        } else {
            Ok(())
        }
    }

    fn write_buffer(&mut self, data: &[u8]) -> Result<usize, DsiError> {
        record(self.log, write_op(data));
        if self.failing.contains(&data[0]) {
            Err(DsiError::Io)
        } else {
            Ok(data.len())
        }
    }
}

/// Pin fault reported by a failing [`MockPin`]
#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Mock reset line
pub struct MockPin<'a> {
    log: &'a Log,
    fail: bool,
}

impl<'a> MockPin<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log, fail: false }
    }

    /// Make every drive attempt fail
    pub fn faulty(log: &'a Log) -> Self {
        Self { log, fail: true }
    }

    fn drive(&mut self, high: bool) -> Result<(), PinFault> {
        if self.fail {
            return Err(PinFault);
        }
        record(self.log, Op::Reset(high));
        Ok(())
    }
}

impl ErrorType for MockPin<'_> {
    type Error = PinFault;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

/// Mock blocking delay
pub struct MockDelay<'a> {
    log: &'a Log,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        record(self.log, Op::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        record(self.log, Op::DelayMs(ms));
    }
}

/// Mock backlight
pub struct MockBacklight<'a> {
    log: &'a Log,
    fail: Option<BacklightError>,
}

impl<'a> MockBacklight<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log, fail: None }
    }

    /// Make enable fail with `err` (after being recorded)
    pub fn failing(log: &'a Log, err: BacklightError) -> Self {
        Self {
            log,
            fail: Some(err),
        }
    }
}

impl Backlight for MockBacklight<'_> {
    fn enable(&mut self) -> Result<(), BacklightError> {
        record(self.log, Op::BacklightOn);
        match self.fail {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn disable(&mut self) -> Result<(), BacklightError> {
        Ok(())
    }
}

/// Mock platform description
///
/// `None` means the property resolves; `Some(err)` makes the lookup fail.
pub struct MockPlatform<'a> {
    pub log: &'a Log,
    pub reset: Option<LookupError>,
    pub backlight: Option<LookupError>,
}

impl<'a> PlatformDescription for MockPlatform<'a> {
    type Gpio = MockPin<'a>;
    type Backlight = MockBacklight<'a>;

    fn output_gpio(&mut self, property: Property) -> Result<Self::Gpio, LookupError> {
        assert_eq!(property, Property::ResetGpios);
        match self.reset {
            Some(err) => Err(err),
            None => Ok(MockPin::new(self.log)),
        }
    }

    fn backlight(&mut self, property: Property) -> Result<Self::Backlight, LookupError> {
        assert_eq!(property, Property::Backlight);
        match self.backlight {
            Some(err) => Err(err),
            None => Ok(MockBacklight::new(self.log)),
        }
    }
}
