//! Recording test doubles for the platform traits
//!
//! All three doubles append to one shared [`Trace`], so tests can assert
//! on the exact interleaving of pin, bus and delay calls. Failures are
//! injected through the trace too, which still works after the doubles
//! have been moved into an adapter.

use core::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use epdif_hal::{Level, PinControl, PinId, PinMode, SpiPort, SpiSettings};
use heapless::Vec;

/// Maximum number of recorded calls per test
pub const TRACE_CAPACITY: usize = 1024;

/// One observed platform call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SetMode(PinId, PinMode),
    Write(PinId, Level),
    BeginTransaction(SpiSettings),
    Begin,
    End,
    EndTransaction,
    Transfer(u8),
    DelayMs(u32),
    DelayUs(u32),
    DelayNs(u32),
}

impl Event {
    pub fn is_set_mode(&self) -> bool {
        matches!(self, Event::SetMode(..))
    }
}

#[derive(Default)]
struct Faults {
    pin: Cell<Option<PinId>>,
    begin_transaction: Cell<bool>,
    begin: Cell<bool>,
}

/// Shared call log and failure switches
#[derive(Clone, Default)]
pub struct Trace {
    events: Rc<RefCell<Vec<Event, TRACE_CAPACITY>>>,
    faults: Rc<Faults>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.events
            .borrow_mut()
            .push(event)
            .expect("trace capacity exceeded");
    }

    pub fn events(&self) -> std::vec::Vec<Event> {
        self.events.borrow().iter().copied().collect()
    }

    /// Recorded events without pin mode changes
    pub fn bus_events(&self) -> std::vec::Vec<Event> {
        self.events
            .borrow()
            .iter()
            .copied()
            .filter(|e| !e.is_set_mode())
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Reject mode changes of `pin`
    pub fn fail_pin(&self, pin: Option<PinId>) {
        self.faults.pin.set(pin);
    }

    /// Reject `begin_transaction`
    pub fn fail_begin_transaction(&self, fail: bool) {
        self.faults.begin_transaction.set(fail);
    }

    /// Reject `begin`
    pub fn fail_begin(&self, fail: bool) {
        self.faults.begin.set(fail);
    }
}

/// Pin configuration failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

/// Session open failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSpiError;

/// GPIO bank with one latch per pin number
pub struct MockGpio {
    trace: Trace,
    levels: [Level; 256],
}

impl MockGpio {
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            levels: [Level::Low; 256],
        }
    }

    /// Drive an input line from the outside
    pub fn set_input(&mut self, pin: PinId, level: Level) {
        self.levels[pin as usize] = level;
    }
}

impl PinControl for MockGpio {
    type Error = MockPinError;

    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error> {
        if self.trace.faults.pin.get() == Some(pin) {
            return Err(MockPinError);
        }
        self.trace.push(Event::SetMode(pin, mode));
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: Level) {
        self.trace.push(Event::Write(pin, level));
        self.levels[pin as usize] = level;
    }

    fn read(&self, pin: PinId) -> Level {
        self.levels[pin as usize]
    }
}

/// SPI port that records calls and answers every transfer with `reply`
pub struct MockSpi {
    trace: Trace,
    pub reply: u8,
}

impl MockSpi {
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            reply: 0xFF,
        }
    }
}

impl SpiPort for MockSpi {
    type Error = MockSpiError;

    fn begin_transaction(&mut self, settings: &SpiSettings) -> Result<(), Self::Error> {
        if self.trace.faults.begin_transaction.get() {
            return Err(MockSpiError);
        }
        self.trace.push(Event::BeginTransaction(*settings));
        Ok(())
    }

    fn begin(&mut self) -> Result<(), Self::Error> {
        if self.trace.faults.begin.get() {
            return Err(MockSpiError);
        }
        self.trace.push(Event::Begin);
        Ok(())
    }

    fn end(&mut self) {
        self.trace.push(Event::End);
    }

    fn end_transaction(&mut self) {
        self.trace.push(Event::EndTransaction);
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        self.trace.push(Event::Transfer(byte));
        self.reply
    }
}

/// Delay that returns immediately and records the request
pub struct MockDelay {
    trace: Trace,
}

impl MockDelay {
    pub fn new(trace: Trace) -> Self {
        Self { trace }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.trace.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.trace.push(Event::DelayMs(ms));
    }
}

/// Fresh set of doubles sharing one trace
pub fn backend() -> (Trace, MockSpi, MockGpio, MockDelay) {
    let trace = Trace::new();
    (
        trace.clone(),
        MockSpi::new(trace.clone()),
        MockGpio::new(trace.clone()),
        MockDelay::new(trace),
    )
}
