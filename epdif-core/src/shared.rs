//! SPI port shared between several users
//!
//! [`BusAdapter`](crate::BusAdapter) needs exclusive access to its port.
//! When the same physical bus also serves other devices, each user gets
//! its own [`SharedSpiPort`] handle onto one mutex-protected port.
//!
//! The lock is held for a single port call only. Keeping other users off
//! the bus between `begin_transaction` and `end_transaction` is still up
//! to the callers.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use epdif_hal::{SpiPort, SpiSettings};

/// Handle onto a mutex-protected SPI port
pub struct SharedSpiPort<'a, M: RawMutex, S> {
    bus: &'a Mutex<M, RefCell<S>>,
}

impl<'a, M: RawMutex, S> SharedSpiPort<'a, M, S> {
    /// Create a handle onto the shared port
    pub fn new(bus: &'a Mutex<M, RefCell<S>>) -> Self {
        Self { bus }
    }
}

impl<M: RawMutex, S: SpiPort> SpiPort for SharedSpiPort<'_, M, S> {
    type Error = S::Error;

    fn begin_transaction(&mut self, settings: &SpiSettings) -> Result<(), Self::Error> {
        self.bus.lock(|bus| bus.borrow_mut().begin_transaction(settings))
    }

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.bus.lock(|bus| bus.borrow_mut().begin())
    }

    fn end(&mut self) {
        self.bus.lock(|bus| bus.borrow_mut().end())
    }

    fn end_transaction(&mut self) {
        self.bus.lock(|bus| bus.borrow_mut().end_transaction())
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        self.bus.lock(|bus| bus.borrow_mut().transfer(byte))
    }
}
