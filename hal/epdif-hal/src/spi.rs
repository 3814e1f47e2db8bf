//! SPI port abstractions
//!
//! Models a bus port with an explicit session lifecycle: a transaction is
//! opened with fixed settings, the port is started, bytes are exchanged,
//! and the session is torn down again before it can be reconfigured.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SPI master port with session lifecycle
///
/// The port is owned by the caller. Adapters borrow it, and more than
/// one piece of code may drive the same physical bus, so the
/// implementation must not assume it is the only user between sessions.
pub trait SpiPort {
    /// Error type for opening a session
    type Error;

    /// Apply bus settings and open a transaction
    fn begin_transaction(&mut self, settings: &SpiSettings) -> Result<(), Self::Error>;

    /// Start the bus session
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// End the bus session
    fn end(&mut self);

    /// Close the current transaction
    fn end_transaction(&mut self);

    /// Exchange one byte (full duplex)
    ///
    /// Returns the byte clocked in while `byte` was clocked out.
    fn transfer(&mut self, byte: u8) -> u8;
}

impl<T: SpiPort + ?Sized> SpiPort for &mut T {
    type Error = T::Error;

    fn begin_transaction(&mut self, settings: &SpiSettings) -> Result<(), Self::Error> {
        T::begin_transaction(self, settings)
    }

    fn begin(&mut self) -> Result<(), Self::Error> {
        T::begin(self)
    }

    fn end(&mut self) {
        T::end(self)
    }

    fn end_transaction(&mut self) {
        T::end_transaction(self)
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        T::transfer(self, byte)
    }
}

/// SPI session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiSettings {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Bit order on the wire
    pub bit_order: BitOrder,
    /// Clock polarity/phase
    pub mode: Mode,
}

impl SpiSettings {
    /// Create new settings
    pub const fn new(frequency: u32, bit_order: BitOrder, mode: Mode) -> Self {
        Self {
            frequency,
            bit_order,
            mode,
        }
    }

    /// Clock polarity for these settings
    pub fn polarity(&self) -> Polarity {
        let (polarity, _) = self.mode.into();
        polarity
    }

    /// Clock phase for these settings
    pub fn phase(&self) -> Phase {
        let (_, phase) = self.mode.into();
        phase
    }
}

/// Bit order of each transferred byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}
