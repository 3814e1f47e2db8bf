//! Driver-facing interface
//!
//! The external panel driver is written against this trait only. Pin
//! numbers it passes in are the ones it was configured with; the
//! interface does not check them.

use epdif_hal::{Level, PinId};

/// Operations the e-paper panel driver consumes
///
/// All calls block until the platform returns. Callers must serialise
/// access themselves; none of the operations may be interleaved from
/// several execution contexts.
pub trait EpdInterface {
    /// Error type for bus initialisation
    type Error;

    /// Configure the control pins and (re)open the SPI session
    ///
    /// May be called again to switch the panel between full and partial
    /// refresh setups. Each repeated call tears the previous session down
    /// first.
    fn if_init(&mut self) -> Result<(), Self::Error>;

    /// Drive a pin to the given level
    fn digital_write(&mut self, pin: PinId, level: Level);

    /// Sample a pin
    fn digital_read(&mut self, pin: PinId) -> Level;

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Shift one byte out to the panel with chip-select asserted
    fn spi_transfer(&mut self, data: u8);
}
