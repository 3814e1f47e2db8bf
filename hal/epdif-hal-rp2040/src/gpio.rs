//! Pin bank addressed by GPIO number
//!
//! The panel driver refers to its control lines by number, so the pins are
//! kept as `Flex` pins in a bank indexed by GPIO number and switched
//! between input and output on demand.

use embassy_rp::gpio::{AnyPin, Flex, Level as RpLevel};
use embassy_rp::Peri;
use epdif_hal::{Level, PinControl, PinId, PinMode};

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when placing or configuring a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already in the bank
    AlreadyTaken,
    /// Pin was never handed to the bank
    NotAvailable,
}

/// GPIO pins indexed by number
///
/// Hand pins in with [`insert`](Self::insert):
///
/// ```ignore
/// let mut gpio = Rp2040Gpio::new();
/// gpio.insert(9, p.PIN_9.into())?;
/// gpio.insert(8, p.PIN_8.into())?;
/// ```
pub struct Rp2040Gpio<'d> {
    pins: [Option<Flex<'d>>; GPIO_COUNT],
}

impl Default for Rp2040Gpio<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> Rp2040Gpio<'d> {
    /// Create an empty bank
    pub fn new() -> Self {
        Self {
            pins: core::array::from_fn(|_| None),
        }
    }

    /// Add a pin under its GPIO number
    pub fn insert(&mut self, pin_num: PinId, pin: Peri<'d, AnyPin>) -> Result<(), PinError> {
        let slot = self
            .pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin)?;
        if slot.is_some() {
            return Err(PinError::AlreadyTaken);
        }
        *slot = Some(Flex::new(pin));
        Ok(())
    }

    /// Take a pin back out of the bank
    pub fn remove(&mut self, pin_num: PinId) -> Option<Flex<'d>> {
        self.pins.get_mut(pin_num as usize)?.take()
    }

    /// Check if a pin is in the bank
    pub fn is_available(&self, pin_num: PinId) -> bool {
        matches!(self.pins.get(pin_num as usize), Some(Some(_)))
    }

    fn pin_mut(&mut self, pin_num: PinId) -> Result<&mut Flex<'d>, PinError> {
        match self.pins.get_mut(pin_num as usize) {
            Some(Some(pin)) => Ok(pin),
            Some(None) => Err(PinError::NotAvailable),
            None => Err(PinError::InvalidPin),
        }
    }
}

impl PinControl for Rp2040Gpio<'_> {
    type Error = PinError;

    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error> {
        let flex = self.pin_mut(pin)?;
        match mode {
            PinMode::Input => flex.set_as_input(),
            PinMode::Output => flex.set_as_output(),
        }
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: Level) {
        match self.pin_mut(pin) {
            Ok(flex) => flex.set_level(match level {
                Level::Low => RpLevel::Low,
                Level::High => RpLevel::High,
            }),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("gpio{}: write ignored ({})", pin, _e);
            }
        }
    }

    fn read(&self, pin: PinId) -> Level {
        match self.pins.get(pin as usize) {
            Some(Some(flex)) => Level::from(flex.is_high()),
            _ => {
                #[cfg(feature = "defmt")]
                defmt::warn!("gpio{}: read of missing pin", pin);
                Level::Low
            }
        }
    }
}
