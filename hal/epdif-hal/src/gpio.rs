//! GPIO abstractions
//!
//! Pins are addressed by number rather than by typed handles. The panel
//! driver toggles lines it knows only as small integers, so the platform
//! has to resolve the number to a pin on every call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin identifier as understood by the platform
pub type PinId = u8;

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Level as the integer the panel driver expects (0 or 1)
    pub const fn as_u8(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    /// Any non-zero value reads as high
    pub const fn from_u8(value: u8) -> Self {
        if value == 0 {
            Level::Low
        } else {
            Level::High
        }
    }

    /// Check if the level is high
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Check if the level is low
    pub const fn is_low(self) -> bool {
        !self.is_high()
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

/// Electrical direction of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinMode {
    /// Floating input
    Input,
    /// Push-pull output
    Output,
}

/// Digital I/O addressed by pin number
///
/// Implementations map pin numbers onto the chip's pins. Only mode changes
/// report errors. Reads and writes are treated as infallible, and a platform
/// that cannot honour one (unknown pin, pin in the wrong mode) handles it on
/// its own side.
pub trait PinControl {
    /// Error type for pin configuration
    type Error;

    /// Configure the pin as input or output
    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error>;

    /// Drive an output pin to the given level
    fn write(&mut self, pin: PinId, level: Level);

    /// Sample the current level of a pin
    fn read(&self, pin: PinId) -> Level;
}

impl<T: PinControl + ?Sized> PinControl for &mut T {
    type Error = T::Error;

    fn set_mode(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error> {
        T::set_mode(self, pin, mode)
    }

    fn write(&mut self, pin: PinId, level: Level) {
        T::write(self, pin, level)
    }

    fn read(&self, pin: PinId) -> Level {
        T::read(self, pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_conversions() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert_eq!(Level::High.as_u8(), 1);
        assert_eq!(Level::Low.as_u8(), 0);
        assert_eq!(u8::from(Level::High), 1);
        assert!(bool::from(Level::High));
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(Level::from_u8(0), Level::Low);
        assert_eq!(Level::from_u8(1), Level::High);
        // Arduino-style HIGH is any non-zero value
        assert_eq!(Level::from_u8(0xFF), Level::High);
    }

    #[test]
    fn test_default_level() {
        assert!(Level::default().is_low());
    }
}
