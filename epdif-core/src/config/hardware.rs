//! Panel pin assignment
//!
//! The four discrete control lines of the panel. Data-in and clock are
//! owned by the SPI peripheral and are not listed here.

use epdif_hal::{PinId, PinMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Control pins of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelPins {
    /// Chip select (active low)
    pub cs: PinId,
    /// Data/command select (low for command, high for data)
    pub dc: PinId,
    /// Reset (active low)
    pub rst: PinId,
    /// Busy (high while the controller is working)
    pub busy: PinId,
}

impl PanelPins {
    /// Waveshare Pico e-Paper 2.9 module on a Raspberry Pi Pico
    pub const WAVESHARE_PICO: Self = Self::new(9, 8, 12, 13);

    /// Create a pin assignment
    pub const fn new(cs: PinId, dc: PinId, rst: PinId, busy: PinId) -> Self {
        Self { cs, dc, rst, busy }
    }

    /// Pin modes in the order they are applied: cs, rst, dc, busy
    pub const fn pin_modes(&self) -> [(PinId, PinMode); 4] {
        [
            (self.cs, PinMode::Output),
            (self.rst, PinMode::Output),
            (self.dc, PinMode::Output),
            (self.busy, PinMode::Input),
        ]
    }

    /// First pin number that is assigned to more than one line
    pub fn find_conflict(&self) -> Option<PinId> {
        let pins = [self.cs, self.dc, self.rst, self.busy];
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Some(*pin);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_pins() {
        let pins = PanelPins::new(10, 11, 12, 13);
        assert_eq!(pins.cs, 10);
        assert_eq!(pins.dc, 11);
        assert_eq!(pins.rst, 12);
        assert_eq!(pins.busy, 13);
    }

    #[test]
    fn test_pin_modes() {
        let pins = PanelPins::new(10, 11, 12, 13);
        assert_eq!(
            pins.pin_modes(),
            [
                (10, PinMode::Output),
                (12, PinMode::Output),
                (11, PinMode::Output),
                (13, PinMode::Input),
            ]
        );
    }

    #[test]
    fn test_find_conflict() {
        assert_eq!(PanelPins::new(10, 11, 12, 13).find_conflict(), None);
        assert_eq!(PanelPins::new(10, 11, 10, 13).find_conflict(), Some(10));
        assert_eq!(PanelPins::new(1, 2, 3, 3).find_conflict(), Some(3));
        assert_eq!(PanelPins::WAVESHARE_PICO.find_conflict(), None);
    }
}
