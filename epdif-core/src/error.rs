//! Adapter errors

use epdif_hal::PinId;

/// Errors from bus initialisation
///
/// `P` is the platform's pin configuration error, `S` the SPI port's
/// session error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError<P, S> {
    /// A control pin could not be switched to its mode
    PinConfig {
        /// Pin that failed
        pin: PinId,
        /// Platform error
        error: P,
    },
    /// The SPI session could not be opened
    SessionOpen(S),
}

impl<P, S> InitError<P, S> {
    /// Check if the failure happened while configuring pins
    pub fn is_pin_config(&self) -> bool {
        matches!(self, InitError::PinConfig { .. })
    }

    /// Check if the failure happened while opening the session
    pub fn is_session_open(&self) -> bool {
        matches!(self, InitError::SessionOpen(_))
    }
}
