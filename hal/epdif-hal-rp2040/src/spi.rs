//! SPI port for RP2040
//!
//! Wraps a blocking `embassy_rp` SPI driver. The peripheral has no separate
//! "begin"/"end" step, so the session is tracked in software and the
//! settings are applied when a transaction is opened.

use embassy_rp::spi::{Blocking, Config, Instance, Phase, Polarity, Spi};
use epdif_hal::spi::{Phase as HalPhase, Polarity as HalPolarity};
use epdif_hal::{BitOrder, SpiPort, SpiSettings};

/// Errors from opening an SPI session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError {
    /// SSP only shifts MSB first
    UnsupportedBitOrder,
    /// Frequency of 0 Hz requested
    InvalidFrequency,
    /// `begin` called without an open transaction
    NoTransaction,
}

/// RP2040 SPI port with session tracking
pub struct Rp2040SpiPort<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
    in_transaction: bool,
    active: bool,
}

impl<'d, T: Instance> Rp2040SpiPort<'d, T> {
    /// Wrap an SPI driver
    ///
    /// The driver's own config is overwritten by the first
    /// `begin_transaction`.
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self {
            spi,
            in_transaction: false,
            active: false,
        }
    }

    /// Check if a session is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get the raw SPI driver for low-level access
    pub fn inner(&mut self) -> &mut Spi<'d, T, Blocking> {
        &mut self.spi
    }

    fn to_config(settings: &SpiSettings) -> Config {
        let mut config = Config::default();
        config.frequency = settings.frequency;
        config.polarity = match settings.polarity() {
            HalPolarity::IdleLow => Polarity::IdleLow,
            HalPolarity::IdleHigh => Polarity::IdleHigh,
        };
        config.phase = match settings.phase() {
            HalPhase::CaptureOnFirstTransition => Phase::CaptureOnFirstTransition,
            HalPhase::CaptureOnSecondTransition => Phase::CaptureOnSecondTransition,
        };
        config
    }
}

impl<'d, T: Instance> SpiPort for Rp2040SpiPort<'d, T> {
    type Error = SpiError;

    fn begin_transaction(&mut self, settings: &SpiSettings) -> Result<(), Self::Error> {
        if settings.bit_order != BitOrder::MsbFirst {
            return Err(SpiError::UnsupportedBitOrder);
        }
        if settings.frequency == 0 {
            return Err(SpiError::InvalidFrequency);
        }

        self.spi.set_config(&Self::to_config(settings));
        self.in_transaction = true;
        Ok(())
    }

    fn begin(&mut self) -> Result<(), Self::Error> {
        if !self.in_transaction {
            return Err(SpiError::NoTransaction);
        }
        self.active = true;
        Ok(())
    }

    fn end(&mut self) {
        self.active = false;
    }

    fn end_transaction(&mut self) {
        self.in_transaction = false;
    }

    fn transfer(&mut self, byte: u8) -> u8 {
        #[cfg(feature = "defmt")]
        if !self.active {
            defmt::warn!("spi: transfer outside a session");
        }

        let mut buf = [byte];
        match self.spi.blocking_transfer_in_place(&mut buf) {
            Ok(()) => buf[0],
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("spi: transfer failed: {}", defmt::Debug2Format(&_e));
                0
            }
        }
    }
}
