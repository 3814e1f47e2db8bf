//! Bus adapter between the panel driver and the platform
//!
//! [`BusAdapter`] borrows the caller's SPI port for its whole lifetime and
//! owns the pin controller and delay provider. It adds no buffering:
//! every operation is passed straight through to the platform and
//! returns when the platform does.
//!
//! # Usage
//!
//! ```ignore
//! let mut spi = Rp2040SpiPort::new(spi0);
//! let mut epd = BusAdapter::new(&mut spi, gpio, Delay, PanelPins::WAVESHARE_PICO);
//! epd.init()?;
//! epd.spi_transfer(0x12); // SW reset
//! ```

use embedded_hal::delay::DelayNs;
use epdif_hal::{BitOrder, Level, Mode, PinControl, PinId, SpiPort, SpiSettings};

use crate::config::PanelPins;
use crate::error::InitError;
use crate::interface::EpdInterface;

/// Session settings the panel controller is driven with
pub const EPD_SPI_SETTINGS: SpiSettings =
    SpiSettings::new(2_000_000, BitOrder::MsbFirst, Mode::Mode0);

/// Adapter exposing the panel driver's five operations
///
/// # Ownership
///
/// The SPI port is borrowed, not owned: the adapter cannot outlive it, and
/// while the adapter exists nothing else can reach the port through that
/// borrow. Code that has to share one physical bus must go through
/// [`SharedSpiPort`](crate::shared::SharedSpiPort) instead.
///
/// # Concurrency
///
/// Single owner, single caller. All operations block and none may be
/// interleaved from several execution contexts.
pub struct BusAdapter<'a, S, P, D> {
    spi: &'a mut S,
    gpio: P,
    delay: D,
    pins: PanelPins,
    /// Set once the first session was opened successfully
    initialized: bool,
}

impl<'a, S, P, D> BusAdapter<'a, S, P, D> {
    /// Create a new adapter
    ///
    /// Does not touch the hardware and does not validate the pin numbers.
    /// Pins are configured by the first [`init`](Self::init).
    pub fn new(spi: &'a mut S, gpio: P, delay: D, pins: PanelPins) -> Self {
        Self {
            spi,
            gpio,
            delay,
            pins,
            initialized: false,
        }
    }

    /// Pin assignment this adapter was built with
    pub fn pins(&self) -> &PanelPins {
        &self.pins
    }

    /// Check if a session has been opened at least once
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Give back the pin controller and delay, ending the port borrow
    pub fn release(self) -> (P, D) {
        (self.gpio, self.delay)
    }
}

impl<'a, S, P, D> BusAdapter<'a, S, P, D>
where
    S: SpiPort,
    P: PinControl,
    D: DelayNs,
{
    /// Configure the control pins and (re)open the SPI session
    ///
    /// CS, RST and DC become outputs and BUSY an input. On every call after
    /// the first successful one, the running session is ended and its
    /// transaction closed before a new one is opened with
    /// [`EPD_SPI_SETTINGS`]. This is how the panel switches between full
    /// and partial refresh setups.
    ///
    /// On error the adapter stays in its previous initialised state.
    pub fn init(&mut self) -> Result<(), InitError<P::Error, S::Error>> {
        self.configure_pins()?;

        if self.initialized {
            #[cfg(feature = "defmt")]
            defmt::debug!("epd: closing previous SPI session");

            self.spi.end();
            self.spi.end_transaction();
        }

        self.open_session().map_err(InitError::SessionOpen)?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("epd: SPI session open ({} Hz)", EPD_SPI_SETTINGS.frequency);

        Ok(())
    }

    fn configure_pins(&mut self) -> Result<(), InitError<P::Error, S::Error>> {
        for (pin, mode) in self.pins.pin_modes() {
            self.gpio
                .set_mode(pin, mode)
                .map_err(|error| InitError::PinConfig { pin, error })?;
        }
        Ok(())
    }

    fn open_session(&mut self) -> Result<(), S::Error> {
        self.spi.begin_transaction(&EPD_SPI_SETTINGS)?;

        // Don't leave a half-open transaction behind
        if let Err(e) = self.spi.begin() {
            self.spi.end_transaction();
            return Err(e);
        }
        Ok(())
    }

    /// Drive a pin to the given level
    pub fn digital_write(&mut self, pin: PinId, level: Level) {
        self.gpio.write(pin, level);
    }

    /// Sample a pin
    pub fn digital_read(&self, pin: PinId) -> Level {
        self.gpio.read(pin)
    }

    /// Block for `ms` milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Send one byte to the panel
    ///
    /// Chip-select is pulled low for exactly one byte. The port is full
    /// duplex but the panel interface is write-only, so the byte clocked in
    /// is discarded.
    pub fn spi_transfer(&mut self, data: u8) {
        self.gpio.write(self.pins.cs, Level::Low);
        let _ = self.spi.transfer(data);
        self.gpio.write(self.pins.cs, Level::High);
    }
}

impl<'a, S, P, D> EpdInterface for BusAdapter<'a, S, P, D>
where
    S: SpiPort,
    P: PinControl,
    D: DelayNs,
{
    type Error = InitError<P::Error, S::Error>;

    fn if_init(&mut self) -> Result<(), Self::Error> {
        Self::init(self)
    }

    fn digital_write(&mut self, pin: PinId, level: Level) {
        Self::digital_write(self, pin, level)
    }

    fn digital_read(&mut self, pin: PinId) -> Level {
        Self::digital_read(self, pin)
    }

    fn delay_ms(&mut self, ms: u32) {
        Self::delay_ms(self, ms)
    }

    fn spi_transfer(&mut self, data: u8) {
        Self::spi_transfer(self, data)
    }
}
