//! RP2040 platform binding for the e-paper bus adapter
//!
//! This crate provides RP2040 implementations of the `epdif-hal` traits:
//! - Pin bank addressed by GPIO number ([`gpio::Rp2040Gpio`])
//! - Blocking SPI port with session tracking ([`spi::Rp2040SpiPort`])
//!
//! Delays use [`embassy_time::Delay`], which already implements
//! `embedded_hal::delay::DelayNs`.

#![no_std]

pub mod gpio;
pub mod spi;

pub use embassy_time::Delay;
pub use gpio::{PinError, Rp2040Gpio, GPIO_COUNT};
pub use spi::{Rp2040SpiPort, SpiError};
