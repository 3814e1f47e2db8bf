//! Bus adapter for the 2.9" e-paper panel driver
//!
//! The panel controller driver (waveform tables, RAM addressing, refresh
//! sequencing) is an external library. It talks to the hardware only
//! through five operations: initialise the bus, write a pin, read a pin,
//! wait some milliseconds, and shift one byte out. This crate provides
//! those operations on top of the `epdif-hal` platform traits:
//!
//! - [`BusAdapter`] - the adapter itself
//! - [`EpdInterface`] - the driver-facing operation set
//! - [`config`] - panel pin assignment and its TOML form
//! - [`shared`] - a locked port wrapper for buses shared across contexts

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod config;
pub mod error;
pub mod interface;
pub mod shared;

#[cfg(test)]
pub(crate) mod mock;

pub use adapter::{BusAdapter, EPD_SPI_SETTINGS};
pub use config::PanelPins;
pub use error::InitError;
pub use interface::EpdInterface;
pub use shared::SharedSpiPort;

pub use epdif_hal::{Level, PinId};
