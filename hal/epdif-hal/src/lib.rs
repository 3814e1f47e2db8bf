//! epdif Hardware Abstraction Layer
//!
//! This crate defines the platform primitives the e-paper bus adapter
//! needs. Chip-specific crates implement them, so the adapter in
//! `epdif-core` runs unchanged on real hardware and against test doubles.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  e-paper controller driver (external)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  epdif-core (BusAdapter)                │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  epdif-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  epdif-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinControl`] - Digital I/O addressed by pin number
//! - [`spi::SpiPort`] - SPI port with an explicit session lifecycle
//!
//! Millisecond delays use [`embedded_hal::delay::DelayNs`] directly and need
//! no trait of their own.
//!
//! [`embedded_hal::delay::DelayNs`]: https://docs.rs/embedded-hal/1/embedded_hal/delay/trait.DelayNs.html

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key types at crate root for convenience
pub use gpio::{Level, PinControl, PinId, PinMode};
pub use spi::{BitOrder, Mode, Phase, Polarity, SpiPort, SpiSettings};
