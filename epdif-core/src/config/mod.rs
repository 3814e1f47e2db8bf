//! Panel configuration
//!
//! - [`hardware`] - pin assignment types
//! - [`toml`](self::toml) - minimal TOML parser for the `[epd]` section

pub mod hardware;
pub mod toml;

pub use hardware::PanelPins;
pub use self::toml::{parse_config, ParseError};
