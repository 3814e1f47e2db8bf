//! Simple TOML parser for the panel pin assignment
//!
//! Handles only the subset needed to describe the panel wiring. It does
//! NOT support the full TOML spec.
//!
//! Supported features:
//! - A single `[epd]` section
//! - Key = value pairs (integer or string pin values)
//! - Pin strings in the form "gpio11" (quoted or bare)
//! - Comments (# ...), including trailing comments
//!
//! Keys outside `[epd]` and unknown keys inside it are ignored.

use epdif_hal::PinId;

use super::hardware::PanelPins;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Section other than `[epd]`
    InvalidSection,
    /// Value could not be parsed
    InvalidValue,
    /// Pin value is neither an integer nor a "gpioNN" string
    InvalidPin,
    /// One of cs/dc/rst/busy was not given
    MissingPin,
    /// The same pin number is used for two lines
    DuplicatePin(PinId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Epd,
}

/// Pins collected so far
#[derive(Default)]
struct PartialPins {
    cs: Option<PinId>,
    dc: Option<PinId>,
    rst: Option<PinId>,
    busy: Option<PinId>,
}

impl PartialPins {
    fn finish(self) -> Result<PanelPins, ParseError> {
        match (self.cs, self.dc, self.rst, self.busy) {
            (Some(cs), Some(dc), Some(rst), Some(busy)) => {
                let pins = PanelPins::new(cs, dc, rst, busy);
                match pins.find_conflict() {
                    Some(pin) => Err(ParseError::DuplicatePin(pin)),
                    None => Ok(pins),
                }
            }
            _ => Err(ParseError::MissingPin),
        }
    }
}

/// Parse TOML configuration into a panel pin assignment
pub fn parse_config(input: &str) -> Result<PanelPins, ParseError> {
    let mut section = Section::Root;
    let mut pins = PartialPins::default();

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        if section != Section::Epd {
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            match key {
                "cs" => pins.cs = Some(parse_pin(value)?),
                "dc" => pins.dc = Some(parse_pin(value)?),
                "rst" | "reset" => pins.rst = Some(parse_pin(value)?),
                "busy" => pins.busy = Some(parse_pin(value)?),
                _ => {}
            }
        }
    }

    pins.finish()
}

/// Parse a section header line like "[epd]"
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    // Strip a trailing comment after the closing bracket
    let line = match line.find('#') {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    };

    let name = line
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(ParseError::InvalidSection)?;

    match name.trim() {
        "epd" => Ok(Section::Epd),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Split a `key = value # comment` line
///
/// Pin values never contain `#`, so everything after the first one is
/// dropped.
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let line = line.split('#').next().unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());

    (!key.is_empty() && !value.is_empty()).then_some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') {
        if value.len() >= 2 && value.ends_with('"') {
            Ok(&value[1..value.len() - 1])
        } else {
            Err(ParseError::InvalidValue)
        }
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse a pin value: `12`, `"gpio12"` or `gpio12`
fn parse_pin(value: &str) -> Result<PinId, ParseError> {
    let value = parse_string(value)?;
    let digits = value.strip_prefix("gpio").unwrap_or(value);
    digits.parse().map_err(|_| ParseError::InvalidPin)
}
