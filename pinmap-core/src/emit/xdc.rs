//! Xilinx XDC pin constraints
//!
//! Every assigned signal gets a `PACKAGE_PIN` and an `IOSTANDARD` property.
//! Port names carry a `_0` suffix, matching the ports of a block design
//! wrapper.

use super::Emitter;
use crate::types::SignalRow;
use std::borrow::Cow;
use std::io::{self, Write};

/// IO standard applied to every pin
pub const IO_STANDARD: &str = "LVCMOS33";

/// Suffix appended to each signal name to form the port name
pub const PORT_SUFFIX: &str = "_0";

/// Emits the package pin and IO standard constraints for every assigned row
#[derive(Debug, Clone, Copy, Default)]
pub struct PinConstraintEmitter;

impl PinConstraintEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Drop a zero in the second position of the pin name (`A05` -> `A5`).
    /// Pins shorter than two characters are returned unchanged.
    pub fn normalize_pin(pin: &str) -> Cow<'_, str> {
        let mut chars = pin.char_indices();
        let _ = chars.next();
        match chars.next() {
            Some((idx, '0')) => {
                let mut stripped = String::with_capacity(pin.len() - 1);
                stripped.push_str(&pin[..idx]);
                stripped.push_str(&pin[idx + 1..]);
                Cow::Owned(stripped)
            }
            _ => Cow::Borrowed(pin),
        }
    }

    /// Format both constraint lines for one row (no trailing newlines)
    pub fn constraints(row: &SignalRow) -> [String; 2] {
        let pin = Self::normalize_pin(&row.pin);
        let port = format!("{}{}", row.name, PORT_SUFFIX);
        [
            format!("set_property PACKAGE_PIN {} [get_ports {}]", pin, port),
            format!("set_property IOSTANDARD {} [get_ports {}]", IO_STANDARD, port),
        ]
    }
}

impl Emitter for PinConstraintEmitter {
    fn name(&self) -> &'static str {
        "xdc"
    }

    fn emit(&self, row: &SignalRow, out: &mut dyn Write) -> io::Result<usize> {
        let lines = Self::constraints(row);
        for line in &lines {
            writeln!(out, "{}", line)?;
        }
        Ok(lines.len())
    }
}
