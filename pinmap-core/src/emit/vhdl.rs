//! VHDL port declarations
//!
//! Produces lines meant to be pasted into the `port (...)` list of a
//! top-level entity, one `std_logic` port per assigned signal.

use super::Emitter;
use crate::types::SignalRow;
use std::io::{self, Write};

/// Indentation in front of every declaration
const INDENT: &str = "            ";

/// Minimum width of the signal name column
const NAME_WIDTH: usize = 14;

/// Emits `<name> : <direction> std_logic;` for every assigned row
#[derive(Debug, Clone, Copy, Default)]
pub struct PortDeclarationEmitter;

impl PortDeclarationEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Format the declaration for one row (no trailing newline).
    /// Names longer than the column are kept whole.
    pub fn declaration(row: &SignalRow) -> String {
        format!(
            "{}{:<width$} : {} std_logic;",
            INDENT,
            row.name,
            row.direction(),
            width = NAME_WIDTH
        )
    }
}

impl Emitter for PortDeclarationEmitter {
    fn name(&self) -> &'static str {
        "vhdl"
    }

    fn emit(&self, row: &SignalRow, out: &mut dyn Write) -> io::Result<usize> {
        writeln!(out, "{}", Self::declaration(row))?;
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_input() {
        let row = SignalRow::new("oCLK", "N14");
        assert_eq!(
            PortDeclarationEmitter::declaration(&row),
            "            oCLK           : in std_logic;"
        );
    }

    #[test]
    fn test_declaration_directions() {
        let inout = SignalRow::new("bFOO", "A1 ");
        let input = SignalRow::new("oBAR", "B2");
        let output = SignalRow::new("xBAZ", "C3");

        assert!(PortDeclarationEmitter::declaration(&inout).ends_with(": inout std_logic;"));
        assert!(PortDeclarationEmitter::declaration(&input).ends_with(": in std_logic;"));
        assert!(PortDeclarationEmitter::declaration(&output).ends_with(": out std_logic;"));
    }

    #[test]
    fn test_long_name_not_truncated() {
        let row = SignalRow::new("xVERY_LONG_SIGNAL_NAME", "C3");
        assert_eq!(
            PortDeclarationEmitter::declaration(&row),
            "            xVERY_LONG_SIGNAL_NAME : out std_logic;"
        );
    }

    #[test]
    fn test_empty_name_is_output() {
        let row = SignalRow::new("", "C3");
        assert_eq!(
            PortDeclarationEmitter::declaration(&row),
            "                           : out std_logic;"
        );
    }

    #[test]
    fn test_emit_writes_one_line() {
        let mut out = Vec::new();
        let written = PortDeclarationEmitter::new()
            .emit(&SignalRow::new("oCLK", "N14"), &mut out)
            .unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "            oCLK           : in std_logic;\n"
        );
    }
}
