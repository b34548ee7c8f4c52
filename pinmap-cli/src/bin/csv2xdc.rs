//! Convert a signal table into XDC pin assignment constraints
//!
//!   csv2xdc < signals.csv > signals.xdc

use anyhow::Result;
use pinmap_core::PinConstraintEmitter;

fn main() -> Result<()> {
    pinmap_cli::main_with(
        "csv2xdc",
        "Convert a signal table into XDC pin assignment constraints",
        PinConstraintEmitter::new(),
    )
}
