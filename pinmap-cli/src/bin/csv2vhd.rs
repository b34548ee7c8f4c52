//! Convert a signal table into VHDL port declarations
//!
//!   csv2vhd < signals.csv > signals.vhd

use anyhow::Result;
use pinmap_core::PortDeclarationEmitter;

fn main() -> Result<()> {
    pinmap_cli::main_with(
        "csv2vhd",
        "Convert a signal table into VHDL port declarations",
        PortDeclarationEmitter::new(),
    )
}
