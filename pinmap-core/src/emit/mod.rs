//! Output emitters
//!
//! Each emitter turns one assigned signal row into one or more lines of
//! output text. Emitters are stateless: the same row always produces the
//! same lines.

pub mod vhdl;
pub mod xdc;

pub use vhdl::PortDeclarationEmitter;
pub use xdc::PinConstraintEmitter;

use crate::types::SignalRow;
use std::io::{self, Write};

/// Turns signal rows into output lines
pub trait Emitter {
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Write the lines for `row`, returning how many lines were written
    fn emit(&self, row: &SignalRow, out: &mut dyn Write) -> io::Result<usize>;
}
