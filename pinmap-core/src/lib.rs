//! Signal table to FPGA fragment library
//!
//! Reads a comma-separated signal table (one signal per line, name in column 0,
//! package pin in column 7) and turns every row with an assigned pin into
//! output text:
//! - VHDL port declarations for the top-level entity
//! - XDC `PACKAGE_PIN` / `IOSTANDARD` constraints
//!
//! Rows are independent. Nothing is carried from one line to the next, so a
//! bad row never affects the rows around it.
//!
//! # Example Usage
//!
//! ```
//! use pinmap_core::{run_filter, FilterConfig, PortDeclarationEmitter};
//! use std::io::Cursor;
//!
//! let table = "oCLK,1,2,3,4,5,6,N14\n";
//! let mut out = Vec::new();
//! let stats = run_filter(
//!     Cursor::new(table),
//!     &mut out,
//!     &PortDeclarationEmitter::new(),
//!     &FilterConfig::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(stats.rows_emitted, 1);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "            oCLK           : in std_logic;\n"
//! );
//! ```

// Public modules
pub mod config;
pub mod emit;
pub mod filter;
pub mod reader;
pub mod types;

// Re-export main types for convenience
pub use config::FilterConfig;
pub use emit::{Emitter, PinConstraintEmitter, PortDeclarationEmitter};
pub use filter::{run_filter, FilterStats};
pub use reader::SignalTable;
pub use types::{Direction, MalformedRow, Result, RowOutcome, SignalRow, TableError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
