//! Filter driver
//!
//! Runs a signal table through an emitter in a single pass, keeping the
//! output in input row order.

use crate::config::FilterConfig;
use crate::emit::Emitter;
use crate::reader::SignalTable;
use crate::types::{Result, RowOutcome, TableError};
use std::io::{BufRead, Write};

/// Counters for one filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Rows classified (header rows excluded)
    pub rows_read: usize,
    /// Rows with an assigned pin
    pub rows_emitted: usize,
    /// Rows whose pin field was blank or space-prefixed
    pub rows_unassigned: usize,
    /// Rows with too few fields
    pub rows_malformed: usize,
    /// Output lines written
    pub lines_written: usize,
}

/// Read every row from `input`, emit the assigned ones to `output`
///
/// Malformed rows are logged and skipped unless `config.strict` is set, in
/// which case the first one is returned as [`TableError::MalformedRow`].
/// The output is flushed before returning.
pub fn run_filter<R, W, E>(
    input: R,
    output: &mut W,
    emitter: &E,
    config: &FilterConfig,
) -> Result<FilterStats>
where
    R: BufRead,
    W: Write,
    E: Emitter + ?Sized,
{
    let mut stats = FilterStats::default();
    let table = SignalTable::new(input).with_header_rows(config.header_rows);

    for row in table {
        let (line_number, outcome) = row?;
        stats.rows_read += 1;

        match outcome {
            RowOutcome::Assigned(signal) => {
                log::trace!("line {}: {} -> {}", line_number, signal.name, signal.pin);
                stats.lines_written += emitter.emit(&signal, output)?;
                stats.rows_emitted += 1;
            }
            RowOutcome::Unassigned => {
                log::debug!("line {}: no pin assigned, skipping", line_number);
                stats.rows_unassigned += 1;
            }
            RowOutcome::Malformed(malformed) => {
                if config.strict {
                    return Err(TableError::MalformedRow(malformed));
                }
                log::warn!("{}, skipping row", malformed);
                stats.rows_malformed += 1;
            }
        }
    }

    output.flush()?;

    log::info!(
        "{}: {} rows read, {} emitted, {} unassigned, {} malformed",
        emitter.name(),
        stats.rows_read,
        stats.rows_emitted,
        stats.rows_unassigned,
        stats.rows_malformed
    );

    Ok(stats)
}
