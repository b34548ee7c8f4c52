//! Line-by-line reader for signal tables
//!
//! Wraps any `BufRead` source and yields one classified row per input line.
//! Lines are read as raw bytes so that tables saved by spreadsheet tools in a
//! Windows code page still come through.

use crate::types::{Result, RowOutcome};
use std::io::BufRead;

/// Iterator over the rows of a signal table
pub struct SignalTable<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
    header_rows: usize,
    warned_encoding: bool,
}

impl<R: BufRead> SignalTable<R> {
    /// Create a reader that classifies every line
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
            header_rows: 0,
            warned_encoding: false,
        }
    }

    /// Skip this many leading lines without classifying them
    pub fn with_header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }

    /// Number of lines consumed so far (including skipped header rows)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next raw line, terminator removed. `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        Ok(Some(self.decode_line()))
    }

    /// UTF-8 first, then Latin-1 (compatible with Windows-1252 for the
    /// characters that show up in signal tables)
    fn decode_line(&mut self) -> String {
        match std::str::from_utf8(&self.buf) {
            Ok(text) => text.to_string(),
            Err(_) => {
                if !self.warned_encoding {
                    log::warn!(
                        "line {}: input is not UTF-8, decoding as Latin-1",
                        self.line_number
                    );
                    self.warned_encoding = true;
                }
                self.buf.iter().map(|&b| b as char).collect()
            }
        }
    }
}

impl<R: BufRead> Iterator for SignalTable<R> {
    type Item = Result<(usize, RowOutcome)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            };

            if self.line_number <= self.header_rows {
                log::debug!("line {}: skipping header row", self.line_number);
                continue;
            }

            let outcome = RowOutcome::classify(&line, self.line_number);
            return Some(Ok((self.line_number, outcome)));
        }
    }
}
