//! Core types for the signal table
//!
//! A signal table is a comma-separated file with one signal per line. Only two
//! columns matter here: the signal name (column 0) and the package pin
//! (column 7). Rows are parsed one at a time and never stored.

use std::fmt;

/// Result type for signal table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Column holding the signal name
pub const NAME_COLUMN: usize = 0;

/// Column holding the package pin assignment
pub const PIN_COLUMN: usize = 7;

/// Minimum number of fields a row needs before it can be classified
pub const MIN_FIELDS: usize = PIN_COLUMN + 1;

/// Errors that can occur while reading a signal table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    MalformedRow(MalformedRow),
}

/// A row that cannot be classified because it has too few fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-based line number in the input
    pub line_number: usize,
    /// Number of comma-separated fields actually present
    pub field_count: usize,
}

impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: expected at least {} fields, found {}",
            self.line_number, MIN_FIELDS, self.field_count
        )
    }
}

/// A signal with an assigned package pin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalRow {
    /// Signal name, first character encodes the direction
    pub name: String,
    /// Package pin identifier, exactly as it appears in the table
    pub pin: String,
}

impl SignalRow {
    pub fn new(name: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pin: pin.into(),
        }
    }

    /// Port direction encoded in the first character of the signal name
    pub fn direction(&self) -> Direction {
        Direction::from_signal_name(&self.name)
    }
}

/// Classification of a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Pin is assigned, the row produces output
    Assigned(SignalRow),
    /// Pin field is blank or starts with a space
    Unassigned,
    /// Too few fields to find the pin column
    Malformed(MalformedRow),
}

impl RowOutcome {
    /// Classify one line of the table (line terminator already removed)
    pub fn classify(line: &str, line_number: usize) -> Self {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_FIELDS {
            return RowOutcome::Malformed(MalformedRow {
                line_number,
                field_count: fields.len(),
            });
        }

        let pin = fields[PIN_COLUMN];
        if !is_pin_assigned(pin) {
            return RowOutcome::Unassigned;
        }

        RowOutcome::Assigned(SignalRow::new(fields[NAME_COLUMN], pin))
    }
}

/// A pin counts as assigned when it is non-empty and not space-prefixed
pub fn is_pin_assigned(pin: &str) -> bool {
    !pin.is_empty() && !pin.starts_with(' ')
}

/// Port direction as seen from the FPGA top level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl Direction {
    /// `b…` is bidirectional, `o…` is driven by the outside world into the
    /// FPGA, anything else (including an empty name) is an output.
    pub fn from_signal_name(name: &str) -> Self {
        match name.chars().next() {
            Some('b') => Direction::InOut,
            Some('o') => Direction::In,
            _ => Direction::Out,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
            Direction::InOut => write!(f, "inout"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_assigned() {
        let outcome = RowOutcome::classify("oCLK,1,2,3,4,5,6,N14", 1);
        assert_eq!(outcome, RowOutcome::Assigned(SignalRow::new("oCLK", "N14")));
    }

    #[test]
    fn test_classify_unassigned() {
        assert_eq!(RowOutcome::classify("oCLK,1,2,3,4,5,6,", 1), RowOutcome::Unassigned);
        assert_eq!(RowOutcome::classify("oCLK,1,2,3,4,5,6, N14", 1), RowOutcome::Unassigned);
    }

    #[test]
    fn test_classify_malformed() {
        let outcome = RowOutcome::classify("oCLK,1,2", 12);
        assert_eq!(
            outcome,
            RowOutcome::Malformed(MalformedRow {
                line_number: 12,
                field_count: 3,
            })
        );

        // A blank line is a single empty field
        assert!(matches!(RowOutcome::classify("", 3), RowOutcome::Malformed(_)));
    }

    #[test]
    fn test_classify_keeps_extra_columns_out() {
        let outcome = RowOutcome::classify("bDATA0,a,b,c,d,e,f,A05,extra,more", 1);
        assert_eq!(outcome, RowOutcome::Assigned(SignalRow::new("bDATA0", "A05")));
    }

    #[test]
    fn test_direction_from_signal_name() {
        assert_eq!(Direction::from_signal_name("bFOO"), Direction::InOut);
        assert_eq!(Direction::from_signal_name("oBAR"), Direction::In);
        assert_eq!(Direction::from_signal_name("xBAZ"), Direction::Out);
        assert_eq!(Direction::from_signal_name(""), Direction::Out);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::In.to_string(), "in");
        assert_eq!(Direction::Out.to_string(), "out");
        assert_eq!(Direction::InOut.to_string(), "inout");
    }

    #[test]
    fn test_malformed_row_message() {
        let err = TableError::MalformedRow(MalformedRow {
            line_number: 4,
            field_count: 2,
        });
        assert_eq!(err.to_string(), "line 4: expected at least 8 fields, found 2");
    }
}
