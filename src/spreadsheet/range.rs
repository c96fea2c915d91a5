use crate::error::ExtractError;
use crate::spreadsheet::reference::col_to_index;
use crate::spreadsheet::reference::row_to_index;
use regex::Regex;
use thiserror::Error;

/// Errors related to Excel-style range parsing.
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Invalid range format '{0}'")]
    FormatError(String)
}

/// Represents an Excel-style range with optional boundaries.
/// Columns address header positions; rows address data rows, 1-based in text form.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Range {
    /// Lower row bound (0-based index), None for unbounded
    pub row_lower_bound: Option<usize>,
    /// Upper row bound (0-based index), None for unbounded
    pub row_upper_bound: Option<usize>,
    /// Lower column bound (0-based index), None for unbounded
    pub col_lower_bound: Option<usize>,
    /// Upper column bound (0-based index), None for unbounded
    pub col_upper_bound: Option<usize>,
}

impl Range {
    /// Checks if a data row index falls within the range.
    pub fn contains_row(&self, row: usize) -> bool {
        self.row_lower_bound.map(|lower| lower <= row).unwrap_or(true)
            && self.row_upper_bound.map(|upper| row <= upper).unwrap_or(true)
    }

    /// Checks if a column index falls within the range.
    pub fn contains_col(&self, col: usize) -> bool {
        self.col_lower_bound.map(|lower| lower <= col).unwrap_or(true)
            && self.col_upper_bound.map(|upper| col <= upper).unwrap_or(true)
    }
}

impl TryFrom<&str> for Range {
    type Error = ExtractError;

    /// Parses an Excel-style range string (e.g., "A1", "B2:C5", "A:C", "3:10").
    /// Supports single cells, ranges, and partial ranges (columns or rows only).
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let pattern = Regex::new(r"^([A-Z]*)(\d*)(:([A-Z]*)(\d*))?$").expect("Hardcode regex pattern");
        let value = value.trim().to_ascii_uppercase();
        let captures = pattern
            .captures(value.as_str())
            .filter(|_| !value.is_empty())
            .ok_or(RangeError::FormatError(value.to_owned()))?;
        Ok(Range {
            col_lower_bound: captures
                .get(1)
                .map(|matcher| matcher.as_str())
                .and_then(col_to_index),
            row_lower_bound: captures
                .get(2)
                .map(|matcher| matcher.as_str())
                .and_then(row_to_index),
            col_upper_bound: captures
                .get(4)
                .map(|matcher| matcher.as_str())
                .and_then(col_to_index),
            row_upper_bound: captures
                .get(5)
                .map(|matcher| matcher.as_str())
                .and_then(row_to_index),
        })
    }
}
