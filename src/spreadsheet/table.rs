use crate::spreadsheet::cell::CellValue;
use crate::spreadsheet::reference::index_to_column;
use std::collections::HashSet;
use thiserror::Error;

/// Errors related to table construction.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Duplicate header '{0}'")]
    DuplicateHeader(String),

    #[error("Row {row} has {width} cells but only {headers} headers")]
    RowTooWide { row: usize, width: usize, headers: usize },
}

static EMPTY: CellValue = CellValue::Empty;

/// Tabular input: ordered unique headers and ordered rows of loosely typed cells.
/// Rows are positional; a row shorter than the header list reads as empty cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Column names, unique and order-significant
    headers: Vec<String>,
    /// Data rows, each cell aligned with `headers`
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Creates a table from named headers and positional rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                Err(TableError::DuplicateHeader(header.to_owned()))?;
            }
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() > headers.len() {
                Err(TableError::RowTooWide {
                    row,
                    width: cells.len(),
                    headers: headers.len(),
                })?;
            }
        }
        Ok(Self { headers, rows })
    }

    /// Creates a table from a headerless grid. Headers are generated as column letters.
    pub fn from_grid(rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let headers = (0..width).map(index_to_column).collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the cell at (row, col), or an empty cell outside the table.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Returns the position of a header by exact name.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|name| name == header)
    }

    /// Returns the position of the first header satisfying the predicate.
    pub fn find_header<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&str) -> bool,
    {
        self.headers.iter().position(|name| predicate(name))
    }
}
