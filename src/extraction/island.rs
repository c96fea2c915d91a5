use crate::extraction::criteria::DetectorOptions;
use crate::extraction::criteria::MatchPredicate;
use crate::spreadsheet::table::Table;
use std::collections::HashSet;

/// One matched row of a region.
#[derive(Clone, Debug, PartialEq)]
pub struct IslandEntry {
    /// Data row index (0-based)
    pub row: usize,
    /// Trimmed name, case preserved
    pub name: String,
    /// Hours read from the hours column
    pub hours: f64,
}

/// A gap-tolerant run of matching rows for one (name column, hours column) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Island {
    pub name_column: String,
    pub hours_column: String,
    pub name_column_index: usize,
    pub hours_column_index: usize,
    /// Matched rows in scan order
    pub entries: Vec<IslandEntry>,
}

impl Island {
    fn open(table: &Table, name_col: usize, hours_col: usize) -> Self {
        Self {
            name_column: table.headers()[name_col].to_owned(),
            hours_column: table.headers()[hours_col].to_owned(),
            name_column_index: name_col,
            hours_column_index: hours_col,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row index of the first matched entry.
    pub fn first_row(&self) -> usize {
        self.entries.first().map(|entry| entry.row).unwrap_or(0)
    }

    /// Row index of the last matched entry.
    pub fn last_row(&self) -> usize {
        self.entries.last().map(|entry| entry.row).unwrap_or(0)
    }

    /// Number of distinct (exact) names among the entries.
    pub fn distinct_names(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.name.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Scans every row for one column pair and returns the sealed islands in scan order.
///
/// A non-matching row inside an open island widens its gap; once the gap exceeds
/// `gap_tolerance` the island is sealed and a later match opens a new one. Rows
/// outside the configured range are skipped entirely.
pub fn scan_pair(
    table: &Table,
    name_col: usize,
    hours_col: usize,
    predicate: &MatchPredicate,
    options: &DetectorOptions,
) -> Vec<Island> {
    let mut islands = Vec::new();
    let mut open: Option<Island> = None;
    let mut gap = 0usize;

    for row in 0..table.row_count() {
        if !options.accepts_row(row) {
            continue;
        }
        let name = predicate.accepts_name(table.cell(row, name_col));
        let hours = predicate.accepts_hours(table.cell(row, hours_col));
        match name.zip(hours) {
            Some((name, hours)) => {
                open.get_or_insert_with(|| Island::open(table, name_col, hours_col))
                    .entries
                    .push(IslandEntry { row, name: name.to_owned(), hours });
                gap = 0;
            }
            None if open.is_some() => {
                gap += 1;
                if gap > options.gap_tolerance {
                    islands.extend(open.take());
                    gap = 0;
                }
            }
            None => (),
        }
    }
    islands.extend(open.take());
    islands
}
