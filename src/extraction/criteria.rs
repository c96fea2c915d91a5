use crate::spreadsheet::cell::CellValue;
use crate::spreadsheet::range::Range;
use regex::Regex;

/// Words that mark summary or bookkeeping rows rather than employees.
/// Matched as case-insensitive substrings of a name.
pub const DEFAULT_STOP_WORDS: [&str; 9] = [
    "total", "subtotal", "bonus", "invoice", "summary", "amount", "payroll", "overtime", "holiday",
];

/// Heuristics used while searching a table for employee/hours regions.
/// `Default` gives the fixed values: lookahead 3, gap tolerance 3, 2 entries,
/// hours within [0, 168], names of 3+ characters, preview of 5.
#[derive(Clone, Debug)]
pub struct DetectorOptions {
    /// How many columns after the name column may hold hours.
    pub lookahead: usize,

    /// Consecutive non-matching rows tolerated inside an open region.
    pub gap_tolerance: usize,

    /// Smallest number of matched rows for a region to be scored.
    pub min_entries: usize,

    /// Inclusive upper bound for a plausible hours value (one week).
    pub max_hours: f64,

    /// Minimum length of a name, in characters after trimming.
    pub min_name_chars: usize,

    /// Names containing any of these words (case-insensitive, anywhere in the name) are rejected.
    pub stop_words: Vec<String>,

    /// Number of aggregated employees copied into the preview.
    pub preview_len: usize,

    /// Number of ranked candidates reported to diagnostics.
    pub top_candidates: usize,

    /// Restricts the scan to a block of the table.
    pub range: Option<Range>,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            lookahead: 3,
            gap_tolerance: 3,
            min_entries: 2,
            max_hours: 168.0,
            min_name_chars: 3,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|word| word.to_string()).collect(),
            preview_len: 5,
            top_candidates: 3,
            range: None,
        }
    }
}

impl DetectorOptions {
    pub fn with_max_hours(mut self, max_hours: f64) -> Self {
        self.max_hours = max_hours;
        self
    }

    pub fn with_gap_tolerance(mut self, gap_tolerance: usize) -> Self {
        self.gap_tolerance = gap_tolerance;
        self
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = stop_words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = preview_len;
        self
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    /// Checks if a data row is inside the configured range.
    pub(crate) fn accepts_row(&self, row: usize) -> bool {
        self.range.map(|range| range.contains_row(row)).unwrap_or(true)
    }

    /// Checks if a column is inside the configured range.
    pub(crate) fn accepts_col(&self, col: usize) -> bool {
        self.range.map(|range| range.contains_col(col)).unwrap_or(true)
    }
}

/// Compiled row-matching predicate for a set of options.
#[derive(Clone, Debug)]
pub struct MatchPredicate {
    stop_words: Option<Regex>,
    min_name_chars: usize,
    max_hours: f64,
}

impl MatchPredicate {
    pub fn new(options: &DetectorOptions) -> Self {
        let words: Vec<String> = options.stop_words
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .map(regex::escape)
            .collect();
        let stop_words = if words.is_empty() {
            None
        } else {
            let pattern = format!("(?i)(?:{})", words.join("|"));
            Some(Regex::new(&pattern).expect("Escaped stop word pattern"))
        };
        Self {
            stop_words,
            min_name_chars: options.min_name_chars,
            max_hours: options.max_hours,
        }
    }

    /// Returns the trimmed name if the cell plausibly holds an employee name:
    /// text, long enough, at least one letter, no digit, no stop word.
    pub fn accepts_name<'a>(&self, cell: &'a CellValue) -> Option<&'a str> {
        let name = cell.as_text()?.trim();
        if name.chars().count() < self.min_name_chars
            || !name.chars().any(char::is_alphabetic)
            || name.chars().any(char::is_numeric)
        {
            return None;
        }
        if let Some(stop_words) = &self.stop_words {
            if stop_words.is_match(name) {
                return None;
            }
        }
        Some(name)
    }

    /// Returns the hours if the cell holds a finite number within [0, max_hours].
    pub fn accepts_hours(&self, cell: &CellValue) -> Option<f64> {
        cell.to_number()
            .filter(|hours| (0.0..=self.max_hours).contains(hours))
    }
}
