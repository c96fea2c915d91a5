use crate::diagnostics::Diagnostics;
use crate::diagnostics::TracingDiagnostics;
use crate::extraction::candidate::rank;
use crate::extraction::candidate::select_best;
use crate::extraction::candidate::ScoredCandidate;
use crate::extraction::criteria::DetectorOptions;
use crate::extraction::criteria::MatchPredicate;
use crate::extraction::island::scan_pair;
use crate::extraction::island::Island;
use crate::spreadsheet::table::Table;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Total hours for one employee.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeHours {
    pub employee: String,
    pub hours: f64,
}

/// The selected region and its per-employee totals.
/// An empty result (no columns, no data) means no plausible region was found.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Header of the column holding names
    pub employee_column: String,
    /// Header of the column holding hours
    pub hours_column: String,
    /// First matched data row (0-based)
    pub start_row: usize,
    /// Last matched data row (0-based)
    pub end_row: usize,
    /// Employees sorted by descending total hours
    pub data: Vec<EmployeeHours>,
    /// Leading entries of `data`
    pub preview: Vec<EmployeeHours>,
}

impl ExtractionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Finds the employee-name/hours column pair of an arbitrary table without relying
/// on header names or positions.
pub struct IslandDetector<'a> {
    options: DetectorOptions,
    diagnostics: &'a dyn Diagnostics,
}

impl Default for IslandDetector<'static> {
    fn default() -> Self {
        Self::new(DetectorOptions::default(), &TracingDiagnostics)
    }
}

impl<'a> IslandDetector<'a> {
    pub fn new(options: DetectorOptions, diagnostics: &'a dyn Diagnostics) -> Self {
        Self { options, diagnostics }
    }

    pub fn options(&self) -> &DetectorOptions {
        &self.options
    }

    /// Selects the best region and aggregates it into one entry per employee.
    pub fn detect(&self, table: &Table) -> ExtractionResult {
        let candidates = self.candidates(table);

        let mut top = rank(&candidates);
        top.truncate(self.options.top_candidates);
        if !top.is_empty() {
            self.diagnostics.candidates_ranked(&top);
        }

        let Some(best) = select_best(&candidates) else {
            self.diagnostics.no_candidate(table.row_count(), table.column_count());
            return ExtractionResult::empty();
        };
        self.diagnostics.region_selected(best);

        let data = aggregate(&best.island);
        let preview = data.iter().take(self.options.preview_len).cloned().collect();
        ExtractionResult {
            employee_column: best.island.name_column.to_owned(),
            hours_column: best.island.hours_column.to_owned(),
            start_row: best.island.first_row(),
            end_row: best.island.last_row(),
            data,
            preview,
        }
    }

    /// Scores every qualifying island, in scan order: name column outer, hours column inner,
    /// islands of one pair in row order.
    pub fn candidates(&self, table: &Table) -> Vec<ScoredCandidate> {
        let predicate = MatchPredicate::new(&self.options);
        let columns = table.column_count();
        let mut candidates = Vec::new();
        for name_col in (0..columns).filter(|col| self.options.accepts_col(*col)) {
            let upper = columns.min(name_col + self.options.lookahead + 1);
            for hours_col in ((name_col + 1)..upper).filter(|col| self.options.accepts_col(*col)) {
                let islands = scan_pair(table, name_col, hours_col, &predicate, &self.options);
                let island_count = islands.len();
                let scored: Vec<ScoredCandidate> = islands
                    .into_iter()
                    .filter_map(|island| ScoredCandidate::score(island, self.options.min_entries))
                    .collect();
                let headers = table.headers();
                self.diagnostics.pair_scanned(&headers[name_col], &headers[hours_col], island_count, &scored);
                candidates.extend(scored);
            }
        }
        candidates
    }
}

/// Sums hours per exact name and sorts by descending total; equal totals keep first-seen order.
fn aggregate(island: &Island) -> Vec<EmployeeHours> {
    let mut totals = Vec::<EmployeeHours>::new();
    let mut positions = HashMap::<&str, usize>::new();
    for entry in &island.entries {
        match positions.get(entry.name.as_str()) {
            Some(&index) => totals[index].hours += entry.hours,
            None => {
                positions.insert(entry.name.as_str(), totals.len());
                totals.push(EmployeeHours {
                    employee: entry.name.to_owned(),
                    hours: entry.hours,
                });
            }
        }
    }
    totals.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    totals
}

/// Runs detection with default heuristics, reporting through `tracing`.
pub fn detect(table: &Table) -> ExtractionResult {
    IslandDetector::default().detect(table)
}
