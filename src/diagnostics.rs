//! Injectable observability sink for detection and reconciliation.
//!
//! The core accepts a `&dyn Diagnostics` instead of writing to a process-wide
//! stream. `TracingDiagnostics` forwards every hook to `tracing` events; the
//! subscriber, if any, is chosen by the host application.

use crate::extraction::candidate::ScoredCandidate;
use crate::reconcile::lookup::LookupKind;
use tracing::{debug, info, warn};

/// Receives diagnostic callbacks. Every hook defaults to a no-op.
pub trait Diagnostics {
    /// A column pair was scanned; `candidates` are its islands that qualified for scoring.
    fn pair_scanned(&self, _name_column: &str, _hours_column: &str, _islands: usize, _candidates: &[ScoredCandidate]) {}

    /// The highest-ranked candidates across all pairs, best first.
    fn candidates_ranked(&self, _top: &[&ScoredCandidate]) {}

    /// The winning region.
    fn region_selected(&self, _best: &ScoredCandidate) {}

    /// No column pair produced a qualifying region.
    fn no_candidate(&self, _rows: usize, _columns: usize) {}

    /// A reconciliation lookup was built from an auxiliary table.
    fn lookup_built(&self, _kind: LookupKind, _value_column: Option<&str>, _entries: usize) {}

    /// An employee has no rate; the rate defaults to zero.
    fn missing_rate(&self, _employee: &str) {}

    /// A lookup was resolved by similarity instead of exact match. `kind` is `None` for
    /// lookups not built from an auxiliary table.
    fn fuzzy_match(&self, _kind: Option<LookupKind>, _employee: &str, _key: &str, _similarity: f64) {}
}

/// Discards all diagnostics.
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {}

/// Emits diagnostics as structured `tracing` events.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn pair_scanned(&self, name_column: &str, hours_column: &str, islands: usize, candidates: &[ScoredCandidate]) {
        let best = candidates.iter().map(|candidate| candidate.score).fold(0.0, f64::max);
        debug!(name_column, hours_column, islands, candidates = candidates.len(), best_score = best, "scanned column pair");
    }

    fn candidates_ranked(&self, top: &[&ScoredCandidate]) {
        for (rank, candidate) in top.iter().enumerate() {
            info!(
                rank = rank + 1,
                name_column = %candidate.island.name_column,
                hours_column = %candidate.island.hours_column,
                entries = candidate.entry_count,
                distinct = candidate.distinct_names,
                uniqueness = candidate.uniqueness,
                score = candidate.score,
                "candidate region"
            );
        }
    }

    fn region_selected(&self, best: &ScoredCandidate) {
        info!(
            name_column = %best.island.name_column,
            hours_column = %best.island.hours_column,
            start_row = best.island.first_row(),
            end_row = best.island.last_row(),
            score = best.score,
            "selected region"
        );
    }

    fn no_candidate(&self, rows: usize, columns: usize) {
        info!(rows, columns, "no employee/hours region found");
    }

    fn lookup_built(&self, kind: LookupKind, value_column: Option<&str>, entries: usize) {
        debug!(kind = kind.as_str(), value_column, entries, "built lookup");
    }

    fn missing_rate(&self, employee: &str) {
        warn!(employee, "no matching rate, defaulting to 0");
    }

    fn fuzzy_match(&self, kind: Option<LookupKind>, employee: &str, key: &str, similarity: f64) {
        warn!(kind = kind.map(|kind| kind.as_str()), employee, matched = key, similarity, "low-confidence name match");
    }
}
