use crate::diagnostics::Diagnostics;
use crate::diagnostics::TracingDiagnostics;
use crate::extraction::detector::ExtractionResult;
use crate::reconcile::lookup::LookupKind;
use crate::reconcile::lookup::LookupTable;
use crate::reconcile::matcher::NameMatcher;
use crate::reconcile::matcher::NameMatching;
use crate::spreadsheet::table::Table;
use serde::{Deserialize, Serialize};

/// Per-employee financial totals handed to invoice and CSV renderers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedRecord {
    /// Employee name, original casing
    pub name: String,
    pub hours: f64,
    pub rate: f64,
    pub bonus: f64,
    pub holiday_hours: f64,
    /// hours × rate + bonus + holiday_hours × rate
    pub total: f64,
}

impl CombinedRecord {
    pub fn new(name: &str, hours: f64, rate: f64, bonus: f64, holiday_hours: f64) -> Self {
        Self {
            name: name.to_owned(),
            hours,
            rate,
            bonus,
            holiday_hours,
            total: hours * rate + bonus + holiday_hours * rate,
        }
    }
}

/// An employee whose hours and bonus were merged upstream.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterEntry {
    pub name: String,
    pub hours: f64,
    #[serde(default)]
    pub bonus: f64,
}

/// Joins extracted hours with rate, bonus and holiday tables by normalized name.
/// A missing rate is reported and defaults to zero; missing bonus or holiday
/// values default to zero silently. No employee is ever dropped.
pub struct Combiner<'a> {
    matching: NameMatching,
    diagnostics: &'a dyn Diagnostics,
}

impl Default for Combiner<'static> {
    fn default() -> Self {
        Self::new(&TracingDiagnostics)
    }
}

impl<'a> Combiner<'a> {
    pub fn new(diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            matching: NameMatching::default(),
            diagnostics,
        }
    }

    pub fn with_matching(mut self, matching: NameMatching) -> Self {
        self.matching = matching;
        self
    }

    /// One record per extracted employee, in extraction order.
    pub fn combine(
        &self,
        extraction: &ExtractionResult,
        rates: &Table,
        bonus: Option<&Table>,
        holiday: Option<&Table>,
    ) -> Vec<CombinedRecord> {
        let rates = LookupTable::build_with(rates, LookupKind::Rate, self.diagnostics);
        let bonus = bonus.map(|table| LookupTable::build_with(table, LookupKind::Bonus, self.diagnostics));
        let holiday = holiday.map(|table| LookupTable::build_with(table, LookupKind::Holiday, self.diagnostics));
        let matcher = NameMatcher::new(self.matching, self.diagnostics);

        extraction.data
            .iter()
            .map(|entry| {
                let name = entry.employee.as_str();
                CombinedRecord::new(
                    name,
                    entry.hours,
                    self.rate(&matcher, &rates, name),
                    optional(&matcher, bonus.as_ref(), name),
                    optional(&matcher, holiday.as_ref(), name),
                )
            })
            .collect()
    }

    /// Same rate and holiday join for employees whose bonus is already resolved.
    pub fn combine_from_master(
        &self,
        master: &[MasterEntry],
        rates: &Table,
        holiday: Option<&Table>,
    ) -> Vec<CombinedRecord> {
        let rates = LookupTable::build_with(rates, LookupKind::Rate, self.diagnostics);
        let holiday = holiday.map(|table| LookupTable::build_with(table, LookupKind::Holiday, self.diagnostics));
        let matcher = NameMatcher::new(self.matching, self.diagnostics);

        master
            .iter()
            .map(|entry| {
                CombinedRecord::new(
                    &entry.name,
                    entry.hours,
                    self.rate(&matcher, &rates, &entry.name),
                    entry.bonus,
                    optional(&matcher, holiday.as_ref(), &entry.name),
                )
            })
            .collect()
    }

    fn rate(&self, matcher: &NameMatcher, rates: &LookupTable, name: &str) -> f64 {
        match matcher.resolve(rates, name) {
            Some(found) => found.value,
            None => {
                self.diagnostics.missing_rate(name);
                0.0
            }
        }
    }
}

fn optional(matcher: &NameMatcher, lookup: Option<&LookupTable>, name: &str) -> f64 {
    lookup
        .and_then(|lookup| matcher.resolve(lookup, name))
        .map(|found| found.value)
        .unwrap_or(0.0)
}

/// Combines with exact matching, reporting through `tracing`.
pub fn combine(
    extraction: &ExtractionResult,
    rates: &Table,
    bonus: Option<&Table>,
    holiday: Option<&Table>,
) -> Vec<CombinedRecord> {
    Combiner::default().combine(extraction, rates, bonus, holiday)
}

/// Combines pre-merged employees with exact matching, reporting through `tracing`.
pub fn combine_from_master(master: &[MasterEntry], rates: &Table, holiday: Option<&Table>) -> Vec<CombinedRecord> {
    Combiner::default().combine_from_master(master, rates, holiday)
}
