//! # Rusty Hours
//!
//! Finds the employee-name/hours block of an arbitrary spreadsheet and reconciles
//! it with rate, bonus and holiday tables to produce per-employee invoice totals.
//!
//! ## Features
//!
//! - **Header-agnostic detection**: no reliance on column names or positions; nearby
//!   column pairs are scanned and scored
//! - **Gap tolerance**: short runs of blank or unrelated rows do not split a region
//! - **Summary over detail**: regions with many distinct names outrank repeated logs
//! - **Name reconciliation**: trimmed, case-insensitive joins with an opt-in
//!   similarity fallback
//! - **Injectable diagnostics**: candidate rankings and missing rates go to a
//!   `Diagnostics` sink, `tracing` by default
//!
//! ## Pipeline
//!
//! ```no_run
//! use rusty_hours::{combine, detect, open_csv};
//!
//! # fn main() -> Result<(), rusty_hours::ExtractError> {
//! let timesheet = open_csv("timesheet.csv", false)?;
//! let rates = open_csv("rates.csv", true)?;
//! let extraction = detect(&timesheet);
//! let records = combine(&extraction, &rates, None, None);
//! # Ok(())
//! # }
//! ```

pub mod diagnostics;
pub mod error;
pub mod extraction;
pub mod reconcile;
pub mod spreadsheet;

pub use diagnostics::{Diagnostics, SilentDiagnostics, TracingDiagnostics};
pub use error::ExtractError;
pub use extraction::{detect, DetectorOptions, EmployeeHours, ExtractionResult, IslandDetector};
pub use reconcile::{combine, combine_from_master, CombinedRecord, Combiner, MasterEntry, NameMatching};
pub use spreadsheet::{open_csv, read_csv, CellValue, Range, Table};

#[cfg(test)]
mod tests {
    use super::*;

    const TIMESHEET: &str = "\
Weekly timesheet,,,,
Week ending 14/03,,,,
,,,,
Employee,Client,Role,Hours,Notes
Alice Smith,Acme,Driver,37.5,
Bob Jones,Acme,Driver,42,late shift
Carol White,Globex,Driver,35,
Total,,,114.5,
,,,,
,,,,
,,,,
,,,,
Signed off by,Dave,,,
";

    const RATES: &str = "\
Name,Pay Rate
alice smith,20
BOB JONES,15.50/hr
";

    const HOLIDAY: &str = "\
Name,Holiday Hours
Carol White,7.5
";

    #[test]
    fn timesheet_to_invoice_records() {
        let timesheet = read_csv(TIMESHEET.as_bytes(), false).unwrap();
        let rates = read_csv(RATES.as_bytes(), true).unwrap();
        let holiday = read_csv(HOLIDAY.as_bytes(), true).unwrap();

        let extraction = IslandDetector::new(DetectorOptions::default(), &SilentDiagnostics).detect(&timesheet);
        assert_eq!(extraction.employee_column, "A");
        assert_eq!(extraction.hours_column, "D");
        assert_eq!(extraction.start_row, 4);
        assert_eq!(extraction.end_row, 6);

        let records = Combiner::new(&SilentDiagnostics).combine(&extraction, &rates, None, Some(&holiday));
        let totals: Vec<(&str, f64)> = records.iter().map(|record| (record.name.as_str(), record.total)).collect();
        assert_eq!(totals, [("Bob Jones", 651.0), ("Alice Smith", 750.0), ("Carol White", 0.0)]);

        let mut buffer = Vec::new();
        reconcile::write_csv(&mut buffer, &records).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 4);
    }
}
