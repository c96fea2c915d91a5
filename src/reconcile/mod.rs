//! # Reconcile Module
//!
//! Joins an extraction result with rate, bonus and holiday tables keyed by
//! normalized employee name, and hands the combined records to CSV renderers.

pub mod combiner;
pub mod export;
pub mod lookup;
pub mod matcher;

pub use combiner::{combine, combine_from_master, CombinedRecord, Combiner, MasterEntry};
pub use export::{save_csv, write_csv};
pub use lookup::{normalize_name, LookupKind, LookupTable};
pub use matcher::{NameMatch, NameMatcher, NameMatching};
