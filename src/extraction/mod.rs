//! # Extraction Module
//!
//! Island detection: every nearby column pair is scanned for gap-tolerant runs of
//! plausible (name, hours) rows, the runs are scored by volume and name diversity,
//! and the winner is aggregated into one entry per employee.

pub mod candidate;
pub mod criteria;
pub mod detector;
pub mod island;

pub use candidate::ScoredCandidate;
pub use criteria::{DetectorOptions, MatchPredicate, DEFAULT_STOP_WORDS};
pub use detector::{detect, EmployeeHours, ExtractionResult, IslandDetector};
pub use island::{Island, IslandEntry};
