//! # Spreadsheet Module
//!
//! In-memory representation of loosely typed tabular input: cells, tables,
//! A1-style references and ranges, plus a delimited-text loader. Header names
//! carry no meaning here; any column may hold names, hours or unrelated data.

pub mod cell;
pub mod delimited;
pub mod range;
pub mod reference;
pub mod table;

pub use cell::CellValue;
pub use delimited::{open_csv, read_csv};
pub use range::Range;
pub use table::{Table, TableError};
