use thiserror::Error;

/// Main error type for the Rusty Hours library.
/// Aggregates errors from loaders and table construction. Detection and
/// reconciliation never fail, so nothing here originates from them.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Third-party library errors
    #[error("{0}")]
    CsvError(#[from] csv::Error),

    // Spreadsheet module errors
    #[error("{0}")]
    TableError(#[from] crate::spreadsheet::table::TableError),

    #[error("{0}")]
    RangeError(#[from] crate::spreadsheet::range::RangeError),
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, ExtractError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| ExtractError::WithContextError(format!("{}: {}", message, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::table::TableError;

    #[test]
    fn with_prefix_wraps_message() {
        let result: Result<(), ExtractError> = Err(TableError::DuplicateHeader("Name".to_owned()).into());
        let error = result.with_prefix("timesheet.csv").unwrap_err();
        assert_eq!(error.to_string(), "timesheet.csv: Duplicate header 'Name'");
    }

    #[test]
    fn with_prefix_keeps_success() {
        let result: Result<usize, ExtractError> = Ok(3);
        assert_eq!(result.with_prefix("ignored").unwrap(), 3);
    }
}
