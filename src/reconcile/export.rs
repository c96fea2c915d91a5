use crate::error::ExtractError;
use crate::reconcile::combiner::CombinedRecord;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes combined records as CSV with a `name,hours,rate,bonus,holidayHours,total` header.
pub fn write_csv<W: Write>(writer: W, records: &[CombinedRecord]) -> Result<(), ExtractError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(["name", "hours", "rate", "bonus", "holidayHours", "total"])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes combined records to a CSV file.
pub fn save_csv(path: &Path, records: &[CombinedRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create csv file: {}", path.display()))?;
    write_csv(file, records)
        .with_context(|| format!("failed to write csv file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_csv_renders_header_and_rows() {
        let records = vec![
            CombinedRecord::new("Alice", 40.0, 20.0, 10.0, 8.0),
            CombinedRecord::new("Bob, Jr", 37.5, 0.0, 0.0, 0.0),
        ];
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &records).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "name,hours,rate,bonus,holidayHours,total\n\
             Alice,40.0,20.0,10.0,8.0,970.0\n\
             \"Bob, Jr\",37.5,0.0,0.0,0.0,0.0\n"
        );
    }

    #[test]
    fn write_csv_empty_has_header_only() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "name,hours,rate,bonus,holidayHours,total\n");
    }

    #[test]
    fn save_csv_reports_path() {
        let error = save_csv(Path::new("no/such/dir/out.csv"), &[]).unwrap_err();
        assert!(error.to_string().contains("no/such/dir/out.csv"));
    }
}
