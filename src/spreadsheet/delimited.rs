use crate::error::ExtractError;
use crate::error::ResultMessage;
use crate::spreadsheet::cell::CellValue;
use crate::spreadsheet::reference::index_to_column;
use crate::spreadsheet::table::Table;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a delimited text source into a table.
///
/// With `header` the first record names the columns: blank names are replaced by
/// column letters and data wider than the header row gets letter-named columns
/// appended. Without `header` every record is data and all columns are letters.
pub fn read_csv<R: Read>(reader: R, header: bool) -> Result<Table, ExtractError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records();
    let mut headers = Vec::<String>::new();
    if header {
        if let Some(record) = records.next() {
            for (index, field) in record?.iter().enumerate() {
                let name = field.trim();
                headers.push(if name.is_empty() { index_to_column(index) } else { name.to_owned() });
            }
        }
    }

    let mut rows = Vec::<Vec<CellValue>>::new();
    for record in records {
        let row: Vec<CellValue> = record?.iter().map(CellValue::parse).collect();
        while headers.len() < row.len() {
            headers.push(index_to_column(headers.len()));
        }
        rows.push(row);
    }

    Ok(Table::new(headers, rows)?)
}

/// Reads a delimited text file into a table. Errors are prefixed with the file path.
pub fn open_csv<P: AsRef<Path>>(path: P, header: bool) -> Result<Table, ExtractError> {
    let path = path.as_ref();
    File::open(path)
        .map_err(ExtractError::from)
        .and_then(|file| read_csv(file, header))
        .with_prefix(path.display().to_string().as_str())
}
