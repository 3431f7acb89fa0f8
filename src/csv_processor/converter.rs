use crate::csv_processor::reader::CsvStreamReader;
use crate::csv_processor::scalar::parse_scalar;
use crate::json_output::{write_json_file, JsonStyle};
use crate::records::Record;
use crate::utils::Result;
use csv::StringRecord;
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::info;

/// Maps one CSV row onto the header, or `None` if the row is dropped.
///
/// A row is dropped only when it has exactly one raw, untrimmed `""` cell per
/// header. Cells past the header width have no name and are discarded; header
/// names missing a cell get `null`.
pub fn row_to_record(headers: &StringRecord, row: &StringRecord) -> Option<Record> {
    if headers.is_empty() {
        return None;
    }
    if row.len() == headers.len() && row.iter().all(|cell| cell.is_empty()) {
        return None;
    }

    let mut record = Record::new();
    for (i, name) in headers.iter().enumerate() {
        let value = match row.get(i) {
            Some(cell) => JsonValue::from(parse_scalar(cell)),
            None => JsonValue::Null,
        };
        record.insert(name.trim(), value);
    }
    Some(record)
}

/// Reads a CSV file with a header row into records, in row order.
pub fn read_csv_records(csv_path: &Path) -> Result<Vec<Record>> {
    let mut reader = CsvStreamReader::new(csv_path);
    let rows = reader.iter_records()?;
    let headers = reader.headers().cloned().unwrap_or_default();

    let mut records = Vec::new();
    for result in rows {
        let (_, row) = result?;
        if let Some(record) = row_to_record(&headers, &row) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Converts one CSV file to a pretty JSON array, non-ASCII kept literal.
/// Returns the number of records written.
pub fn convert_csv_to_json(csv_path: &Path, json_path: &Path) -> Result<usize> {
    let records = read_csv_records(csv_path)?;
    write_json_file(json_path, &records, JsonStyle::Literal)?;

    info!("Conversion complete! JSON file saved to: {}", json_path.display());
    info!("Total entries: {}", records.len());

    Ok(records.len())
}
