//! Roster extraction from delimited student files

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::pipeline::error::RosterError;
use crate::pipeline::roster::{is_valid_id, Extraction, Student};

/// UTF-8 byte-order mark some spreadsheet exports prepend to CSV files
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Extract a roster from a delimited file with a header row.
///
/// Rows whose ID cell is not a valid university ID (trimmed, all ASCII
/// digits, 7 to 10 characters) are skipped and counted, never reported
/// as errors. A repeated valid ID overwrites the earlier record.
///
/// # Arguments
/// * `path` - Input file (comma-delimited UTF-8, optional BOM)
/// * `id_column` - Header label of the ID column
/// * `name_column` - Header label of the name column; `None` leaves names empty
/// * `email_column` - Header label of the email column; `None` leaves emails empty
///
/// # Returns
/// The extracted roster plus the count of rows rejected for an invalid ID
pub fn extract_students(
    path: &Path,
    id_column: &str,
    name_column: Option<&str>,
    email_column: Option<&str>,
) -> Result<Extraction, RosterError> {
    let bytes = std::fs::read(path).map_err(|e| RosterError::read(path, e))?;
    let text = std::str::from_utf8(strip_bom(&bytes))
        .map_err(|_| RosterError::read(path, "file is not valid UTF-8"))?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| RosterError::read(path, e))?
        .clone();
    if headers.is_empty() {
        return Err(RosterError::read(path, "file has no header row"));
    }

    let id_index = find_column(&headers, id_column).ok_or_else(|| column_error(path, &headers, id_column))?;
    let name_index = match name_column {
        Some(label) => Some(find_column(&headers, label).ok_or_else(|| column_error(path, &headers, label))?),
        None => None,
    };
    let email_index = match email_column {
        Some(label) => Some(find_column(&headers, label).ok_or_else(|| column_error(path, &headers, label))?),
        None => None,
    };

    let mut extraction = Extraction::default();
    for record in reader.records() {
        let record = record.map_err(|e| RosterError::read(path, e))?;

        let id = record.get(id_index).unwrap_or("").trim();
        if !is_valid_id(id) {
            extraction.skipped += 1;
            continue;
        }

        let name = field_at(&record, name_index);
        let email = field_at(&record, email_index);
        extraction
            .roster
            .insert(id.to_string(), Student::new(id, name, email));
    }

    Ok(extraction)
}

/// Read just the header labels of a delimited file.
///
/// Used by the interactive shell to drive column selection before a full
/// extraction. An empty file yields an empty list rather than an error.
pub fn get_column_names(path: &Path) -> Result<Vec<String>, RosterError> {
    let bytes = std::fs::read(path).map_err(|e| RosterError::read(path, e))?;
    let text = std::str::from_utf8(strip_bom(&bytes))
        .map_err(|_| RosterError::read(path, "file is not valid UTF-8"))?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
    let headers = reader.headers().map_err(|e| RosterError::read(path, e))?;
    Ok(headers.iter().map(|h| h.to_string()).collect())
}

/// Drop a leading UTF-8 byte-order mark if present
fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Position of a header label, matched exactly
fn find_column(headers: &StringRecord, label: &str) -> Option<usize> {
    headers.iter().position(|h| h == label)
}

fn column_error(path: &Path, headers: &StringRecord, label: &str) -> RosterError {
    let available = headers.iter().collect::<Vec<_>>().join(", ");
    RosterError::read(
        path,
        format!("column '{}' not found in header (available: {})", label, available),
    )
}

/// Cell value at an optional column, trimmed; absent columns and short rows give ""
fn field_at(record: &StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|i| record.get(i))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
