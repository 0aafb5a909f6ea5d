//! CSV export of student records

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::pipeline::{RosterError, Student};

/// Column headers of every exported file
const EXPORT_HEADERS: [&str; 3] = ["ID", "Name", "Email"];

/// UTF-8 byte-order mark, written first so spreadsheet tools pick the right encoding
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Write student records to a CSV file.
///
/// Output is UTF-8 with a leading byte-order mark, a fixed
/// `ID,Name,Email` header row, and one row per record in input order.
/// ID cells pass through [`normalize_id`] on the way out. An empty
/// record list produces a header-only file; callers that consider that
/// an error must check before invoking.
///
/// # Arguments
/// * `records` - Records to write, in output order
/// * `path` - Destination file, overwritten if present
pub fn export_students(records: &[Student], path: &Path) -> Result<(), RosterError> {
    let mut file = File::create(path).map_err(|e| RosterError::write(path, e))?;
    file.write_all(UTF8_BOM).map_err(|e| RosterError::write(path, e))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(EXPORT_HEADERS)
        .map_err(|e| RosterError::write(path, e))?;

    for student in records {
        let id = normalize_id(&student.id);
        writer
            .write_record([id.as_str(), student.name.as_str(), student.email.as_str()])
            .map_err(|e| RosterError::write(path, e))?;
    }

    writer.flush().map_err(|e| RosterError::write(path, e))?;
    Ok(())
}

/// Collapse float-formatted IDs to plain integer strings.
///
/// IDs that travelled through spreadsheet software sometimes arrive as
/// "123456789.0". Values that parse as a finite number are truncated
/// toward zero and rendered as a decimal integer; anything else passes
/// through unchanged. Applied on every export, whatever the records'
/// origin.
pub fn normalize_id(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => (value as i64).to_string(),
        _ => raw.to_string(),
    }
}
