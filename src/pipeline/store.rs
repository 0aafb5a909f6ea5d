//! Master payers roster persistence

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::pipeline::error::RosterError;
use crate::pipeline::roster::Roster;

/// File name of the persisted payers roster
const STORE_FILE: &str = "payers.json";

/// Default location of the master roster.
///
/// Lives under the platform data directory (e.g. `~/.local/share/feecheck`
/// on Linux), falling back to the working directory when the platform has
/// no data directory. Overridable per run with `--store`.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("feecheck").join(STORE_FILE))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE))
}

/// Persist the master roster, replacing any previous version.
///
/// The roster is written as pretty-printed JSON (2-space indent, UTF-8,
/// non-ASCII text verbatim) so the store stays human-diffable. The write
/// goes to a temporary file in the same directory and is renamed into
/// place, so an interrupted save leaves the previous store intact.
pub fn save_roster(roster: &Roster, path: &Path) -> Result<(), RosterError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RosterError::persistence(path, e))?;
        }
    }

    let mut json =
        serde_json::to_string_pretty(roster).map_err(|e| RosterError::persistence(path, e))?;
    json.push('\n');

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json).map_err(|e| RosterError::persistence(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| RosterError::persistence(path, e))?;

    Ok(())
}

/// Load the persisted roster.
///
/// A missing store file is the first-run state and loads as an empty
/// roster. Any other failure, including malformed JSON in an existing
/// store, is a persistence error; the store is never auto-repaired.
pub fn load_roster(path: &Path) -> Result<Roster, RosterError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Roster::new()),
        Err(e) => return Err(RosterError::persistence(path, e)),
    };

    serde_json::from_str(&text).map_err(|e| RosterError::persistence(path, e))
}
