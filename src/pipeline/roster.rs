//! Core roster types shared across the pipeline

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single student record keyed by university ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// University ID, 7 to 10 ASCII digits
    pub id: String,
    /// Full name as it appeared in the source file (may be empty)
    #[serde(default)]
    pub name: String,
    /// Email address as it appeared in the source file (may be empty)
    #[serde(default)]
    pub email: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Mapping from university ID to student record.
///
/// Keys iterate in insertion order, so comparison results and exports
/// follow the row order of the file the roster came from. Re-inserting
/// an existing ID replaces the record but keeps its original position.
pub type Roster = IndexMap<String, Student>;

/// Result of extracting a roster from a delimited student file
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Records with a valid ID, keyed by that ID
    pub roster: Roster,
    /// Number of data rows rejected for an invalid ID
    pub skipped: usize,
}

/// Partition of a candidate roster against the master payers roster
#[derive(Debug, Clone, Default)]
pub struct CompareOutcome {
    /// Candidate records whose ID is present in the master roster
    pub matches: Vec<Student>,
    /// Candidate records whose ID is absent from the master roster
    pub non_matches: Vec<Student>,
}

/// Check whether a raw cell value is a valid university ID.
///
/// The value is trimmed first; it is valid when it consists entirely of
/// ASCII digits and is 7 to 10 characters long. This is the only
/// validation the pipeline applies to incoming rows.
pub fn is_valid_id(raw: &str) -> bool {
    let trimmed = raw.trim();
    (7..=10).contains(&trimmed.len()) && trimmed.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_id_lengths() {
        assert!(is_valid_id("1234567"), "7 digits should be valid");
        assert!(is_valid_id("123456789"), "9 digits should be valid");
        assert!(is_valid_id("1234567890"), "10 digits should be valid");
        assert!(!is_valid_id("123456"), "6 digits should be too short");
        assert!(!is_valid_id("12345678901"), "11 digits should be too long");
        assert!(!is_valid_id(""), "empty string should be invalid");
    }

    #[test]
    fn test_valid_id_trims_whitespace() {
        assert!(is_valid_id("  123456789  "));
        assert!(is_valid_id("\t123456789\n"));
    }

    #[test]
    fn test_invalid_id_characters() {
        assert!(!is_valid_id("12345678a"));
        assert!(!is_valid_id("123-456789"));
        assert!(!is_valid_id("123456789.0"));
        assert!(!is_valid_id("1234 5678"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are digits but not ASCII digits
        assert!(!is_valid_id("١٢٣٤٥٦٧٨٩"));
    }

    #[test]
    fn test_duplicate_insert_keeps_position_and_replaces_value() {
        let mut roster = Roster::new();
        roster.insert("123456789".to_string(), Student::new("123456789", "First", ""));
        roster.insert("987654321".to_string(), Student::new("987654321", "Second", ""));
        roster.insert("123456789".to_string(), Student::new("123456789", "Updated", ""));

        let ids: Vec<&String> = roster.keys().collect();
        assert_eq!(ids, ["123456789", "987654321"]);
        assert_eq!(roster["123456789"].name, "Updated");
    }
}
