//! Shared test utilities and fixture generators

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use feecheck::pipeline::{Roster, Student};

/// Write a CSV file from raw lines into a fresh temp directory
pub fn create_temp_csv(lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.csv");

    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    drop(file);

    (temp_dir, path)
}

/// A small class list with one valid row and one row whose ID is too short
///
/// Header: `TZ,FullName,Mail`
pub fn create_sample_csv() -> (TempDir, PathBuf) {
    create_temp_csv(&[
        "TZ,FullName,Mail",
        "123456789,Dana,d@x.com",
        "12,Bad,b@x.com",
    ])
}

/// Shorthand student record constructor
pub fn student(id: &str, name: &str, email: &str) -> Student {
    Student::new(id, name, email)
}

/// Build a roster from records, keyed by their IDs
pub fn roster_of(students: &[Student]) -> Roster {
    students
        .iter()
        .cloned()
        .map(|s| (s.id.clone(), s))
        .collect()
}

/// Random roster with unique 9-digit IDs for larger fixtures
pub fn create_large_roster(count: usize) -> Roster {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let mut roster = Roster::new();
    while roster.len() < count {
        let id = rng.gen_range(100_000_000u64..1_000_000_000).to_string();
        let n = roster.len();
        roster.insert(
            id.clone(),
            Student::new(id, format!("Student {}", n), format!("s{}@uni.example", n)),
        );
    }
    roster
}
