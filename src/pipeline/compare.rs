//! Candidate roster comparison against the master payers roster

use crate::pipeline::roster::{CompareOutcome, Roster};

/// Partition a candidate roster by ID membership in the master roster.
///
/// Walks the candidate in its own iteration order; every record lands in
/// exactly one of the two output lists. Records that only exist in the
/// master are ignored, so the comparison is one-directional. Neither
/// input is mutated.
pub fn compare_rosters(master: &Roster, candidate: &Roster) -> CompareOutcome {
    let mut outcome = CompareOutcome::default();

    for (id, student) in candidate {
        if master.contains_key(id) {
            outcome.matches.push(student.clone());
        } else {
            outcome.non_matches.push(student.clone());
        }
    }

    outcome
}
