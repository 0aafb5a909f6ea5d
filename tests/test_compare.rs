//! Integration tests for roster comparison

use std::collections::HashSet;

use feecheck::pipeline::{compare_rosters, Roster};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_compare_splits_candidate_by_master_membership() {
    let master = roster_of(&[student("123456789", "Dana", "d@x.com")]);
    let candidate = roster_of(&[
        student("123456789", "Dana2", "d2@x.com"),
        student("987654321", "Omer", "o@x.com"),
    ]);

    let outcome = compare_rosters(&master, &candidate);

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(
        outcome.matches[0].name, "Dana2",
        "A match should carry the candidate's record, not the master's"
    );
    assert_eq!(outcome.non_matches.len(), 1);
    assert_eq!(outcome.non_matches[0].name, "Omer");
}

#[test]
fn test_compare_preserves_candidate_order() {
    let master = roster_of(&[
        student("111111111", "A", ""),
        student("333333333", "C", ""),
    ]);
    let candidate = roster_of(&[
        student("111111111", "A", ""),
        student("222222222", "B", ""),
        student("333333333", "C", ""),
        student("444444444", "D", ""),
    ]);

    let outcome = compare_rosters(&master, &candidate);

    let match_names: Vec<&str> = outcome.matches.iter().map(|s| s.name.as_str()).collect();
    let non_match_names: Vec<&str> = outcome.non_matches.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(match_names, ["A", "C"], "Matches should keep candidate file order");
    assert_eq!(non_match_names, ["B", "D"], "Non-matches should keep candidate file order");
}

#[test]
fn test_compare_ignores_master_only_records() {
    let master = roster_of(&[
        student("123456789", "Dana", "d@x.com"),
        student("111111111", "Master Only", "m@x.com"),
    ]);
    let candidate = roster_of(&[student("123456789", "Dana", "d@x.com")]);

    let outcome = compare_rosters(&master, &candidate);

    assert_eq!(outcome.matches.len(), 1);
    assert!(outcome.non_matches.is_empty());
    assert!(
        !outcome.matches.iter().any(|s| s.id == "111111111"),
        "Records only in the master roster do not appear in the outcome"
    );
}

#[test]
fn test_compare_with_empty_master() {
    let master = Roster::new();
    let candidate = roster_of(&[
        student("123456789", "Dana", "d@x.com"),
        student("987654321", "Omer", "o@x.com"),
    ]);

    let outcome = compare_rosters(&master, &candidate);

    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.non_matches.len(), 2, "Everyone is a non-payer against an empty master");
}

#[test]
fn test_compare_with_empty_candidate() {
    let master = roster_of(&[student("123456789", "Dana", "d@x.com")]);
    let candidate = Roster::new();

    let outcome = compare_rosters(&master, &candidate);

    assert!(outcome.matches.is_empty());
    assert!(outcome.non_matches.is_empty());
}

#[test]
fn test_compare_partition_is_total_and_disjoint() {
    let master = create_large_roster(300);
    let mut candidate = create_large_roster(200);
    for (i, (id, s)) in master.iter().enumerate() {
        if i % 3 == 0 {
            candidate.insert(id.clone(), s.clone());
        }
    }

    let outcome = compare_rosters(&master, &candidate);

    assert_eq!(
        outcome.matches.len() + outcome.non_matches.len(),
        candidate.len(),
        "Every candidate record lands in exactly one side"
    );

    let match_ids: HashSet<&str> = outcome.matches.iter().map(|s| s.id.as_str()).collect();
    assert!(
        outcome.non_matches.iter().all(|s| !match_ids.contains(s.id.as_str())),
        "The two sides should be disjoint"
    );
    assert!(
        outcome.matches.iter().all(|s| master.contains_key(&s.id)),
        "Every match must exist in the master roster"
    );
}

#[test]
fn test_compare_does_not_mutate_inputs() {
    let master = roster_of(&[student("123456789", "Dana", "d@x.com")]);
    let candidate = roster_of(&[student("987654321", "Omer", "o@x.com")]);
    let master_before = master.clone();
    let candidate_before = candidate.clone();

    let _ = compare_rosters(&master, &candidate);

    assert_eq!(master, master_before);
    assert_eq!(candidate, candidate_before);
}
