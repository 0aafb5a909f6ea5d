//! Feecheck: Welfare Fee Roster Library
//!
//! A library for maintaining a persisted roster of fee-paying students,
//! checking candidate rosters against it by ID membership, and exporting
//! either side of the split to CSV.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
