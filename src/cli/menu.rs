//! Interactive menu session for roster management

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use dialoguer::Select;

use crate::pipeline::{
    compare_rosters, extract_students, get_column_names, load_roster, save_roster, Extraction,
    Roster, Student,
};
use crate::report::{display_compare_summary, display_records, display_status, export_students};
use crate::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_count,
    print_error, print_info, print_success, print_warning,
};

use super::prompts::{
    confirm_step, prompt_file_path, prompt_output_path, select_column, select_optional_column,
};

/// Run the interactive session. Loops until the user quits; failures in
/// a single action are reported and return to the menu.
pub fn run_menu(store_path: &Path) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    let mut master = load_roster(store_path)?;

    if master.is_empty() {
        print_info("No payers roster loaded yet");
    } else {
        print_count("payer(s) in the master roster", master.len(), None);
    }

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(&[
                "Load payers file",
                "Check a class list",
                "Show status",
                "Quit",
            ])
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => load_master(&mut master, store_path),
            1 => check_class_list(&master),
            2 => show_status(&master, store_path),
            _ => break,
        };

        if let Err(err) = outcome {
            print_error(&format!("{:#}", err));
        }
    }

    Ok(())
}

/// Extract a payers file and replace the master roster with it.
/// A file yielding zero valid IDs leaves the previous roster untouched.
fn load_master(master: &mut Roster, store_path: &Path) -> Result<()> {
    let Some((input, extraction)) = prompt_and_extract("Payers file to load")? else {
        return Ok(());
    };
    let Extraction { roster, skipped } = extraction;

    if roster.is_empty() {
        print_warning("No valid student IDs found; keeping the previous payers roster");
        if skipped > 0 {
            print_count("row(s) skipped (invalid ID)", skipped, None);
        }
        return Ok(());
    }

    save_roster(&roster, store_path).context("Master roster was not replaced")?;
    *master = roster;

    print_success(&format!(
        "Master roster replaced: {} payer(s) from {}",
        master.len(),
        input.display()
    ));
    if skipped > 0 {
        print_count("row(s) skipped (invalid ID)", skipped, None);
    }
    Ok(())
}

/// Extract a class list, compare it against the master, and offer exports.
fn check_class_list(master: &Roster) -> Result<()> {
    if master.is_empty() {
        print_warning("No payers roster loaded; load a payers file first");
        return Ok(());
    }

    let Some((_, extraction)) = prompt_and_extract("Class list to check")? else {
        return Ok(());
    };

    if extraction.roster.is_empty() {
        print_warning("No valid student IDs found in the class list");
        return Ok(());
    }
    if extraction.skipped > 0 {
        print_count("row(s) skipped (invalid ID)", extraction.skipped, None);
    }

    let outcome = compare_rosters(master, &extraction.roster);
    display_compare_summary(&outcome);
    display_records("PAYERS", &outcome.matches);
    display_records("NON-PAYERS", &outcome.non_matches);

    println!();
    offer_export("payers", &outcome.matches, "payers.csv")?;
    offer_export("non-payers", &outcome.non_matches, "non_payers.csv")?;
    Ok(())
}

/// Prompt for an input file and its column mapping, then extract it.
/// Returns `None` when the chosen file has no usable header.
fn prompt_and_extract(message: &str) -> Result<Option<(std::path::PathBuf, Extraction)>> {
    let input = prompt_file_path(message)?;

    let headers = get_column_names(&input)?;
    if headers.is_empty() {
        print_warning("File is empty or invalid");
        return Ok(None);
    }

    let id_column = select_column("ID column", &headers, 0)?;
    let name_column = select_optional_column("Name column", &headers, Some(1))?;
    let email_column = select_optional_column("Email column", &headers, Some(2))?;

    let spinner = create_spinner("Reading student rows...");
    let extraction = extract_students(
        &input,
        &id_column,
        name_column.as_deref(),
        email_column.as_deref(),
    )?;

    if extraction.roster.is_empty() {
        finish_with_warning(&spinner, "No valid student IDs found");
    } else {
        finish_with_success(
            &spinner,
            &format!("Read {} student record(s)", extraction.roster.len()),
        );
    }

    Ok(Some((input, extraction)))
}

/// Offer to export one comparison subset; empty subsets are never exported.
fn offer_export(label: &str, records: &[Student], default_name: &str) -> Result<()> {
    if records.is_empty() {
        print_info(&format!("Nothing to export for {}", label));
        return Ok(());
    }

    if !confirm_step(&format!("Export {} ({} record(s))?", label, records.len()))? {
        return Ok(());
    }

    let path = prompt_output_path("Output file", default_name)?;
    export_students(records, &path)
        .with_context(|| format!("Failed to export {}", label))?;
    print_success(&format!(
        "Exported {} record(s) to {}",
        records.len(),
        path.display()
    ));
    Ok(())
}

/// Show where the store lives, how many payers it holds, and when it changed.
fn show_status(master: &Roster, store_path: &Path) -> Result<()> {
    let modified = fs::metadata(store_path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(DateTime::<Local>::from);
    display_status(store_path, master.len(), modified);
    Ok(())
}
