//! Feecheck: Welfare Fee Payers Roster CLI Tool
//!
//! A command-line tool for maintaining a persisted roster of fee-paying
//! students and checking class lists against it.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;

use cli::{confirm_step, prompt_output_path, run_menu, Cli, Commands};
use pipeline::{compare_rosters, extract_students, load_roster, save_roster, Student};
use report::{display_compare_summary, display_records, display_status, export_students};
use utils::{
    create_spinner, finish_with_success, print_completion, print_count, print_step_header,
    print_success, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store_path = cli.store_path();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Load {
                input,
                id_column,
                name_column,
                email_column,
            } => run_load(
                input,
                id_column,
                name_column.as_deref(),
                email_column.as_deref(),
                &store_path,
            ),
            Commands::Check {
                input,
                id_column,
                name_column,
                email_column,
                no_export,
                payers_output,
                non_payers_output,
            } => run_check(
                input,
                id_column,
                name_column.as_deref(),
                email_column.as_deref(),
                &ExportTargets {
                    no_prompt: *no_export,
                    payers: payers_output.as_deref(),
                    non_payers: non_payers_output.as_deref(),
                },
                &store_path,
            ),
            Commands::Status => run_status(&store_path),
        };
    }

    // No subcommand - run the interactive session
    run_menu(&store_path)
}

/// Replace the persisted master roster from a payers file.
fn run_load(
    input: &Path,
    id_column: &str,
    name_column: Option<&str>,
    email_column: Option<&str>,
    store_path: &Path,
) -> Result<()> {
    print_step_header(1, "Read Payers File");
    let spinner = create_spinner("Reading payers file...");
    let extraction = extract_students(input, id_column, name_column, email_column)?;
    finish_with_success(&spinner, "Payers file read");

    let skipped_note = format!("({} skipped)", extraction.skipped);
    let note = if extraction.skipped > 0 {
        Some(skipped_note.as_str())
    } else {
        None
    };
    print_count("valid student row(s)", extraction.roster.len(), note);

    if extraction.roster.is_empty() {
        anyhow::bail!(
            "No valid student IDs found in {}; master roster left unchanged",
            input.display()
        );
    }

    print_step_header(2, "Persist Master Roster");
    save_roster(&extraction.roster, store_path).context("Master roster was not replaced")?;
    print_success(&format!(
        "Saved {} payer(s) to {}",
        extraction.roster.len(),
        store_path.display()
    ));

    print_completion();
    Ok(())
}

/// Export destinations for a check run
struct ExportTargets<'a> {
    /// Suppress the interactive export prompts
    no_prompt: bool,
    /// Explicit destination for the payers subset
    payers: Option<&'a Path>,
    /// Explicit destination for the non-payers subset
    non_payers: Option<&'a Path>,
}

/// Compare a class list against the persisted master roster and
/// optionally export each side of the split.
fn run_check(
    input: &Path,
    id_column: &str,
    name_column: Option<&str>,
    email_column: Option<&str>,
    targets: &ExportTargets,
    store_path: &Path,
) -> Result<()> {
    print_step_header(1, "Load Master Roster");
    let master = load_roster(store_path)?;
    if master.is_empty() {
        print_warning(
            "Master roster is empty (run 'feecheck load' first); every record will be a non-payer",
        );
    } else {
        print_count("payer(s) in the master roster", master.len(), None);
    }

    print_step_header(2, "Read Class List");
    let spinner = create_spinner("Reading class list...");
    let extraction = extract_students(input, id_column, name_column, email_column)?;
    finish_with_success(&spinner, "Class list read");

    let skipped_note = format!("({} skipped)", extraction.skipped);
    let note = if extraction.skipped > 0 {
        Some(skipped_note.as_str())
    } else {
        None
    };
    print_count("valid student row(s)", extraction.roster.len(), note);

    if extraction.roster.is_empty() {
        anyhow::bail!("No valid student IDs found in {}", input.display());
    }

    print_step_header(3, "Compare Against Master");
    let outcome = compare_rosters(&master, &extraction.roster);
    display_compare_summary(&outcome);
    display_records("PAYERS", &outcome.matches);
    display_records("NON-PAYERS", &outcome.non_matches);

    println!();
    write_subset(
        "payers",
        &outcome.matches,
        targets.payers,
        "payers.csv",
        targets.no_prompt,
    )?;
    write_subset(
        "non-payers",
        &outcome.non_matches,
        targets.non_payers,
        "non_payers.csv",
        targets.no_prompt,
    )?;

    print_completion();
    Ok(())
}

/// Export one comparison subset. Empty subsets are never written; with no
/// explicit path the user is prompted unless prompts are disabled.
fn write_subset(
    label: &str,
    records: &[Student],
    explicit: Option<&Path>,
    default_name: &str,
    no_prompt: bool,
) -> Result<()> {
    if records.is_empty() {
        if explicit.is_some() {
            print_warning(&format!("No {} to export; skipping", label));
        }
        return Ok(());
    }

    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None if no_prompt => return Ok(()),
        None => {
            if !confirm_step(&format!("Export {} ({} record(s))?", label, records.len()))? {
                return Ok(());
            }
            prompt_output_path("Output file", default_name)?
        }
    };

    export_students(records, &path).with_context(|| format!("Failed to export {}", label))?;
    print_success(&format!(
        "Exported {} {} record(s) to {}",
        records.len(),
        label,
        path.display()
    ));
    Ok(())
}

/// Show the payers store location, size, and last update time.
fn run_status(store_path: &Path) -> Result<()> {
    let roster = load_roster(store_path)?;
    let modified = fs::metadata(store_path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(DateTime::<Local>::from);
    display_status(store_path, roster.len(), modified);
    Ok(())
}
