//! Comparison result and store status rendering

use std::path::Path;

use chrono::{DateTime, Local};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{CompareOutcome, Student};

/// Display the counts table for a comparison run
pub fn display_compare_summary(outcome: &CompareOutcome) {
    let checked = outcome.matches.len() + outcome.non_matches.len();

    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("COMPARISON SUMMARY").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![Cell::new("🧾 Records checked"), Cell::new(checked)]);

    table.add_row(vec![
        Cell::new("✅ Payers"),
        Cell::new(outcome.matches.len())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("❌ Non-payers"),
        Cell::new(outcome.non_matches.len()).fg(if outcome.non_matches.is_empty() {
            Color::White
        } else {
            Color::Red
        }),
    ]);

    let payer_pct = if checked > 0 {
        outcome.matches.len() as f64 / checked as f64 * 100.0
    } else {
        0.0
    };

    let color = if payer_pct >= 75.0 {
        Color::Green
    } else if payer_pct >= 40.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    table.add_row(vec![
        Cell::new("📊 Payer share"),
        Cell::new(format!("{:.1}%", payer_pct))
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Display a titled table of records in their given order
pub fn display_records(title: &str, records: &[Student]) {
    println!();
    println!(
        "    {} {} {}",
        style("📝").cyan(),
        style(title).white().bold(),
        style(format!("({})", records.len())).dim()
    );
    println!("    {}", style("─".repeat(50)).dim());

    if records.is_empty() {
        println!("      {}", style("none").dim());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Email").add_attribute(Attribute::Bold),
    ]);

    for student in records {
        table.add_row(vec![
            Cell::new(&student.id),
            Cell::new(&student.name),
            Cell::new(&student.email),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Display the payers store status card
pub fn display_status(path: &Path, count: usize, modified: Option<DateTime<Local>>) {
    println!();
    println!(
        "    {} {}",
        style("🗂️").cyan(),
        style("PAYERS STORE").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![Cell::new("📂 Location"), Cell::new(path.display())]);

    table.add_row(vec![
        Cell::new("👥 Payers"),
        Cell::new(count)
            .fg(if count == 0 { Color::Yellow } else { Color::Green })
            .add_attribute(Attribute::Bold),
    ]);

    let modified_cell = match modified {
        Some(ts) => Cell::new(ts.format("%Y-%m-%d %H:%M:%S").to_string()),
        None => Cell::new("not yet created").fg(Color::Yellow),
    };
    table.add_row(vec![Cell::new("🕒 Last modified"), modified_cell]);

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
