//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::default_store_path;

/// Feecheck - maintain a welfare fee payers roster and check class lists against it
#[derive(Parser, Debug)]
#[command(name = "feecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Master roster file location.
    /// Defaults to 'feecheck/payers.json' under the platform data directory.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the master payers roster from a delimited student file
    Load {
        /// Input file path (CSV with a header row)
        input: PathBuf,

        /// Header label of the student ID column
        #[arg(short, long)]
        id_column: String,

        /// Header label of the student name column.
        /// When omitted, names are left empty in the stored roster.
        #[arg(short, long)]
        name_column: Option<String>,

        /// Header label of the student email column.
        /// When omitted, emails are left empty in the stored roster.
        #[arg(short, long)]
        email_column: Option<String>,
    },

    /// Check a class list against the master payers roster
    Check {
        /// Input file path (CSV with a header row)
        input: PathBuf,

        /// Header label of the student ID column
        #[arg(short, long)]
        id_column: String,

        /// Header label of the student name column
        #[arg(short, long)]
        name_column: Option<String>,

        /// Header label of the student email column
        #[arg(short, long)]
        email_column: Option<String>,

        /// Skip the interactive export prompts after displaying results.
        /// Explicit --payers-output/--non-payers-output paths are still written.
        #[arg(long, default_value = "false")]
        no_export: bool,

        /// Write the matching payers to this CSV file without prompting
        #[arg(long)]
        payers_output: Option<PathBuf>,

        /// Write the non-payers to this CSV file without prompting
        #[arg(long)]
        non_payers_output: Option<PathBuf>,
    },

    /// Show the payers store location, size, and last update time
    Status,
}

impl Cli {
    /// Resolve the payers store location, falling back to the platform default.
    pub fn store_path(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(default_store_path)
    }
}
