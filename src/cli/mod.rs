//! CLI module - argument parsing, prompts, and the interactive session

pub mod args;
pub mod menu;
pub mod prompts;

pub use args::{Cli, Commands};
pub use menu::run_menu;
pub use prompts::*;
