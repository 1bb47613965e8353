//! # Drupal Component Scaffold CLI
//!
//! This is the binary entry point for the `drupal-component-scaffold`
//! command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! Composer invokes the same binary from the script hooks it registers, so
//! a failing run exits non-zero and stops the Composer command that
//! triggered it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
