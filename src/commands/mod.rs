//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `drupal-component-scaffold` command-line tool. Each subcommand is defined
//! in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the shared
//!   `cli::Context`, builds the handler once and reports what it did.

pub mod completions;
pub mod event;
pub mod info;
pub mod init;
pub mod scaffold;
