//! # Drupal Component Scaffold Library
//!
//! This library sets up a local Drupal development build around a single
//! component package (a module, a theme or a Drush command package). It is
//! used by the `drupal-component-scaffold` command-line tool, which Composer
//! calls back through script hooks after every install and update.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::Path;
//! use drupal_component_scaffold::config::HookCommands;
//! use drupal_component_scaffold::manifest::{self, Manifest};
//!
//! let mut composer = Manifest::parse(
//!     Path::new("composer.json"),
//!     r#"{
//!         "name": "drupal/my_module",
//!         "type": "drupal-module",
//!         "require-dev": {"drupal/core": "^8.3"}
//!     }"#,
//! )
//! .unwrap();
//!
//! let changed = manifest::augment(&mut composer, Path::new("build"), &HookCommands::default()).unwrap();
//! assert!(changed);
//! assert_eq!(
//!     composer.core_install_root().unwrap(),
//!     Some(Path::new("build").to_path_buf())
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Manifest (`manifest`)**: reads and rewrites `composer.json`: installer
//!   paths, plugin options and script hooks.
//! - **Project (`project`)**: the read-only project descriptor, the
//!   supported component kinds and where each one lands (`Layout`).
//! - **Configuration (`config`)**: build-root resolution, template directory
//!   and hook commands.
//! - **Build (`build`)**: directory preparation and the relative link from
//!   the build tree back to the component.
//! - **Templates (`templates`)**: the generated configuration files and the
//!   guarded settings append.
//! - **Events (`events`)**: Composer script events and the action each one
//!   triggers.
//! - **Handler (`handler`)**: runs the sequence for one component.

pub mod build;
pub mod config;
pub mod defaults;
pub mod error;
pub mod events;
pub mod handler;
pub mod manifest;
pub mod output;
pub mod path;
pub mod project;
pub mod suggestions;
pub mod templates;

#[cfg(test)]
mod path_proptest;
