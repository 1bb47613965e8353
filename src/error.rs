//! # Error Handling
//!
//! This module defines the centralized error type for the
//! `drupal-component-scaffold` library. It uses the `thiserror` library to
//! describe every failure the scaffolding sequence can stop on.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure modes. Three of them are the
//!   scaffolding preconditions:
//!   - `CoreNotFound`: the component does not declare `drupal/core`.
//!   - `InstallerPathsNotFound`: no build root could be resolved from the
//!     manifest's installer paths.
//!   - `UnsupportedProjectType`: the manifest `type` is not a component kind
//!     this tool knows how to place.
//!
//!   Everything else (manifest shape problems, template rendering, I/O) is a
//!   plain "stop and report" failure.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use thiserror::Error;

/// Main error type for drupal-component-scaffold operations
#[derive(Error, Debug)]
pub enum Error {
    /// The Drupal core package is not declared in `require` or `require-dev`.
    #[error("Package '{package}' not found among project dependencies.")]
    CoreNotFound { package: String },

    /// No installer path tagged `type:drupal-core` exists and no explicit
    /// build root was configured.
    #[error("Installer path for Drupal core not found.")]
    InstallerPathsNotFound,

    /// The manifest `type` is not one of the supported component kinds.
    #[error("Scaffolding is supported only for Composer projects of type 'drupal-module', 'drupal-theme' and 'drupal-drush', found '{project_type}'.")]
    UnsupportedProjectType { project_type: String },

    /// The manifest could not be read, parsed, or has an unexpected shape.
    #[error("Manifest error in {path}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Manifest {
        path: String,
        message: String,
        /// Optional hint for how to fix the manifest
        hint: Option<String>,
    },

    /// An error occurred during template rendering.
    ///
    /// May include the name of the problematic variable when applicable.
    #[error("Template processing error: {message}{}", variable.as_ref().map(|v| format!(" (variable: {})", v)).unwrap_or_default())]
    Template {
        message: String,
        /// The template variable that caused the error, if applicable
        variable: Option<String>,
    },

    /// A directory, permission or symlink operation failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// A script event name this tool does not subscribe to.
    #[error("Unknown script event: {name}")]
    UnknownEvent { name: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true for the three precondition failures the scaffolding
    /// sequence checks before touching anything.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::CoreNotFound { .. }
                | Error::InstallerPathsNotFound
                | Error::UnsupportedProjectType { .. }
        )
    }
}
