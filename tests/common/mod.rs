//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_manifest(manifests::MODULE);
//!     fixture.command().arg("scaffold").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::TestFixture;
}

/// Common composer.json documents for testing.
#[allow(dead_code)]
pub mod manifests {
    /// A module that requires Drupal core.
    pub const MODULE: &str = r#"{
    "name": "drupal/test_module",
    "type": "drupal-module",
    "prefer-stable": true,
    "minimum-stability": "dev",
    "require-dev": {
        "composer/installers": "~1",
        "drupal/core": "8.3.0"
    },
    "scripts": {
        "drupal-scaffold": "DrupalComposer\\DrupalScaffold\\Plugin::scaffold"
    }
}
"#;

    /// A theme that requires Drupal core.
    pub const THEME: &str = r#"{
    "name": "drupal/test_theme",
    "type": "drupal-theme",
    "require-dev": {
        "drupal/core": "8.3.0"
    }
}
"#;

    /// A module that forgot to require Drupal core.
    pub const MODULE_WITHOUT_CORE: &str = r#"{
    "name": "drupal/test_module",
    "type": "drupal-module",
    "require": {
        "php": ">=7.0"
    }
}
"#;

    /// A package type that cannot be scaffolded.
    pub const PROFILE: &str = r#"{
    "name": "drupal/test_profile",
    "type": "drupal-profile",
    "require-dev": {
        "drupal/core": "8.3.0"
    }
}
"#;

    /// A module with a hand-written core installer path and patches.
    pub const MODULE_WITH_DOCROOT: &str = r#"{
    "name": "drupal/test_module",
    "type": "drupal-module",
    "require-dev": {
        "drupal/core": "8.3.0"
    },
    "extra": {
        "installer-paths": {
            "docroot/core": ["type:drupal-core"]
        },
        "patches": {
            "drupal/core": {
                "Fix caching": "patches/cache.patch"
            }
        }
    }
}
"#;

    /// Invalid JSON for error testing.
    pub const INVALID_JSON: &str = "{ \"name\": ";
}

/// A test fixture that provides a temporary component checkout.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `composer.json` with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.with_file("composer.json", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add the `default.settings.php` that Drupal core scaffolding provides.
    #[allow(dead_code)]
    pub fn with_default_settings(self, build_root: &str) -> Self {
        let path = format!("{build_root}/sites/default/default.settings.php");
        self.with_file(&path, "<?php\n\n$databases = [];\n")
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read a file from the fixture.
    #[allow(dead_code)]
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("drupal-component-scaffold");
        cmd.current_dir(self.path())
            .env_remove("DRUPAL_COMPONENT_SCAFFOLD_MANIFEST")
            .env_remove("DRUPAL_COMPONENT_SCAFFOLD_BUILD_ROOT")
            .env_remove("DRUPAL_COMPONENT_SCAFFOLD_TEMPLATES")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
