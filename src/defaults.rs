//! Default values for drupal-component-scaffold.
//!
//! This module provides centralized constants used across the library and
//! the commands, ensuring consistency and avoiding duplication.

/// Key of this tool's options block under the manifest's `extra` section.
pub const PLUGIN_KEY: &str = "drupal-component-scaffold";

/// Build root used when neither the manifest nor the command line names one.
pub const DEFAULT_BUILD_ROOT: &str = "build";

/// File name of the host manifest.
pub const MANIFEST_FILE: &str = "composer.json";

/// The framework core package every component must depend on.
pub const CORE_PACKAGE: &str = "drupal/core";

/// Script hook of Drupal's own scaffolding, chained before ours.
pub const FRAMEWORK_SCAFFOLD_HOOK: &str = "DrupalComposer\\DrupalScaffold\\Plugin::scaffold";

/// Name of the binary as it appears in registered script hooks.
pub const BIN_NAME: &str = "drupal-component-scaffold";

/// Package-type tags that get an installer-path entry, with the path
/// pattern relative to the build root.
pub const INSTALLER_PATHS: &[(&str, &str)] = &[
    ("drupal-core", "core"),
    ("drupal-library", "libraries/{$name}"),
    ("drupal-module", "modules/contrib/{$name}"),
    ("drupal-profile", "profiles/contrib/{$name}"),
    ("drupal-theme", "themes/contrib/{$name}"),
    ("drupal-drush", "drush/Commands/contrib/{$name}"),
];

/// Returns the script command Composer runs for a lifecycle event.
pub fn event_hook(event: &str) -> String {
    format!("{BIN_NAME} event {event}")
}
