//! # Error Suggestions
//!
//! Turns library errors into user-facing errors that say what went wrong
//! and how to fix it.
//!
//! ```rust,ignore
//! handler.run().map_err(suggestions::explain)?;
//! ```

use std::path::Path;

use crate::defaults::{BIN_NAME, PLUGIN_KEY};
use crate::error::Error;
use crate::events::ScriptEvent;
use crate::project::ProjectKind;

/// Error for a manifest path that does not exist.
pub fn manifest_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Manifest not found: {path}\n\n\
         hint: Run this command from the component's root directory\n\
         hint: Use --manifest to point at composer.json\n\
         hint: Set DRUPAL_COMPONENT_SCAFFOLD_MANIFEST environment variable",
        path = path.display()
    )
}

/// Attach hints to a library error.
pub fn explain(error: Error) -> anyhow::Error {
    let hints: Vec<String> = match &error {
        Error::CoreNotFound { package } => vec![
            format!("Run 'composer require --dev {package}'"),
        ],
        Error::InstallerPathsNotFound => vec![
            format!("Run '{BIN_NAME} init' to register installer paths"),
            format!("Or set \"extra\": {{\"{PLUGIN_KEY}\": {{\"build-root\": \"build\"}}}}"),
            "Or pass --build-root".to_string(),
        ],
        Error::UnsupportedProjectType { .. } => vec![format!(
            "Set \"type\" in composer.json to one of: {}",
            ProjectKind::ALL
                .iter()
                .map(|kind| kind.package_type())
                .collect::<Vec<_>>()
                .join(", ")
        )],
        Error::UnknownEvent { .. } => vec![format!(
            "Known events are: {}",
            ScriptEvent::ALL
                .iter()
                .map(|event| event.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )],
        _ => Vec::new(),
    };

    if hints.is_empty() {
        return anyhow::Error::new(error);
    }

    let hints = hints
        .iter()
        .map(|hint| format!("hint: {hint}"))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::anyhow!("{error}\n\n{hints}")
}
