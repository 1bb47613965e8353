//! # Init Command Implementation
//!
//! Registers the component with Composer without touching the build tree:
//! installer paths, the `extra.drupal-component-scaffold` options and the
//! script hooks that call this tool back after install and update.
//!
//! Running it again on a registered manifest leaves the file unchanged.

use anyhow::Result;
use clap::Args;

use drupal_component_scaffold::suggestions;

use crate::cli::Context;

/// Register the component's installer paths and script hooks
#[derive(Args, Debug)]
pub struct InitArgs {}

/// Execute the `init` command.
pub fn execute(_args: InitArgs, context: &Context) -> Result<()> {
    let mut handler = context.handler()?;
    let changed = handler.prepare_manifest().map_err(suggestions::explain)?;

    let path = handler.manifest().path().display().to_string();
    if changed {
        context
            .output
            .status("✅", "[OK]", format!("Registered scaffolding in {path}"));
        context
            .output
            .detail("Run `composer install` to build the development tree");
    } else {
        context
            .output
            .status("✅", "[OK]", format!("{path} is already registered"));
    }
    Ok(())
}
