//! # Event Command Implementation
//!
//! Entry point for the script hooks registered in composer.json:
//!
//! ```text
//! "post-install-cmd": [
//!     "DrupalComposer\\DrupalScaffold\\Plugin::scaffold",
//!     "drupal-component-scaffold event post-install-cmd"
//! ]
//! ```
//!
//! The event name selects the action; see `drupal_component_scaffold::events`.

use anyhow::Result;
use clap::Args;

use drupal_component_scaffold::events::ScriptEvent;
use drupal_component_scaffold::suggestions;

use crate::cli::Context;
use crate::commands::scaffold::report_build;

/// Handle a Composer script event
#[derive(Args, Debug)]
pub struct EventArgs {
    /// Composer event name (e.g. post-install-cmd)
    #[arg(value_name = "EVENT")]
    pub event: String,
}

/// Execute the `event` command.
pub fn execute(args: EventArgs, context: &Context) -> Result<()> {
    let event: ScriptEvent = args.event.parse().map_err(suggestions::explain)?;

    let mut handler = context.handler()?;
    let report = handler.dispatch(event).map_err(suggestions::explain)?;

    if report.manifest_updated {
        context.output.status(
            "📝",
            "[MANIFEST]",
            format!("Updated {}", handler.manifest().path().display()),
        );
    }
    if let Some(build) = &report.build {
        report_build(&context.output, build);
    }
    Ok(())
}
