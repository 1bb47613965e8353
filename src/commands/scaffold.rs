//! Scaffold command implementation
//!
//! Runs the whole sequence for the component in the current directory:
//! 1. Register installer paths, options and script hooks in composer.json
//! 2. Prepare the build directories
//! 3. Link the component into the build tree
//! 4. Write the development configuration files

use anyhow::Result;
use clap::Args;

use drupal_component_scaffold::build::LinkOutcome;
use drupal_component_scaffold::handler::BuildReport;
use drupal_component_scaffold::output::OutputConfig;
use drupal_component_scaffold::suggestions;
use drupal_component_scaffold::templates::AppendOutcome;

use crate::cli::Context;

/// Arguments for the scaffold command
#[derive(Args, Debug)]
pub struct ScaffoldArgs {}

/// Execute the scaffold command
pub fn execute(_args: ScaffoldArgs, context: &Context) -> Result<()> {
    let mut handler = context.handler()?;
    let report = handler.run().map_err(suggestions::explain)?;

    let output = &context.output;
    if report.manifest_updated {
        output.status(
            "📝",
            "[MANIFEST]",
            format!("Updated {}", handler.manifest().path().display()),
        );
    }
    if let Some(build) = &report.build {
        report_build(output, build);
    }
    Ok(())
}

/// Print what a development build did.
pub(crate) fn report_build(output: &OutputConfig, build: &BuildReport) {
    match &build.link {
        LinkOutcome::Created { link, target } => output.status(
            "🔗",
            "[LINK]",
            format!("{} -> {}", link.display(), target.display()),
        ),
        LinkOutcome::Existing { link } => output.status(
            "⏭️",
            "[SKIP]",
            format!("{} already exists", link.display()),
        ),
    }

    for file in &build.files {
        output.detail(format!("wrote {}", file.display()));
    }

    if build.ignore_rule == AppendOutcome::MissingTarget {
        output.detail("default.settings.php not found; ignore rule not added");
    }

    output.status(
        "✅",
        "[OK]",
        format!(
            "Development build ready in {}",
            build.layout.build_root.display()
        ),
    );
}
