//! # Info Command Implementation
//!
//! This module implements the `info` subcommand, which reports on the
//! component in the current directory:
//!
//! - **Project**: package name, type, and whether Drupal core is required
//! - **Layout**: resolved build root, install directory and link state
//! - **Hooks**: which script events have this tool registered
//! - **Patches**: number of patches declared under `extra.patches`
//!
//! This command is read-only; it does not modify any files.

use anyhow::Result;
use clap::Args;

use drupal_component_scaffold::build::{self, LinkState};
use drupal_component_scaffold::config::Fallback;
use drupal_component_scaffold::defaults::{event_hook, CORE_PACKAGE};
use drupal_component_scaffold::events::ScriptEvent;
use drupal_component_scaffold::path::absolutize;
use drupal_component_scaffold::suggestions;

use crate::cli::Context;

/// Show the component, its build layout and hook registration
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Execute the `info` command.
pub fn execute(_args: InfoArgs, context: &Context) -> Result<()> {
    let handler = context.handler()?;
    let project = handler.project().map_err(suggestions::explain)?;
    let manifest = handler.manifest();

    println!("📋 Manifest: {}", manifest.path().display());
    println!();
    println!("Project");
    println!("  name:    {}", project.name);
    println!("  type:    {}", project.package_type);
    println!(
        "  core:    {}",
        project
            .dependencies
            .get(CORE_PACKAGE)
            .map(|constraint| format!("{CORE_PACKAGE} {constraint}"))
            .unwrap_or_else(|| "missing".to_string())
    );
    println!("  patches: {}", project.patch_count());

    println!();
    println!("Layout");
    match handler.layout(Fallback::Required) {
        Ok(layout) => {
            let link = absolutize(
                handler.project_root(),
                &layout.link_path(project.short_name()),
            );
            println!("  build root: {}", layout.build_root.display());
            println!("  install to: {}", layout.install_dir().display());
            let state = match build::link_state(&link) {
                LinkState::Missing => "not linked".to_string(),
                LinkState::Symlink(target) => format!("linked -> {}", target.display()),
                LinkState::Occupied => "occupied by a file or directory".to_string(),
            };
            println!("  link:       {state}");
        }
        Err(e) => println!("  unresolved: {e}"),
    }

    println!();
    println!("Hooks");
    for event in ScriptEvent::REGISTERED {
        let registered = manifest.scripts(event.as_str()).contains(&event_hook(event.as_str()));
        println!(
            "  {:<18} {}",
            event.as_str(),
            if registered { "registered" } else { "not registered" }
        );
    }

    Ok(())
}
