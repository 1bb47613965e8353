//! # Scaffolding Configuration
//!
//! `ScaffoldConfig` collects everything the operation sequence needs to
//! know beyond the manifest itself: an optional build-root override, an
//! optional template directory, and the script commands registered as
//! lifecycle hooks.
//!
//! ## Build root resolution
//!
//! The build root is resolved in this order, first match wins:
//!
//! 1. `ScaffoldConfig::build_root` (the `--build-root` flag or the
//!    `DRUPAL_COMPONENT_SCAFFOLD_BUILD_ROOT` environment variable);
//! 2. `extra.drupal-component-scaffold.build-root` in the manifest;
//! 3. the parent of the installer path tagged `type:drupal-core`;
//! 4. `defaults::DEFAULT_BUILD_ROOT`, but only with `Fallback::Default`.
//!
//! With `Fallback::Required` the last step is an
//! `Error::InstallerPathsNotFound` instead. The manifest-augmenting entry
//! points use the default; the lifecycle callbacks that run after Composer
//! has installed everything require an explicit mapping.

use std::path::{Path, PathBuf};

use log::debug;

use crate::defaults::{event_hook, DEFAULT_BUILD_ROOT, FRAMEWORK_SCAFFOLD_HOOK};
use crate::error::{Error, Result};
use crate::events::ScriptEvent;
use crate::manifest::Manifest;

/// What to do when neither configuration nor manifest names a build root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Use `DEFAULT_BUILD_ROOT`.
    Default,
    /// Fail with `Error::InstallerPathsNotFound`.
    Required,
}

/// Script commands this tool registers in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookCommands {
    /// Drupal's own scaffolding hook, run before ours on install/update.
    /// `None` skips chaining it.
    pub framework: Option<String>,
}

impl Default for HookCommands {
    fn default() -> Self {
        Self {
            framework: Some(FRAMEWORK_SCAFFOLD_HOOK.to_string()),
        }
    }
}

impl HookCommands {
    /// Commands to register, per script event, in registration order.
    pub fn registrations(&self) -> Vec<(ScriptEvent, Vec<String>)> {
        ScriptEvent::REGISTERED
            .into_iter()
            .map(|event| {
                let mut commands = Vec::new();
                if event.chains_framework_scaffold() {
                    commands.extend(self.framework.clone());
                }
                commands.push(event_hook(event.as_str()));
                (event, commands)
            })
            .collect()
    }
}

/// Configuration for one scaffolding run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldConfig {
    /// Build root override; takes precedence over the manifest.
    pub build_root: Option<PathBuf>,
    /// Directory with replacement template assets; takes precedence over
    /// the manifest's `templates-dir` option.
    pub templates_dir: Option<PathBuf>,
    /// Script hooks to register.
    pub hooks: HookCommands,
}

impl ScaffoldConfig {
    /// Resolve the build root for `manifest`.
    pub fn resolve_build_root(&self, manifest: &Manifest, fallback: Fallback) -> Result<PathBuf> {
        if let Some(root) = &self.build_root {
            debug!("Build root from configuration: {}", root.display());
            return Ok(root.clone());
        }

        if let Some(root) = manifest
            .plugin_options()?
            .and_then(|options| options.build_root)
        {
            debug!("Build root from manifest options: {}", root);
            return Ok(PathBuf::from(root));
        }

        if let Some(root) = manifest.core_install_root()? {
            debug!("Build root from core installer path: {}", root.display());
            return Ok(root);
        }

        match fallback {
            Fallback::Default => Ok(PathBuf::from(DEFAULT_BUILD_ROOT)),
            Fallback::Required => Err(Error::InstallerPathsNotFound),
        }
    }

    /// Resolve the template directory, relative paths being taken from the
    /// project root.
    pub fn resolve_templates_dir(&self, manifest: &Manifest) -> Result<Option<PathBuf>> {
        let configured = match &self.templates_dir {
            Some(dir) => Some(dir.clone()),
            None => manifest
                .plugin_options()?
                .and_then(|options| options.templates_dir)
                .map(PathBuf::from),
        };

        Ok(configured.map(|dir| resolve_against(manifest.project_root(), &dir)))
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
