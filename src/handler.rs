//! # Scaffolding Handler
//!
//! `Handler` binds one `ScaffoldConfig` to one loaded `Manifest` and runs
//! the scaffolding sequence. It is built once by the entry point (a CLI
//! subcommand or a lifecycle event) and passed to whatever needs it.
//!
//! ## Sequence
//!
//! 1.  **Prepare manifest** (`prepare_manifest`): augment `composer.json`
//!     with plugin options, installer paths and script hooks, writing it
//!     back only when something changed.
//! 2.  **Development build** (`setup_development_build`): resolve the
//!     layout, prepare directories, link the component, write the
//!     configuration files and append the ignore rule.
//!
//! Preconditions (core dependency, supported kind, resolvable build root)
//! are checked before each half mutates anything. A failing step aborts the
//! rest of the sequence.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::build::{self, LinkOutcome};
use crate::config::{Fallback, ScaffoldConfig};
use crate::error::{Error, Result};
use crate::events::{EventAction, ScriptEvent};
use crate::manifest::{self, Manifest};
use crate::project::{Layout, ProjectDescriptor};
use crate::templates::{self, AppendOutcome, TemplateSource};

/// Summary of a development build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub layout: Layout,
    pub link: LinkOutcome,
    pub files: Vec<PathBuf>,
    pub ignore_rule: AppendOutcome,
}

/// Summary of a full run or an event dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Whether `composer.json` was rewritten.
    pub manifest_updated: bool,
    /// Present when the development build ran.
    pub build: Option<BuildReport>,
}

/// Runs the scaffolding sequence for one component.
#[derive(Debug)]
pub struct Handler {
    config: ScaffoldConfig,
    manifest: Manifest,
    project_root: PathBuf,
}

impl Handler {
    /// Build a handler around a loaded manifest. The project root is the
    /// manifest's directory, made absolute.
    pub fn new(config: ScaffoldConfig, manifest: Manifest) -> Result<Self> {
        let project_root = fs::canonicalize(manifest.project_root()).map_err(|e| Error::Path {
            message: format!(
                "Cannot resolve project root '{}': {}",
                manifest.project_root().display(),
                e
            ),
        })?;
        Ok(Self {
            config,
            manifest,
            project_root,
        })
    }

    /// Load the manifest at `path` and build a handler around it.
    pub fn from_manifest_path(config: ScaffoldConfig, path: &Path) -> Result<Self> {
        Self::new(config, Manifest::load(path)?)
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Absolute project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn project(&self) -> Result<ProjectDescriptor> {
        self.manifest.descriptor()
    }

    /// Resolve where the component lands.
    ///
    /// The project kind is checked first, so an unsupported kind fails
    /// before the build root is even looked up.
    pub fn layout(&self, fallback: Fallback) -> Result<Layout> {
        let kind = self.project()?.kind()?;
        let build_root = self.config.resolve_build_root(&self.manifest, fallback)?;
        Ok(Layout::new(build_root, kind))
    }

    /// Augment the manifest and save it when it changed.
    pub fn prepare_manifest(&mut self) -> Result<bool> {
        let build_root = self
            .config
            .resolve_build_root(&self.manifest, Fallback::Default)?;
        let changed = manifest::augment(&mut self.manifest, &build_root, &self.config.hooks)?;
        if changed {
            self.manifest.save()?;
        } else {
            debug!("{} already up to date", self.manifest.path().display());
        }
        Ok(changed)
    }

    /// Create directories, the component link and the configuration files.
    pub fn setup_development_build(&self) -> Result<BuildReport> {
        let project = self.project()?;
        manifest::ensure_core_dependency(&project)?;
        let layout = self.layout(Fallback::Required)?;
        let source = TemplateSource::from_dir(self.config.resolve_templates_dir(&self.manifest)?);

        info!(
            "Scaffolding {} ({}) into {}",
            project.name,
            layout.kind,
            layout.build_root.display()
        );

        build::prepare_directories(&self.project_root, &layout)?;
        let link = build::link_project(&self.project_root, &layout, project.short_name())?;

        let vars = templates::template_vars(&self.project_root, &layout, project.short_name());
        let files = templates::materialize(&self.project_root, &layout, &source, &vars)?;
        let ignore_rule = templates::append_ignore_directory(&self.project_root, &layout)?;

        Ok(BuildReport {
            layout,
            link,
            files,
            ignore_rule,
        })
    }

    /// Prepare the manifest, then run the development build.
    ///
    /// The project kind is checked first so that a package this tool cannot
    /// place leaves `composer.json` as it was.
    pub fn run(&mut self) -> Result<RunReport> {
        self.project()?.kind()?;
        let manifest_updated = self.prepare_manifest()?;
        let build = self.setup_development_build()?;
        Ok(RunReport {
            manifest_updated,
            build: Some(build),
        })
    }

    /// Run the action subscribed to `event`.
    pub fn dispatch(&mut self, event: ScriptEvent) -> Result<RunReport> {
        debug!("Dispatching {}", event);
        let report = match event.action() {
            EventAction::PrepareManifest => self.prepare_manifest().map(|updated| RunReport {
                manifest_updated: updated,
                build: None,
            }),
            EventAction::DevelopmentBuild => self.setup_development_build().map(|build| RunReport {
                manifest_updated: false,
                build: Some(build),
            }),
            EventAction::Ignore => Ok(RunReport::default()),
        };
        report.inspect_err(|e| {
            if e.is_precondition() {
                info!("{} stopped before touching the build: {}", event, e);
            }
        })
    }
}
