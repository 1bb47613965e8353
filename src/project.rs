//! # Project Descriptor
//!
//! A read-only view of the component package being developed: its name,
//! its kind, the packages it requires and the patches it declares. The
//! descriptor is built from the manifest once per run and never written
//! back.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// The component kinds this tool knows where to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    /// `drupal-module`
    Module,
    /// `drupal-theme`
    Theme,
    /// `drupal-drush`
    DrushCommands,
}

impl ProjectKind {
    /// All supported kinds, in the order they are reported to users.
    pub const ALL: [ProjectKind; 3] = [
        ProjectKind::Module,
        ProjectKind::Theme,
        ProjectKind::DrushCommands,
    ];

    /// The Composer package type for this kind.
    pub fn package_type(self) -> &'static str {
        match self {
            ProjectKind::Module => "drupal-module",
            ProjectKind::Theme => "drupal-theme",
            ProjectKind::DrushCommands => "drupal-drush",
        }
    }

    /// Directory, relative to the build root, that holds custom components
    /// of this kind.
    pub fn custom_dir(self) -> &'static Path {
        Path::new(match self {
            ProjectKind::Module => "modules/custom",
            ProjectKind::Theme => "themes/custom",
            ProjectKind::DrushCommands => "drush/Commands/custom",
        })
    }
}

impl FromStr for ProjectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ProjectKind::ALL
            .into_iter()
            .find(|kind| kind.package_type() == s)
            .ok_or_else(|| Error::UnsupportedProjectType {
                project_type: s.to_string(),
            })
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package_type())
    }
}

/// Read-only description of the developer's component package.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    /// Full package name, `vendor/name`.
    pub name: String,
    /// Raw manifest `type`.
    pub package_type: String,
    /// Packages from `require` and `require-dev`, name -> constraint.
    pub dependencies: BTreeMap<String, String>,
    /// Patches from `extra.patches`, package -> (description -> patch).
    pub patches: BTreeMap<String, BTreeMap<String, String>>,
}

impl ProjectDescriptor {
    /// The name part of `vendor/name`; this is the directory name Drupal
    /// expects the component under.
    pub fn short_name(&self) -> &str {
        self.name
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.name)
    }

    /// Parse the manifest `type` into a supported kind.
    pub fn kind(&self) -> Result<ProjectKind> {
        self.package_type.parse()
    }

    /// Whether the package declares `package` in `require` or `require-dev`.
    pub fn requires(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
    }

    /// Number of patches declared across all packages.
    pub fn patch_count(&self) -> usize {
        self.patches.values().map(BTreeMap::len).sum()
    }
}

/// Where a component lands inside the build tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Build root, as configured (usually relative to the project root).
    pub build_root: PathBuf,
    /// Kind of the component being linked.
    pub kind: ProjectKind,
}

impl Layout {
    pub fn new(build_root: impl Into<PathBuf>, kind: ProjectKind) -> Self {
        Self {
            build_root: build_root.into(),
            kind,
        }
    }

    /// `<build-root>/modules/custom` and friends.
    pub fn install_dir(&self) -> PathBuf {
        self.build_root.join(self.kind.custom_dir())
    }

    /// `<build-root>/sites/default`.
    pub fn default_site_dir(&self) -> PathBuf {
        self.build_root.join("sites").join("default")
    }

    /// `<build-root>/sites`.
    pub fn sites_dir(&self) -> PathBuf {
        self.build_root.join("sites")
    }

    /// Final location of the component link.
    pub fn link_path(&self, short_name: &str) -> PathBuf {
        self.install_dir().join(short_name)
    }

    /// Directory name Drupal must skip while scanning for extensions; the
    /// last component of the build root.
    pub fn ignore_directory(&self) -> String {
        self.build_root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.build_root.to_string_lossy().into_owned())
    }
}
