//! # Template Materialization
//!
//! Writes the development configuration files into the build tree and
//! guards the build directory against Drupal's extension scan.
//!
//! Templates are plain text with `${NAME}` placeholders. The defaults are
//! compiled in from `dist/`; a templates directory can replace them file by
//! file (same file names).
//!
//! | Asset                      | Destination                                  |
//! |----------------------------|----------------------------------------------|
//! | `drushrc.php`              | `<build-root>/sites/default/drushrc.php`     |
//! | `development.services.yml` | `<build-root>/sites/development.services.yml`|
//! | `settings.local.php`       | `<build-root>/sites/default/settings.local.php` |
//!
//! Destinations are overwritten on every run.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, info, warn};
use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::manifest::build_root_str;
use crate::path::absolutize;
use crate::project::Layout;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// The configuration files written on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldFile {
    /// Drush configuration.
    DrushConfig,
    /// Development services override.
    DevelopmentServices,
    /// Local settings.
    LocalSettings,
}

impl ScaffoldFile {
    pub const ALL: [ScaffoldFile; 3] = [
        ScaffoldFile::DrushConfig,
        ScaffoldFile::DevelopmentServices,
        ScaffoldFile::LocalSettings,
    ];

    /// File name of the template asset.
    pub fn asset_name(self) -> &'static str {
        match self {
            ScaffoldFile::DrushConfig => "drushrc.php",
            ScaffoldFile::DevelopmentServices => "development.services.yml",
            ScaffoldFile::LocalSettings => "settings.local.php",
        }
    }

    /// Destination relative to the project root.
    pub fn destination(self, layout: &Layout) -> PathBuf {
        match self {
            ScaffoldFile::DrushConfig | ScaffoldFile::LocalSettings => {
                layout.default_site_dir().join(self.asset_name())
            }
            ScaffoldFile::DevelopmentServices => layout.sites_dir().join(self.asset_name()),
        }
    }

    fn embedded(self) -> &'static str {
        match self {
            ScaffoldFile::DrushConfig => include_str!("../dist/drushrc.php"),
            ScaffoldFile::DevelopmentServices => include_str!("../dist/development.services.yml"),
            ScaffoldFile::LocalSettings => include_str!("../dist/settings.local.php"),
        }
    }
}

/// Where template assets are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// The defaults compiled into the binary.
    Embedded,
    /// A directory holding assets with the same file names.
    Directory(PathBuf),
}

impl TemplateSource {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        dir.map_or(TemplateSource::Embedded, TemplateSource::Directory)
    }

    /// Read the template text for `file`.
    pub fn load(&self, file: ScaffoldFile) -> Result<String> {
        match self {
            TemplateSource::Embedded => Ok(file.embedded().to_string()),
            TemplateSource::Directory(dir) => {
                let path = dir.join(file.asset_name());
                fs::read_to_string(&path).map_err(|e| Error::Filesystem {
                    message: format!("Failed to read template '{}': {}", path.display(), e),
                })
            }
        }
    }
}

/// Placeholder values, keyed by name.
pub type TemplateVars = BTreeMap<String, String>;

/// Variables every template may use.
pub fn template_vars(project_root: &Path, layout: &Layout, short_name: &str) -> TemplateVars {
    let mut vars = TemplateVars::new();
    vars.insert("BUILD_ROOT".to_string(), build_root_str(&layout.build_root));
    vars.insert("PROJECT_NAME".to_string(), short_name.to_string());
    vars.insert("PROJECT_ROOT".to_string(), build_root_str(project_root));
    vars.insert("IGNORE_DIRECTORY".to_string(), layout.ignore_directory());
    vars
}

/// Substitute every `${NAME}` in `template`.
///
/// Fails on the first placeholder without a value.
pub fn render(template: &str, vars: &TemplateVars) -> Result<String> {
    if let Some(missing) = PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .find(|name| !vars.contains_key(name))
    {
        return Err(Error::Template {
            message: "Undefined variable".to_string(),
            variable: Some(missing),
        });
    }

    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| vars[&caps[1]].clone());
    Ok(rendered.into_owned())
}

/// Render and write every scaffold file. Returns the written paths.
///
/// `project_root` must be absolute.
pub fn materialize(
    project_root: &Path,
    layout: &Layout,
    source: &TemplateSource,
    vars: &TemplateVars,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for file in ScaffoldFile::ALL {
        let content = render(&source.load(file)?, vars)?;
        let destination = absolutize(project_root, &file.destination(layout));

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
                message: format!("Failed to create directory '{}': {}", parent.display(), e),
            })?;
        }
        fs::write(&destination, content).map_err(|e| Error::Filesystem {
            message: format!("Failed to write file '{}': {}", destination.display(), e),
        })?;
        debug!("Wrote {}", destination.display());
        written.push(destination);
    }
    Ok(written)
}

/// Result of `append_ignore_directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    AlreadyPresent,
    /// `default.settings.php` does not exist yet.
    MissingTarget,
}

/// The settings line that keeps Drupal from scanning `directory`.
pub fn ignore_directory_line(directory: &str) -> String {
    format!("$settings['file_scan_ignore_directories'][] = '{}';", directory)
}

/// Append the ignore-directory line to `sites/default/default.settings.php`
/// unless it is already there.
pub fn append_ignore_directory(project_root: &Path, layout: &Layout) -> Result<AppendOutcome> {
    let settings = absolutize(
        project_root,
        &layout.default_site_dir().join("default.settings.php"),
    );
    if !settings.is_file() {
        warn!("{} not found, run Drupal core scaffolding first", settings.display());
        return Ok(AppendOutcome::MissingTarget);
    }

    let line = ignore_directory_line(&layout.ignore_directory());
    let mut content = fs::read_to_string(&settings)?;
    if content.lines().any(|existing| existing.trim() == line) {
        debug!("{} already ignores the build directory", settings.display());
        return Ok(AppendOutcome::AlreadyPresent);
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&line);
    content.push('\n');
    fs::write(&settings, content)?;
    info!("Appended build directory ignore rule to {}", settings.display());
    Ok(AppendOutcome::Appended)
}
