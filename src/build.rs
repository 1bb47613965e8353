//! # Development Build
//!
//! Directory preparation and component linking inside the build tree.
//!
//! ## Process
//!
//! 1.  **Install directory**: `<build-root>/modules/custom` (or the theme /
//!     Drush equivalent) is created when missing. It is never cleared:
//!     other custom components and an existing link stay where they are.
//!
//! 2.  **Site directory**: `<build-root>/sites/default` is created when
//!     missing and, on Unix-like systems, made writable (`0755`) so the
//!     configuration files can be written into it.
//!
//! 3.  **Link**: `<install-dir>/<name>` becomes a symlink to the project
//!     root, expressed relative to the link's directory so the whole tree
//!     can be moved. Anything already at that path is left alone.
//!
//! All paths handed to this module are relative to, or inside, the
//! absolute project root.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::path::{absolutize, relative_path};
use crate::project::Layout;

/// Mode applied to `sites/default`.
pub const SITE_DIR_MODE: u32 = 0o755;

/// Result of `link_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new link was created pointing at `target`.
    Created { link: PathBuf, target: PathBuf },
    /// Something already exists at `link`; nothing was touched.
    Existing { link: PathBuf },
}

/// What currently occupies the link location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    /// Nothing is there yet.
    Missing,
    /// A symlink, with its raw target.
    Symlink(PathBuf),
    /// A regular file or directory.
    Occupied,
}

/// Create the install directory and the writable default site directory.
pub fn prepare_directories(project_root: &Path, layout: &Layout) -> Result<()> {
    let install_dir = absolutize(project_root, &layout.install_dir());
    ensure_dir(&install_dir)?;

    let site_dir = absolutize(project_root, &layout.default_site_dir());
    ensure_dir(&site_dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(SITE_DIR_MODE);
        fs::set_permissions(&site_dir, perms).map_err(|e| Error::Filesystem {
            message: format!(
                "Failed to set permissions on '{}': {}",
                site_dir.display(),
                e
            ),
        })?;
    }

    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        debug!("Directory exists: {}", dir.display());
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", dir.display(), e),
    })?;
    info!("Created {}", dir.display());
    Ok(())
}

/// Inspect the link location without following a symlink found there.
pub fn link_state(link: &Path) -> LinkState {
    match fs::symlink_metadata(link) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::read_link(link) {
            Ok(target) => LinkState::Symlink(target),
            Err(_) => LinkState::Occupied,
        },
        Ok(_) => LinkState::Occupied,
        Err(_) => LinkState::Missing,
    }
}

/// The relative target a link at `link` needs to reach `project_root`.
///
/// The OS resolves `..` in a link target from the physical directory that
/// holds the link, so both ends are canonicalized first and must exist.
pub fn link_target(project_root: &Path, link: &Path) -> Result<PathBuf> {
    let parent = link.parent().ok_or_else(|| Error::Path {
        message: format!("Link path '{}' has no parent directory", link.display()),
    })?;
    relative_path(&canonical(parent)?, &canonical(project_root)?)
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| Error::Path {
        message: format!("Cannot resolve '{}': {}", path.display(), e),
    })
}

/// Link the component into the build tree.
///
/// `project_root` must be absolute.
pub fn link_project(project_root: &Path, layout: &Layout, short_name: &str) -> Result<LinkOutcome> {
    let link = absolutize(project_root, &layout.link_path(short_name));

    if link_state(&link) != LinkState::Missing {
        warn!("{} already exists, leaving it untouched", link.display());
        return Ok(LinkOutcome::Existing { link });
    }

    let target = link_target(project_root, &link)?;
    create_symlink(&target, &link)?;
    info!("Linked {} -> {}", link.display(), target.display());
    Ok(LinkOutcome::Created { link, target })
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).map_err(|e| Error::Filesystem {
        message: format!("Failed to create symlink '{}': {}", link.display(), e),
    })
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::windows::fs::symlink_dir(target, link).map_err(|e| Error::Filesystem {
        message: format!("Failed to create symlink '{}': {}", link.display(), e),
    })
}
