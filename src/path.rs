//! Path manipulation utilities for drupal-component-scaffold

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding normal component. Symlinks are not consulted.
///
/// Leading `..` components of a relative path are kept, since there is
/// nothing to fold them into.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Join `path` onto `base` unless it is already absolute, then normalize.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Compute the relative path that leads from directory `from_dir` to `to`.
///
/// Both paths must be absolute; they are normalized before comparison. The
/// result of `from_dir.join(relative_path(from_dir, to))` names the same
/// location as `to`.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use drupal_component_scaffold::path::relative_path;
///
/// let target = relative_path(
///     Path::new("/work/my_module/build/modules/custom"),
///     Path::new("/work/my_module"),
/// ).unwrap();
/// assert_eq!(target, PathBuf::from("../../.."));
/// ```
pub fn relative_path(from_dir: &Path, to: &Path) -> Result<PathBuf> {
    if !from_dir.is_absolute() || !to.is_absolute() {
        return Err(Error::Path {
            message: format!(
                "Cannot relate '{}' to '{}': both paths must be absolute",
                from_dir.display(),
                to.display()
            ),
        });
    }

    let from = normalize(from_dir);
    let to = normalize(to);
    let from: Vec<_> = from.components().collect();
    let to: Vec<_> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Different roots or prefixes (e.g. Windows drives) share nothing.
    if common == 0 {
        return Err(Error::Path {
            message: "Paths do not share a common root".to_string(),
        });
    }

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Ok(relative)
}
