//! # Host Manifest
//!
//! Reading and rewriting the component's `composer.json`.
//!
//! The manifest is kept as a `serde_json::Value` so that keys this tool
//! knows nothing about survive a rewrite untouched and in their original
//! order. Typed views (`ProjectDescriptor`, `PluginOptions`) are derived
//! from it on demand.
//!
//! ## Augmentation
//!
//! `augment` performs the manifest half of the scaffolding sequence:
//!
//! 1. `ensure_core_dependency`: stop unless `drupal/core` is required.
//! 2. `merge_plugin_options`: record the build root under
//!    `extra.drupal-component-scaffold` when no options exist yet.
//! 3. `merge_installer_paths`: add a default installer path for every
//!    package-type tag that has none.
//! 4. `register_scripts`: append the framework scaffold hook and our own
//!    re-entry commands to the lifecycle script lists.
//!
//! Every step only adds what is missing, so augmenting an augmented
//! manifest changes nothing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::HookCommands;
use crate::defaults::{CORE_PACKAGE, INSTALLER_PATHS, PLUGIN_KEY};
use crate::error::{Error, Result};
use crate::project::ProjectDescriptor;

/// Composer's own validation pattern for package names.
static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([_.-]?[a-z0-9]+)*/[a-z0-9](([_.]|-{1,2})?[a-z0-9]+)*$")
        .expect("package name pattern is valid")
});

/// Options stored under `extra.drupal-component-scaffold`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginOptions {
    /// Directory the Drupal tree is assembled in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_root: Option<String>,
    /// Directory holding replacement template assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<String>,
}

/// A loaded `composer.json`.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl Manifest {
    /// Load a manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Manifest {
            path: path.display().to_string(),
            message: format!("cannot read file: {}", e),
            hint: None,
        })?;
        Self::parse(path, &content)
    }

    /// Parse manifest content that belongs at `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| Error::Manifest {
            path: path.display().to_string(),
            message: format!("invalid JSON: {}", e),
            hint: Some("Run 'composer validate' to locate the syntax error".to_string()),
        })?;

        match value {
            Value::Object(document) => Ok(Self {
                path: path.to_path_buf(),
                document,
            }),
            _ => Err(Error::Manifest {
                path: path.display().to_string(),
                message: "top-level value must be an object".to_string(),
                hint: None,
            }),
        }
    }

    /// Write the manifest back to where it was loaded from.
    ///
    /// Uses Composer's layout: four-space indentation and a trailing newline.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.to_pretty_string()?)?;
        info!("Updated {}", self.path.display());
        Ok(())
    }

    /// Render the manifest the way `save` writes it.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.document.serialize(&mut serializer)?;
        buffer.push(b'\n');
        String::from_utf8(buffer).map_err(|e| Error::Manifest {
            path: self.path.display().to_string(),
            message: format!("serialized manifest is not UTF-8: {}", e),
            hint: None,
        })
    }

    /// Path the manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the manifest; the component's project root.
    pub fn project_root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Raw access to a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Build the read-only project descriptor.
    pub fn descriptor(&self) -> Result<ProjectDescriptor> {
        let name = self
            .document
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                self.shape_error(
                    "missing 'name'",
                    Some("Add \"name\": \"vendor/project\" to composer.json"),
                )
            })?;

        if !PACKAGE_NAME.is_match(name) {
            return Err(self.shape_error(
                &format!("invalid package name '{}'", name),
                Some("Package names are lowercase 'vendor/project'"),
            ));
        }

        // Composer treats a missing type as "library".
        let package_type = self
            .document
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("library");

        let mut dependencies = BTreeMap::new();
        for section in ["require", "require-dev"] {
            if let Some(value) = self.document.get(section) {
                let table: BTreeMap<String, String> = serde_json::from_value(value.clone())
                    .map_err(|e| self.shape_error(&format!("'{}': {}", section, e), None))?;
                dependencies.extend(table);
            }
        }

        let patches = match self.extra().and_then(|extra| extra.get("patches")) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| self.shape_error(&format!("'extra.patches': {}", e), None))?,
            None => BTreeMap::new(),
        };

        Ok(ProjectDescriptor {
            name: name.to_string(),
            package_type: package_type.to_string(),
            dependencies,
            patches,
        })
    }

    /// Options under `extra.drupal-component-scaffold`, if present.
    pub fn plugin_options(&self) -> Result<Option<PluginOptions>> {
        match self.extra().and_then(|extra| extra.get(PLUGIN_KEY)) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| self.shape_error(&format!("'extra.{}': {}", PLUGIN_KEY, e), None)),
            None => Ok(None),
        }
    }

    /// The installer-path table as (pattern, tags) pairs, in manifest order.
    pub fn installer_paths(&self) -> Result<Vec<(String, Vec<String>)>> {
        let Some(value) = self.extra().and_then(|extra| extra.get("installer-paths")) else {
            return Ok(Vec::new());
        };
        let Some(table) = value.as_object() else {
            return Err(self.shape_error("'extra.installer-paths' must be an object", None));
        };

        table
            .iter()
            .map(|(pattern, tags)| {
                let tags: Vec<String> = serde_json::from_value(tags.clone()).map_err(|e| {
                    self.shape_error(&format!("installer path '{}': {}", pattern, e), None)
                })?;
                Ok((pattern.clone(), tags))
            })
            .collect()
    }

    /// Build root implied by the installer path tagged `type:drupal-core`.
    pub fn core_install_root(&self) -> Result<Option<PathBuf>> {
        let tag = type_tag("drupal-core");
        let root = self
            .installer_paths()?
            .into_iter()
            .find(|(_, tags)| tags.contains(&tag))
            .map(|(pattern, _)| {
                let pattern = PathBuf::from(pattern.trim_end_matches('/'));
                match pattern.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => PathBuf::from("."),
                }
            });
        Ok(root)
    }

    /// Commands registered for a script event.
    pub fn scripts(&self, event: &str) -> Vec<String> {
        match self.document.get("scripts").and_then(|s| s.get(event)) {
            Some(Value::String(command)) => vec![command.clone()],
            Some(Value::Array(commands)) => commands
                .iter()
                .filter_map(|c| c.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn extra(&self) -> Option<&Map<String, Value>> {
        self.document.get("extra").and_then(Value::as_object)
    }

    fn shape_error(&self, message: &str, hint: Option<&str>) -> Error {
        Error::Manifest {
            path: self.path.display().to_string(),
            message: message.to_string(),
            hint: hint.map(str::to_string),
        }
    }

    /// Get (or create) an object under `key` in `parent`.
    ///
    /// PHP serializes an empty associative array as `[]`, so an empty list is
    /// accepted and replaced with an object.
    fn object_at<'a>(
        path: &Path,
        parent: &'a mut Map<String, Value>,
        key: &str,
    ) -> Result<&'a mut Map<String, Value>> {
        let slot = parent
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if matches!(slot, Value::Array(items) if items.is_empty()) {
            *slot = Value::Object(Map::new());
        }
        slot.as_object_mut().ok_or_else(|| Error::Manifest {
            path: path.display().to_string(),
            message: format!("'{}' must be an object", key),
            hint: None,
        })
    }
}

fn type_tag(package_type: &str) -> String {
    format!("type:{}", package_type)
}

/// Render a build root the way it is written into installer paths.
pub fn build_root_str(build_root: &Path) -> String {
    let rendered = build_root.to_string_lossy().replace('\\', "/");
    let trimmed = rendered.trim_end_matches('/');
    if trimmed.is_empty() {
        rendered
    } else {
        trimmed.to_string()
    }
}

/// Fail unless the component depends on Drupal core.
pub fn ensure_core_dependency(project: &ProjectDescriptor) -> Result<()> {
    if project.requires(CORE_PACKAGE) {
        Ok(())
    } else {
        Err(Error::CoreNotFound {
            package: CORE_PACKAGE.to_string(),
        })
    }
}

/// Record the build root under `extra.drupal-component-scaffold` unless an
/// options block already exists. Returns whether the manifest changed.
pub fn merge_plugin_options(manifest: &mut Manifest, build_root: &Path) -> Result<bool> {
    let path = manifest.path.clone();
    let extra = Manifest::object_at(&path, &mut manifest.document, "extra")?;
    if extra.contains_key(PLUGIN_KEY) {
        return Ok(false);
    }

    let options = PluginOptions {
        build_root: Some(build_root_str(build_root)),
        templates_dir: None,
    };
    extra.insert(PLUGIN_KEY.to_string(), serde_json::to_value(options)?);
    debug!("Added extra.{} options", PLUGIN_KEY);
    Ok(true)
}

/// Add a default installer path under the build root for every recognized
/// package-type tag that has no entry yet. Returns whether the manifest
/// changed.
pub fn merge_installer_paths(manifest: &mut Manifest, build_root: &Path) -> Result<bool> {
    let existing = manifest.installer_paths()?;
    let root = build_root_str(build_root);

    let path = manifest.path.clone();
    let extra = Manifest::object_at(&path, &mut manifest.document, "extra")?;
    let table = Manifest::object_at(&path, extra, "installer-paths")?;

    let mut changed = false;
    for (package_type, suffix) in INSTALLER_PATHS {
        let tag = type_tag(package_type);
        if existing.iter().any(|(_, tags)| tags.contains(&tag)) {
            continue;
        }

        let pattern = format!("{}/{}", root, suffix);
        match table.get_mut(&pattern) {
            Some(Value::Array(tags)) => tags.push(Value::String(tag)),
            Some(_) => {
                return Err(Error::Manifest {
                    path: path.display().to_string(),
                    message: format!("installer path '{}' must be a list", pattern),
                    hint: None,
                })
            }
            None => {
                table.insert(pattern.clone(), Value::Array(vec![Value::String(tag)]));
            }
        }
        debug!("Added installer path {} for {}", pattern, package_type);
        changed = true;
    }

    Ok(changed)
}

/// Append the lifecycle hooks to the manifest's script lists, skipping any
/// command already present. Returns whether the manifest changed.
pub fn register_scripts(manifest: &mut Manifest, hooks: &HookCommands) -> Result<bool> {
    let path = manifest.path.clone();
    let scripts = Manifest::object_at(&path, &mut manifest.document, "scripts")?;

    let mut changed = false;
    for (event, commands) in hooks.registrations() {
        let slot = scripts
            .entry(event.as_str().to_string())
            .or_insert_with(|| Value::Array(Vec::new()));

        if let Some(single) = slot.as_str().map(str::to_string) {
            *slot = Value::Array(vec![Value::String(single)]);
        }
        let Value::Array(list) = slot else {
            return Err(Error::Manifest {
                path: path.display().to_string(),
                message: format!("script '{}' must be a string or a list", event),
                hint: None,
            });
        };

        for command in commands {
            if list.iter().any(|existing| existing.as_str() == Some(command.as_str())) {
                continue;
            }
            debug!("Registered '{}' for {}", command, event);
            list.push(Value::String(command));
            changed = true;
        }
    }

    Ok(changed)
}

/// Run the whole manifest augmentation. Fails before any mutation when the
/// core dependency is missing. Returns whether the manifest changed.
pub fn augment(manifest: &mut Manifest, build_root: &Path, hooks: &HookCommands) -> Result<bool> {
    let project = manifest.descriptor()?;
    ensure_core_dependency(&project)?;

    let mut changed = merge_plugin_options(manifest, build_root)?;
    changed |= merge_installer_paths(manifest, build_root)?;
    changed |= register_scripts(manifest, hooks)?;
    Ok(changed)
}
