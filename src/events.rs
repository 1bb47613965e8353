//! # Lifecycle Events
//!
//! Composer reaches this tool through script hooks. Each registered hook is
//! a `drupal-component-scaffold event <name>` command; this module maps the
//! event names onto the action the handler takes for them.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Composer script events this tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptEvent {
    PreAutoloadDump,
    PostInstallCmd,
    PostUpdateCmd,
    PostPackageInstall,
    PostPackageUpdate,
}

/// What the handler does when an event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    /// Merge installer paths, options and hooks into the manifest.
    PrepareManifest,
    /// Create directories, the component link and the configuration files.
    DevelopmentBuild,
    /// Nothing to do.
    Ignore,
}

impl ScriptEvent {
    /// Every event, in lifecycle order.
    pub const ALL: [ScriptEvent; 5] = [
        ScriptEvent::PreAutoloadDump,
        ScriptEvent::PostPackageInstall,
        ScriptEvent::PostPackageUpdate,
        ScriptEvent::PostInstallCmd,
        ScriptEvent::PostUpdateCmd,
    ];

    /// Events that get a re-entry hook in the manifest's `scripts`.
    pub const REGISTERED: [ScriptEvent; 3] = [
        ScriptEvent::PostInstallCmd,
        ScriptEvent::PostUpdateCmd,
        ScriptEvent::PreAutoloadDump,
    ];

    /// The name Composer uses for this event.
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptEvent::PreAutoloadDump => "pre-autoload-dump",
            ScriptEvent::PostInstallCmd => "post-install-cmd",
            ScriptEvent::PostUpdateCmd => "post-update-cmd",
            ScriptEvent::PostPackageInstall => "post-package-install",
            ScriptEvent::PostPackageUpdate => "post-package-update",
        }
    }

    /// Whether Drupal's own scaffold hook runs before ours for this event.
    pub fn chains_framework_scaffold(self) -> bool {
        matches!(self, ScriptEvent::PostInstallCmd | ScriptEvent::PostUpdateCmd)
    }

    /// The action subscribed to this event.
    pub fn action(self) -> EventAction {
        match self {
            ScriptEvent::PreAutoloadDump => EventAction::PrepareManifest,
            ScriptEvent::PostInstallCmd | ScriptEvent::PostUpdateCmd => {
                EventAction::DevelopmentBuild
            }
            ScriptEvent::PostPackageInstall | ScriptEvent::PostPackageUpdate => {
                EventAction::Ignore
            }
        }
    }
}

impl FromStr for ScriptEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ScriptEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| Error::UnknownEvent {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
