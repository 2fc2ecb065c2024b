// src/config.rs
// =============================================================================
// Link-checking settings.
//
// Sources, from lowest to highest priority:
// 1. Built-in defaults (no default linkchecker)
// 2. A JSON settings file, if one is given
// 3. The LINKCHECKING_DEFAULT_LINKCHECKER environment variable
// 4. The --default command-line flag
//
// An empty environment variable counts as unset, so `VAR=` in a shell
// profile doesn't wipe out the file's default.
//
// Settings are passed explicitly to the resolver instead of being read from
// a global, so tests can build whatever settings they need.
// =============================================================================

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// Name of the option in the environment and in settings files
pub const DEFAULT_LINKCHECKER_KEY: &str = "LINKCHECKING_DEFAULT_LINKCHECKER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Linkchecker used when the requested one isn't installed
    #[serde(default, alias = "LINKCHECKING_DEFAULT_LINKCHECKER")]
    pub default_linkchecker: Option<String>,
}

impl Settings {
    // Loads settings from an optional file, then applies the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    fn load_with_env(path: Option<&Path>, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Ok(settings.with_env_overrides(lookup))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    // `lookup` reads one variable; taking it as a function keeps tests away
    // from the real process environment
    fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(DEFAULT_LINKCHECKER_KEY).filter(|v| !v.is_empty()) {
            self.default_linkchecker = Some(value);
        }
        self
    }

    // The --default flag wins over every other source
    pub fn with_cli_override(mut self, default_linkchecker: Option<String>) -> Self {
        if let Some(value) = default_linkchecker {
            self.default_linkchecker = Some(value);
        }
        self
    }
}
