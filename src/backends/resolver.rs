// src/backends/resolver.rs
// =============================================================================
// Picks a linkchecker by name, falling back on the configured default.
//
// How it works:
// 1. Look up the requested name in the registry
// 2. If missing, look up the configured default linkchecker
// 3. If still missing, log an error and return None
//
// Nothing is cached: every call reads the registry and settings it's given,
// so a reloaded configuration is picked up on the next call.
// =============================================================================

use super::LinkcheckerRegistry;
use crate::checker::Linkchecker;
use crate::config::Settings;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct LinkcheckerResolver<'a> {
    registry: &'a LinkcheckerRegistry,
    settings: &'a Settings,
}

impl<'a> LinkcheckerResolver<'a> {
    pub fn new(registry: &'a LinkcheckerRegistry, settings: &'a Settings) -> Self {
        Self { registry, settings }
    }

    // Gets a linkchecker given its name or falls back on the default
    //
    // A None here is not fatal: the caller decides whether to skip the check
    // or use the no-check linkchecker instead.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Linkchecker>> {
        let linkcheckers = self.registry.get_all();

        let selected = linkcheckers.get(name).or_else(|| {
            self.settings
                .default_linkchecker
                .as_deref()
                .and_then(|default| linkcheckers.get(default))
        });

        if selected.is_none() {
            log::error!("No linkchecker found ({} requested and no fallback)", name);
        }

        selected.cloned()
    }
}
