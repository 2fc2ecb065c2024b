// src/backends/registry.rs
// =============================================================================
// The table of installed linkcheckers, keyed by name.
//
// It's filled once at startup (see `builtin()`), then only read. The host
// application can register its own backends before handing it out.
//
// Rust concepts:
// - BTreeMap: A sorted map, so listing backends is always in name order
// - Arc<dyn Trait>: Shared ownership of a trait object
// =============================================================================

use super::ENTRYPOINT;
use crate::checker::{HttpLinkchecker, Linkchecker, NoCheckLinkchecker};
use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct LinkcheckerRegistry {
    linkcheckers: BTreeMap<String, Arc<dyn Linkchecker>>,
}

impl LinkcheckerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Registers the linkcheckers this crate ships with:
    // - "no_check": never checks, always available
    // - "http": HEAD/GET request against the resource URL
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.register("no_check", NoCheckLinkchecker);
        registry.register("http", HttpLinkchecker::new()?);
        Ok(registry)
    }

    // Adds a linkchecker under `name`, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, linkchecker: impl Linkchecker + 'static) {
        let name = name.into();
        log::debug!("[linkchecker.registry] registering '{}' in {}", name, ENTRYPOINT);
        self.linkcheckers.insert(name, Arc::new(linkchecker));
    }

    // The full name -> linkchecker mapping
    pub fn get_all(&self) -> &BTreeMap<String, Arc<dyn Linkchecker>> {
        &self.linkcheckers
    }
}

impl std::fmt::Debug for LinkcheckerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkcheckerRegistry")
            .field("group", &ENTRYPOINT)
            .field("names", &self.linkcheckers.keys().collect::<Vec<_>>())
            .finish()
    }
}
