// src/backends/mod.rs
// =============================================================================
// This module knows which linkcheckers are installed and picks one by name.
//
// Submodules:
// - registry: The table of installed linkcheckers
// - resolver: Name lookup with a fallback on the configured default
// =============================================================================

mod registry;
mod resolver;

pub use registry::LinkcheckerRegistry;
pub use resolver::LinkcheckerResolver;

// The plugin group every linkchecker backend is registered under
pub const ENTRYPOINT: &str = "udata.linkcheckers";
