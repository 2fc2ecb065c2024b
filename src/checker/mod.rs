// src/checker/mod.rs
// =============================================================================
// This module defines what a "linkchecker" is and ships the built-in ones.
//
// Submodules:
// - nocheck: A dummy linkchecker for resources that need no check
// - http: Makes HTTP requests to check if a resource's link is alive
// - batch: Runs one linkchecker over many resources concurrently
//
// Every linkchecker, built-in or registered by the host application,
// implements the `Linkchecker` trait below and produces a `LinkcheckResult`.
//
// Rust concepts:
// - Traits: A shared interface that many types can implement
// - Trait objects (dyn Trait): Storing different implementations side by side
// - async-trait: Async methods on traits that are used as trait objects
// =============================================================================

mod batch;
mod http;
mod nocheck;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use batch::{check_resources, ResourceCheck};
pub use http::HttpLinkchecker;
pub use nocheck::NoCheckLinkchecker;

// A resource of the catalog whose link may need to be checked
//
// Linkcheckers receive it by reference. Some of them (like the no-check one)
// never look inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// The link this resource points to
    pub url: String,
}

impl Resource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// The outcome of checking one resource
//
// Field names follow the keys the catalog stores in a resource's extras,
// so the JSON output can be merged there as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkcheckResult {
    /// HTTP-style status code
    #[serde(rename = "check:status")]
    pub status: u16,
    /// Whether the link is considered reachable
    #[serde(rename = "check:available")]
    pub available: bool,
    /// When the check was performed
    #[serde(rename = "check:date")]
    pub date: DateTime<Utc>,
    /// What went wrong, when the check could not get an HTTP answer
    #[serde(rename = "check:error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// The capability every linkchecker backend provides
//
// `Send + Sync` because backends live in a shared, read-only registry and
// checks run on the tokio runtime.
#[async_trait]
pub trait Linkchecker: Send + Sync {
    async fn check(&self, resource: &Resource) -> LinkcheckResult;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - We keep linkcheckers as `Arc<dyn Linkchecker>` in the registry
//    - Plain `async fn` in traits can't be used through `dyn` yet
//    - async-trait rewrites the method to return a boxed future, which can
//      be stored behind `dyn` like any other trait method
//
// 2. What does #[serde(rename = "...")] do?
//    - The Rust field is `status`, the JSON key becomes "check:status"
//    - Useful when the JSON format is fixed by someone else
// -----------------------------------------------------------------------------
