// src/checker/nocheck.rs
// =============================================================================
// Dummy linkchecker for resources that need no check.
//
// It never looks at the resource and never touches the network: every call
// answers "204 No Content, available, checked just now".
// =============================================================================

use super::{LinkcheckResult, Linkchecker, Resource};
use async_trait::async_trait;
use chrono::Utc;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoCheckLinkchecker;

#[async_trait]
impl Linkchecker for NoCheckLinkchecker {
    async fn check(&self, _resource: &Resource) -> LinkcheckResult {
        LinkcheckResult {
            status: 204,
            available: true,
            date: Utc::now(),
            error: None,
        }
    }
}
