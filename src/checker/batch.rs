// src/checker/batch.rs
// =============================================================================
// Runs one linkchecker over many resources concurrently.
//
// Why concurrent?
// - A catalog can hold hundreds of resources
// - Each HTTP check takes time (network latency)
// - Running them side by side is MUCH faster than one after another
// =============================================================================

use super::{LinkcheckResult, Linkchecker, Resource};
use futures::stream::{self, StreamExt};
use serde::Serialize;

// How many checks may be in flight at once
//
// Balance between:
// - Too low: slow checking
// - Too high: might overwhelm the network or get rate-limited
const MAX_CONCURRENT_CHECKS: usize = 50;

// A resource's URL next to the result of checking it
#[derive(Debug, Clone, Serialize)]
pub struct ResourceCheck {
    pub url: String,
    #[serde(flatten)]
    pub result: LinkcheckResult,
}

// Checks every resource with the given linkchecker
//
// Results come back in the same order as the input resources.
pub async fn check_resources(checker: &dyn Linkchecker, resources: Vec<Resource>) -> Vec<ResourceCheck> {
    let futures = resources.into_iter().map(|resource| async move {
        let result = checker.check(&resource).await;
        ResourceCheck {
            url: resource.url,
            result,
        }
    });

    // .buffered() keeps input order, unlike .buffer_unordered()
    stream::iter(futures)
        .buffered(MAX_CONCURRENT_CHECKS)
        .collect()
        .await
}
