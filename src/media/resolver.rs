//! Metadata resolution
//!
//! `MediaResolver` is the seam between the engine and whatever supplies
//! video metadata. The only production implementation is [`MockResolver`],
//! which fabricates a fixed record after an artificial delay; no request
//! leaves the process. Tests substitute instant or failing resolvers.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::core::config;
use crate::core::error::AppResult;
use crate::core::validation::MediaRequest;
use crate::media::catalog::FORMAT_CATALOG;
use crate::media::reference::{max_res_thumbnail, MediaDetails, MediaReference};

/// Trait for metadata resolver implementations.
///
/// A resolver turns a validated request into a full [`MediaDetails`]
/// record. Implementations must not block: latency is modeled with timer
/// suspensions so the caller stays responsive.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Resolve metadata and the format catalog for a validated request.
    async fn resolve(&self, request: &MediaRequest) -> AppResult<MediaDetails>;
}

/// Resolver that fabricates metadata locally.
///
/// Sleeps for a configurable delay to emulate network latency, then
/// returns the same sample record for every identifier (the identifier
/// only shapes the thumbnail URL). Cannot fail.
pub struct MockResolver {
    delay: Duration,
}

impl MockResolver {
    /// Resolver with the production lookup delay.
    pub fn new() -> Self {
        Self {
            delay: config::resolver::lookup_delay(),
        }
    }

    /// Resolver with a custom delay; pass `Duration::ZERO` in tests that
    /// don't exercise timing.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaResolver for MockResolver {
    async fn resolve(&self, request: &MediaRequest) -> AppResult<MediaDetails> {
        log::debug!("Resolving metadata for {} (id: {:?})", request.url, request.video_id);
        sleep(self.delay).await;

        Ok(MediaDetails {
            reference: MediaReference {
                id: request.video_id.clone(),
                title: "Sample YouTube Video".to_string(),
                thumbnail: max_res_thumbnail(&request.video_id),
                duration: "10:30".to_string(),
                author: "YouTube Creator".to_string(),
            },
            formats: FORMAT_CATALOG.to_vec(),
        })
    }
}
