//! Snapshot client over a pluggable transport.

use dash_core::RequestId;

use crate::feed::FeedKind;
use crate::transport::SnapshotTransport;

/// Error type for snapshot fetches.
///
/// All three variants classify as transport failures for panel messaging;
/// shape errors during typed extraction are the renderer's concern.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Invalid JSON from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("Connection error: {0}")]
    Connection(String),
}

/// Client for the pre-generated snapshot files.
///
/// Joins a fixed base path with a feed's resource name and performs a single
/// retrieval attempt. No retries and no timeout surface: a snapshot either
/// arrives on the first try or its panel shows the fetch error state.
pub struct SnapshotClient<T> {
    base: String,
    transport: T,
    request_id: RequestId,
}

impl<T: SnapshotTransport> SnapshotClient<T> {
    /// Create a new snapshot client.
    pub fn new(base: impl Into<String>, transport: T, request_id: RequestId) -> Self {
        Self {
            base: base.into(),
            transport,
            request_id,
        }
    }

    /// Full resource address for a feed.
    pub fn resource_url(&self, feed: FeedKind) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), feed.resource())
    }

    /// Fetch a feed's snapshot and parse the body as JSON.
    pub async fn fetch_snapshot(
        &self,
        feed: FeedKind,
    ) -> Result<serde_json::Value, FetchError> {
        let url = self.resource_url(feed);
        let resp = self.transport.get(&url).await?;

        if resp.status >= 400 {
            return Err(FetchError::Http {
                status: resp.status,
                url,
            });
        }

        serde_json::from_slice(&resp.body).map_err(|e| FetchError::Parse {
            url,
            reason: e.to_string(),
        })
    }

    /// Get the request ID.
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}
