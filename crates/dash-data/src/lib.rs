//! Snapshot access layer for the dashboard feeds.

mod client;
mod feed;
mod transport;

pub use client::{FetchError, SnapshotClient};
pub use feed::{FeedDescriptor, FeedKind, FEEDS};
pub use transport::{SnapshotTransport, SpinTransport, TransportResponse};
