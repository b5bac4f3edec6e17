//! Public SDK for the streaming dashboard platform.
//!
//! This crate re-exports all platform functionality:
//!
//! ```ignore
//! use dash_sdk::prelude::*;
//!
//! async fn handle(ctx: RequestContext, sink: StreamingSink) -> Result<()> {
//!     let logger = StructuredLogger::new(ctx.request_id.clone());
//!     logger.info("Handling request");
//!
//!     sink.send_shell(&shell.render_opening()).await?;
//!
//!     let client = SnapshotClient::new("/data", SpinTransport, ctx.request_id.clone());
//!     let doc = client.fetch_snapshot(FeedKind::MarketPulse).await?;
//!
//!     sink.send_panel("market-pulse", &render(&doc)).await?;
//!     Ok(())
//! }
//! ```

pub use dash_core;
pub use dash_data;
pub use dash_observability;
pub use dash_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use dash_core::*;
    pub use dash_data::*;
    pub use dash_observability::*;
    pub use dash_streaming::*;
}
