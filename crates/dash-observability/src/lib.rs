//! Observability infrastructure for the dashboard platform.

mod logging;
mod metrics;

pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
pub use metrics::{FeedFetchMetrics, MetricsCollector, PanelMetrics, RequestMetrics};
