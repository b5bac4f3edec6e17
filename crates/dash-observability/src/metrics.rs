//! Per-request timing metrics.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use dash_core::RequestId;
use serde::{Deserialize, Serialize};

/// Metrics for a single dashboard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Workload name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Time to first panel (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_first_panel_us: Option<u64>,
    /// Panel timings.
    pub panels: HashMap<String, PanelMetrics>,
    /// Feed fetch timings.
    pub feeds: HashMap<String, FeedFetchMetrics>,
    /// Total request duration (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration_us: Option<u64>,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Metrics for a single panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelMetrics {
    /// Panel name.
    pub name: String,
    /// Time from request start to panel start (microseconds).
    pub start_us: u64,
    /// Time from request start to panel sent (microseconds).
    pub sent_us: u64,
    /// Panel render duration (microseconds).
    pub duration_us: u64,
    /// Bytes sent for this panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Whether the panel ended in the error state.
    pub errored: bool,
}

/// Metrics for one feed's snapshot fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedFetchMetrics {
    /// Feed name.
    pub feed: String,
    /// URL fetched.
    pub url: String,
    /// Fetch duration (microseconds).
    pub duration_us: u64,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Whether the fetch succeeded.
    pub success: bool,
    /// Error message if failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Collector for request metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    workload: Option<String>,
    start: Instant,
    shell_sent: Option<Instant>,
    first_panel_sent: Option<Instant>,
    panels: HashMap<String, PanelMetricsBuilder>,
    feeds: HashMap<String, FeedFetchMetrics>,
}

#[derive(Debug)]
struct PanelMetricsBuilder {
    name: String,
    start: Option<Instant>,
    sent: Option<Instant>,
    bytes: Option<usize>,
    errored: bool,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            start: Instant::now(),
            shell_sent: None,
            first_panel_sent: None,
            panels: HashMap::new(),
            feeds: HashMap::new(),
        }
    }

    /// Set workload name.
    pub fn set_workload(&mut self, workload: impl Into<String>) {
        self.workload = Some(workload.into());
    }

    /// Record shell sent.
    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    /// Record panel start.
    pub fn record_panel_start(&mut self, name: &str) {
        self.panels.insert(
            name.to_string(),
            PanelMetricsBuilder {
                name: name.to_string(),
                start: Some(Instant::now()),
                sent: None,
                bytes: None,
                errored: false,
            },
        );
    }

    /// Record panel sent.
    pub fn record_panel_sent(&mut self, name: &str, bytes: Option<usize>, errored: bool) {
        let now = Instant::now();

        if self.first_panel_sent.is_none() {
            self.first_panel_sent = Some(now);
        }

        if let Some(panel) = self.panels.get_mut(name) {
            panel.sent = Some(now);
            panel.bytes = bytes;
            panel.errored = errored;
        } else {
            // Panel wasn't started explicitly, record it now
            self.panels.insert(
                name.to_string(),
                PanelMetricsBuilder {
                    name: name.to_string(),
                    start: Some(now),
                    sent: Some(now),
                    bytes,
                    errored,
                },
            );
        }
    }

    /// Record a feed's snapshot fetch.
    pub fn record_fetch(
        &mut self,
        feed: &str,
        url: &str,
        duration: Duration,
        status_code: Option<u16>,
        success: bool,
        error: Option<String>,
    ) {
        self.feeds.insert(
            feed.to_string(),
            FeedFetchMetrics {
                feed: feed.to_string(),
                url: url.to_string(),
                duration_us: duration.as_micros() as u64,
                status_code,
                success,
                error,
            },
        );
    }

    /// Finalize and return the metrics.
    pub fn finalize(self, status_code: Option<u16>) -> RequestMetrics {
        let now = Instant::now();
        let start = self.start;

        let time_to_shell_us = self
            .shell_sent
            .map(|t| t.duration_since(start).as_micros() as u64);

        let time_to_first_panel_us = self
            .first_panel_sent
            .map(|t| t.duration_since(start).as_micros() as u64);

        let panels: HashMap<String, PanelMetrics> = self
            .panels
            .into_iter()
            .filter_map(|(name, builder)| {
                let panel_start = builder.start?;
                let sent = builder.sent.unwrap_or(now);
                Some((
                    name,
                    PanelMetrics {
                        name: builder.name,
                        start_us: panel_start.duration_since(start).as_micros() as u64,
                        sent_us: sent.duration_since(start).as_micros() as u64,
                        duration_us: sent.duration_since(panel_start).as_micros() as u64,
                        bytes: builder.bytes,
                        errored: builder.errored,
                    },
                ))
            })
            .collect();

        RequestMetrics {
            request_id: self.request_id.to_string(),
            workload: self.workload,
            time_to_shell_us,
            time_to_first_panel_us,
            panels,
            feeds: self.feeds,
            total_duration_us: Some(now.duration_since(start).as_micros() as u64),
            status_code,
        }
    }

    /// Get total elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl RequestMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Request: {}", self.request_id));

        if let Some(tts) = self.time_to_shell_us {
            lines.push(format!(
                "  Time to shell: {}us ({:.2}ms)",
                tts,
                tts as f64 / 1000.0
            ));
        }

        if let Some(ttfp) = self.time_to_first_panel_us {
            lines.push(format!(
                "  Time to first panel: {}us ({:.2}ms)",
                ttfp,
                ttfp as f64 / 1000.0
            ));
        }

        if let Some(total) = self.total_duration_us {
            lines.push(format!(
                "  Total: {}us ({:.2}ms)",
                total,
                total as f64 / 1000.0
            ));
        }

        if !self.panels.is_empty() {
            lines.push("  Panels:".to_string());
            let mut names: Vec<&String> = self.panels.keys().collect();
            names.sort();
            for name in names {
                let panel = &self.panels[name];
                let state = if panel.errored { " [error]" } else { "" };
                lines.push(format!(
                    "    {}: {}us ({:.2}ms){}",
                    name,
                    panel.duration_us,
                    panel.duration_us as f64 / 1000.0,
                    state
                ));
            }
        }

        if !self.feeds.is_empty() {
            lines.push("  Feeds:".to_string());
            let mut names: Vec<&String> = self.feeds.keys().collect();
            names.sort();
            for name in names {
                let fetch = &self.feeds[name];
                let status = if fetch.success {
                    format!("{}", fetch.status_code.unwrap_or(0))
                } else {
                    "FAILED".to_string()
                };
                lines.push(format!(
                    "    {} [{}]: {}us ({:.2}ms) - {}",
                    fetch.feed,
                    status,
                    fetch.duration_us,
                    fetch.duration_us as f64 / 1000.0,
                    fetch.url
                ));
            }
        }

        lines.join("\n")
    }
}
