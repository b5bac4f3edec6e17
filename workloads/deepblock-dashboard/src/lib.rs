//! DeepBlock AI dashboard - streaming snapshot panels.
//!
//! Serves one page that streams six independently fetched feed panels:
//! - Shell first, every panel in the loading state
//! - All six snapshot fetches launched at once, no ordering across feeds
//! - Each panel streams in completion order, rendered or errored
//! - A failed feed never affects another panel

mod config;
mod data;
mod format;
mod sections;

use std::time::{Duration, Instant};

use futures::stream::{FuturesUnordered, StreamExt};
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use dash_sdk::dash_core::{Method, PanelLifecycle, PanelPhase, RequestContext};
use dash_sdk::dash_data::{FeedKind, FetchError, SnapshotClient, SnapshotTransport, SpinTransport, FEEDS};
use dash_sdk::dash_observability::{LogFormat, LogLevel, MetricsCollector, StructuredLogger};
use dash_sdk::dash_streaming::{loading_card, text_update, HeadContent, PanelContent, Shell, StreamingSink};

use config::{DashboardConfig, LAST_UPDATED_ID};
use data::*;
use sections::*;

/// Main HTTP handler for the dashboard page.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_default();
    let config = DashboardConfig::default();

    // Create platform context
    let ctx = RequestContext::new(Method::Get, path.clone());
    let request_id = ctx.request_id.clone();

    // Setup logging
    let logger = StructuredLogger::new(request_id.clone())
        .with_workload("deepblock-dashboard")
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human);

    // Setup metrics
    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_workload("deepblock-dashboard");

    logger
        .info_builder("Dashboard request started")
        .field("path", path.as_str())
        .emit();

    // The page itself is never cached: panels always reflect the latest
    // snapshot files.
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("cache-control".to_owned(), "no-store".into()),
        ("x-request-id".to_owned(), request_id.to_string().into_bytes()),
    ];

    let headers = Fields::from_list(&header_list).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    // 1) Send shell immediately, every panel in the loading state
    let shell = build_shell(&config);
    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger
            .error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }
    metrics.record_shell_sent();
    logger.debug("Shell sent");

    let mut lifecycle = PanelLifecycle::new();
    for descriptor in &FEEDS {
        if shell.has_container(descriptor.container_id) {
            lifecycle.register(descriptor.container_id);
        }
    }

    // 2) Launch all six feed pipelines at once
    let client = SnapshotClient::new(config.data_base.clone(), SpinTransport, request_id.clone());

    logger.info("Launching feed pipelines");
    let mut pipelines: FuturesUnordered<_> = FeedKind::ALL
        .iter()
        .map(|&feed| run_feed(&client, feed, &logger))
        .collect();

    // 3) Stream each panel as its pipeline completes
    while let Some(outcome) = pipelines.next().await {
        let feed = outcome.feed;
        let container_id = feed.container_id();

        metrics.record_fetch(
            feed.name(),
            &outcome.fetch.url,
            outcome.fetch.duration,
            outcome.fetch.status,
            outcome.fetch.success,
            outcome.fetch.error.clone(),
        );

        // Container-optional: a feed the shell does not declare is skipped
        if !shell.has_container(container_id) {
            logger
                .debug_builder("Container absent, panel skipped")
                .field("feed", feed.name())
                .emit();
            continue;
        }

        let phase = outcome.content.phase();
        if let Err(e) = lifecycle.complete(container_id, phase) {
            logger
                .warn_builder("Panel lifecycle violation")
                .field("feed", feed.name())
                .field("error", e.to_string())
                .emit();
            continue;
        }

        metrics.record_panel_start(feed.name());
        let html = outcome.content.to_stream_html(container_id);
        let errored = phase == PanelPhase::Error;
        let _ = sink.send_panel(feed.name(), &html).await;
        metrics.record_panel_sent(feed.name(), Some(html.len()), errored);

        // The market pulse snapshot carries the page-wide timestamp; an
        // unparseable one leaves the indicator untouched.
        if let Some(text) = outcome.last_updated {
            if shell.has_container(LAST_UPDATED_ID) {
                let _ = sink
                    .send_raw(text_update(LAST_UPDATED_ID, &text).into_bytes())
                    .await;
            }
        }
    }

    // 4) Send closing
    let _ = sink.send_raw(shell.render_closing().into_bytes()).await;
    let _ = sink.complete();

    // Finalize metrics
    let final_metrics = metrics.finalize(Some(200));
    logger.info("Dashboard request complete");
    eprintln!("\n{}", final_metrics.to_summary());
}

/// Terminal outcome of one feed pipeline.
struct PanelOutcome {
    feed: FeedKind,
    content: PanelContent,
    /// Formatted last-updated sentence, market pulse only.
    last_updated: Option<String>,
    fetch: FetchRecord,
}

/// Fetch observation for the metrics collector.
struct FetchRecord {
    url: String,
    duration: Duration,
    status: Option<u16>,
    success: bool,
    error: Option<String>,
}

/// Run one feed pipeline to its terminal outcome.
///
/// Every failure resolves into the panel's error state; nothing escapes to
/// the orchestrator or to other feeds.
async fn run_feed<T: SnapshotTransport>(
    client: &SnapshotClient<T>,
    feed: FeedKind,
    logger: &StructuredLogger,
) -> PanelOutcome {
    let url = client.resource_url(feed);
    let started = Instant::now();

    let doc = match client.fetch_snapshot(feed).await {
        Ok(doc) => doc,
        Err(err) => {
            logger
                .warn_builder("Snapshot fetch failed")
                .field("feed", feed.name())
                .field("error", err.to_string())
                .emit();
            let status = match &err {
                FetchError::Http { status, .. } => Some(*status),
                _ => None,
            };
            return PanelOutcome {
                feed,
                content: PanelContent::Error(feed.fetch_error_message()),
                last_updated: None,
                fetch: FetchRecord {
                    url,
                    duration: started.elapsed(),
                    status,
                    success: false,
                    error: Some(err.to_string()),
                },
            };
        }
    };

    let fetch = FetchRecord {
        url,
        duration: started.elapsed(),
        status: Some(200),
        success: true,
        error: None,
    };

    match render_feed(feed, doc) {
        Ok(rendered) => PanelOutcome {
            feed,
            content: PanelContent::Rendered(rendered.html),
            last_updated: rendered.last_updated,
            fetch,
        },
        Err(err) => {
            logger
                .warn_builder("Snapshot render failed")
                .field("feed", feed.name())
                .field("error", err.to_string())
                .emit();
            PanelOutcome {
                feed,
                content: PanelContent::Error(feed.render_error_message().to_string()),
                last_updated: None,
                fetch,
            }
        }
    }
}

/// Rendered panel fragment plus the page-wide timestamp when present.
struct RenderedPanel {
    html: String,
    last_updated: Option<String>,
}

/// Typed extraction and rendering for one feed's raw snapshot document.
///
/// A shape mismatch here is a render failure, distinct from a fetch failure:
/// the snapshot arrived but could not be displayed.
fn render_feed(feed: FeedKind, doc: serde_json::Value) -> Result<RenderedPanel, serde_json::Error> {
    match feed {
        FeedKind::MarketPulse => {
            let snapshot: Snapshot<MarketPulseItem> = serde_json::from_value(doc)?;
            let last_updated = snapshot
                .generated_at
                .as_deref()
                .and_then(format::format_last_updated);
            Ok(RenderedPanel {
                html: render_market_pulse(&snapshot),
                last_updated,
            })
        }
        FeedKind::AlphaRadar => {
            let snapshot: Snapshot<AlphaRadarEntry> = serde_json::from_value(doc)?;
            Ok(RenderedPanel {
                html: render_alpha_radar(&snapshot),
                last_updated: None,
            })
        }
        FeedKind::DefiYield => {
            let snapshot: Snapshot<YieldPool> = serde_json::from_value(doc)?;
            Ok(RenderedPanel {
                html: render_defi_yield(&snapshot),
                last_updated: None,
            })
        }
        FeedKind::NewTokenExplorer => {
            let snapshot: Snapshot<NewTokenEntry> = serde_json::from_value(doc)?;
            Ok(RenderedPanel {
                html: render_new_tokens(&snapshot),
                last_updated: None,
            })
        }
        FeedKind::WhaleWatcher => {
            let snapshot: Snapshot<WhaleTransfer> = serde_json::from_value(doc)?;
            Ok(RenderedPanel {
                html: render_whale_watcher(&snapshot),
                last_updated: None,
            })
        }
        FeedKind::Narratives => {
            let snapshot: Snapshot<Narrative> = serde_json::from_value(doc)?;
            Ok(RenderedPanel {
                html: render_narratives(&snapshot),
                last_updated: None,
            })
        }
    }
}

/// Build the page shell: header, last-updated indicator, and one loading
/// card per feed. The shell's container registry drives which panels the
/// orchestrator will stream.
fn build_shell(config: &DashboardConfig) -> Shell {
    let mut body_start = format!(
        r#"<body>
<header class="db-header">
    <h1>{title}</h1>
    <p id="{last_updated}" class="db-updated">Última actualización general: N/A</p>
</header>
<main class="db-grid">
"#,
        title = html_escape(&config.title),
        last_updated = LAST_UPDATED_ID,
    );

    let mut shell = Shell::new(
        HeadContent::new(config.title.as_str())
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(DASHBOARD_STYLES),
    )
    .with_container(LAST_UPDATED_ID);

    for descriptor in &FEEDS {
        body_start.push_str(&loading_card(descriptor.container_id, descriptor.kind.title()));
        body_start.push('\n');
        shell = shell.with_container(descriptor.container_id);
    }

    shell.with_body_start(body_start).with_body_end(
        r#"</main>
<footer class="db-footer">
    <p>DeepBlock AI</p>
</footer>
</body>
</html>"#
            .to_string(),
    )
}

/// CSS styles for the dashboard.
const DASHBOARD_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: #0d1117; color: #e6edf3; }
.db-header { padding: 1.5rem 2rem; border-bottom: 1px solid #21262d; }
.db-header h1 { margin: 0; font-size: 1.4rem; }
.db-updated { color: #8b949e; font-size: 0.8rem; margin: 0.5rem 0 0 0; }
.db-footer { padding: 2rem; text-align: center; color: #8b949e; }
.db-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1rem; padding: 2rem; }
.db-card { background: #161b22; border: 1px solid #21262d; border-radius: 8px; padding: 1.25rem; }
.db-card-title { margin: 0 0 0.75rem 0; font-size: 1rem; color: #58a6ff; }
.db-panel { font-size: 0.85rem; line-height: 1.5; }
.db-loading { color: #8b949e; animation: db-pulse 1.2s ease-in-out infinite; }
.db-error { color: #f85149; }
.db-list { list-style: none; padding: 0; margin: 0.25rem 0; }
.db-list li { padding: 0.4rem 0; border-bottom: 1px solid #21262d; }
.db-list li:last-child { border-bottom: none; }
.db-section { margin-bottom: 0.75rem; }
.db-badge { font-weight: 600; margin-bottom: 0.25rem; }
.db-movers { display: flex; gap: 1.5rem; flex-wrap: wrap; }
.db-movers-col { flex: 1; }
code { background: #21262d; padding: 0.1rem 0.3rem; border-radius: 4px; }
@keyframes db-pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.4; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dash_sdk::dash_core::{PanelPhase, RequestId};
    use dash_sdk::dash_data::TransportResponse;
    use futures::executor::block_on;
    use std::collections::HashMap;

    /// Transport serving a canned response per resource file name.
    struct TableTransport {
        responses: HashMap<&'static str, (u16, String)>,
    }

    impl TableTransport {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
            }
        }

        fn with(mut self, resource: &'static str, status: u16, body: &str) -> Self {
            self.responses.insert(resource, (status, body.to_string()));
            self
        }

        fn all_empty() -> Self {
            let mut t = Self::new();
            for descriptor in &FEEDS {
                t.responses
                    .insert(descriptor.resource, (200, r#"{"items": []}"#.to_string()));
            }
            t
        }
    }

    #[async_trait(?Send)]
    impl SnapshotTransport for TableTransport {
        async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
            let resource = url.rsplit('/').next().unwrap_or(url);
            match self.responses.get(resource) {
                Some((status, body)) => Ok(TransportResponse {
                    status: *status,
                    body: body.clone().into_bytes(),
                }),
                None => Err(FetchError::Connection(format!("no route for {}", url))),
            }
        }
    }

    fn test_logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("test")).with_min_level(LogLevel::Error)
    }

    fn client(transport: TableTransport) -> SnapshotClient<TableTransport> {
        SnapshotClient::new("/data", transport, RequestId::from_string("test"))
    }

    fn run_all(client: &SnapshotClient<TableTransport>) -> Vec<PanelOutcome> {
        let logger = test_logger();
        block_on(async {
            let pipelines: FuturesUnordered<_> = FeedKind::ALL
                .iter()
                .map(|&feed| run_feed(client, feed, &logger))
                .collect();
            pipelines.collect().await
        })
    }

    #[test]
    fn test_one_failed_feed_does_not_affect_others() {
        let transport =
            TableTransport::all_empty().with("defi-yield-latest.json", 404, "not found");
        let client = client(transport);

        let outcomes = run_all(&client);
        assert_eq!(outcomes.len(), 6);

        for outcome in &outcomes {
            match outcome.feed {
                FeedKind::DefiYield => {
                    assert_eq!(
                        outcome.content,
                        PanelContent::Error(
                            "No se pudo cargar defi-yield-latest.json".to_string()
                        )
                    );
                    assert!(!outcome.fetch.success);
                    assert_eq!(outcome.fetch.status, Some(404));
                }
                _ => {
                    assert!(
                        matches!(outcome.content, PanelContent::Rendered(_)),
                        "{} should render",
                        outcome.feed
                    );
                    assert!(outcome.fetch.success);
                }
            }
        }
    }

    #[test]
    fn test_wrong_shape_is_render_failure_not_fetch_failure() {
        // Valid JSON, but items is not an array: the feed fetched fine and
        // failed at render time.
        let transport = TableTransport::all_empty().with(
            "narratives-ai-detector.json",
            200,
            r#"{"items": 42}"#,
        );
        let client = client(transport);
        let logger = test_logger();

        let outcome = block_on(run_feed(&client, FeedKind::Narratives, &logger));
        assert!(outcome.fetch.success);
        assert_eq!(
            outcome.content,
            PanelContent::Error("Error al renderizar narrativas.".to_string())
        );
    }

    #[test]
    fn test_empty_feeds_render_their_empty_sentences() {
        let client = client(TableTransport::all_empty());
        let outcomes = run_all(&client);

        for outcome in outcomes {
            if outcome.feed == FeedKind::MarketPulse {
                continue; // sectioned panel, no single empty sentence
            }
            match outcome.content {
                PanelContent::Rendered(html) => {
                    assert_eq!(html, outcome.feed.empty_message());
                }
                other => panic!("expected rendered empty state, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_market_pulse_carries_last_updated() {
        let transport = TableTransport::all_empty().with(
            "market-pulse-latest.json",
            200,
            r#"{"generated_at": "2025-12-04T14:20:00Z", "items": []}"#,
        );
        let client = client(transport);
        let logger = test_logger();

        let outcome = block_on(run_feed(&client, FeedKind::MarketPulse, &logger));
        assert_eq!(
            outcome.last_updated.as_deref(),
            Some("Última actualización general: 04/12/2025 14:20:00 UTC")
        );
    }

    #[test]
    fn test_unparseable_timestamp_is_silently_skipped() {
        let transport = TableTransport::all_empty().with(
            "market-pulse-latest.json",
            200,
            r#"{"generated_at": "ayer", "items": []}"#,
        );
        let client = client(transport);
        let logger = test_logger();

        let outcome = block_on(run_feed(&client, FeedKind::MarketPulse, &logger));
        assert!(outcome.last_updated.is_none());
        assert!(matches!(outcome.content, PanelContent::Rendered(_)));
    }

    #[test]
    fn test_new_token_pipeline_end_to_end() {
        let transport = TableTransport::all_empty().with(
            "new-token-explorer-latest.json",
            200,
            r#"{"items": [{"symbol": "ABC", "chain": "eth", "alpha_score": 12.345,
                           "liquidity_usd": 1000000, "volume_24h_usd": 500}]}"#,
        );
        let client = client(transport);
        let logger = test_logger();

        let outcome = block_on(run_feed(&client, FeedKind::NewTokenExplorer, &logger));
        match outcome.content {
            PanelContent::Rendered(html) => {
                assert!(html.contains("ABC"));
                assert!(html.contains("12.3"));
                assert!(html.contains("$1,000,000"));
            }
            other => panic!("expected rendered panel, got {:?}", other),
        }
    }

    #[test]
    fn test_shell_declares_every_feed_container() {
        let shell = build_shell(&DashboardConfig::default());
        for descriptor in &FEEDS {
            assert!(shell.has_container(descriptor.container_id));
        }
        assert!(shell.has_container(LAST_UPDATED_ID));

        let opening = shell.render_opening();
        assert!(opening.contains(r#"id="market-pulse-content""#));
        assert!(opening.contains("db-loading"));
        assert!(opening.contains("Última actualización general: N/A"));
    }

    #[test]
    fn test_lifecycle_over_pipeline_outcomes() {
        let transport =
            TableTransport::all_empty().with("alpha-radar-latest.json", 500, "boom");
        let client = client(transport);
        let outcomes = run_all(&client);

        let mut lifecycle = PanelLifecycle::new();
        for descriptor in &FEEDS {
            lifecycle.register(descriptor.container_id);
        }
        for outcome in &outcomes {
            lifecycle
                .complete(outcome.feed.container_id(), outcome.content.phase())
                .unwrap();
        }
        assert!(lifecycle.all_settled());
        assert_eq!(
            lifecycle.phase(FeedKind::AlphaRadar.container_id()),
            Some(PanelPhase::Error)
        );
        assert_eq!(
            lifecycle.phase(FeedKind::WhaleWatcher.container_id()),
            Some(PanelPhase::Rendered)
        );
    }
}
