//! Panel lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::DashboardError;

/// Phases a dashboard panel moves through.
///
/// Transitions are strictly loading -> (rendered | error). Both outcomes are
/// terminal: a panel is never re-rendered and never reverts within a single
/// page lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// Placeholder sent with the shell, content pending.
    Loading,
    /// Content streamed successfully.
    Rendered,
    /// Fetch or render failed; error state applied.
    Error,
}

impl PanelPhase {
    /// Whether this phase accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rendered | Self::Error)
    }
}

/// Tracks the phase of every panel on the page and enforces the
/// loading -> terminal ordering.
#[derive(Debug, Default)]
pub struct PanelLifecycle {
    phases: HashMap<String, PanelPhase>,
}

impl PanelLifecycle {
    /// Create an empty lifecycle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel in the loading state. Called when the shell is built.
    pub fn register(&mut self, container_id: impl Into<String>) {
        self.phases.insert(container_id.into(), PanelPhase::Loading);
    }

    /// Move a panel to a terminal phase.
    ///
    /// Rejects unknown panels, a second completion, and attempts to "complete"
    /// back into the loading state.
    pub fn complete(
        &mut self,
        container_id: &str,
        outcome: PanelPhase,
    ) -> Result<(), DashboardError> {
        if !outcome.is_terminal() {
            return Err(DashboardError::PanelClosed(container_id.to_string()));
        }
        match self.phases.get_mut(container_id) {
            None => Err(DashboardError::UnknownPanel(container_id.to_string())),
            Some(phase) if phase.is_terminal() => {
                Err(DashboardError::PanelClosed(container_id.to_string()))
            }
            Some(phase) => {
                *phase = outcome;
                Ok(())
            }
        }
    }

    /// Current phase of a panel, if registered.
    pub fn phase(&self, container_id: &str) -> Option<PanelPhase> {
        self.phases.get(container_id).copied()
    }

    /// Whether every registered panel has reached a terminal phase.
    pub fn all_settled(&self) -> bool {
        self.phases.values().all(PanelPhase::is_terminal)
    }
}

/// Timing context for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Mark panel start.
    pub fn mark_panel_start(&mut self, panel: &str) {
        self.mark(&format!("panel_{}_start", panel));
    }

    /// Mark panel sent.
    pub fn mark_panel_sent(&mut self, panel: &str) {
        self.mark(&format!("panel_{}_sent", panel));
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get time to shell flush.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.marks
            .get("shell_sent")
            .map(|t| t.duration_since(self.start))
    }

    /// Get time to first panel.
    pub fn time_to_first_panel(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(k, _)| k.starts_with("panel_") && k.ends_with("_sent"))
            .map(|(_, t)| t.duration_since(self.start))
            .min()
    }

    /// Get timing for a specific panel.
    pub fn panel_timing(&self, panel: &str) -> Option<PanelTiming> {
        let start = self.marks.get(&format!("panel_{}_start", panel))?;
        let sent = self.marks.get(&format!("panel_{}_sent", panel))?;

        Some(PanelTiming {
            name: panel.to_string(),
            start: start.duration_since(self.start),
            sent: sent.duration_since(self.start),
            duration: sent.duration_since(*start),
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing information for a panel.
#[derive(Debug, Clone)]
pub struct PanelTiming {
    /// Panel name.
    pub name: String,
    /// Time from request start to panel start.
    pub start: Duration,
    /// Time from request start to panel sent.
    pub sent: Duration,
    /// Duration of panel rendering.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    // === PanelPhase Tests ===

    #[test]
    fn test_loading_is_not_terminal() {
        assert!(!PanelPhase::Loading.is_terminal());
        assert!(PanelPhase::Rendered.is_terminal());
        assert!(PanelPhase::Error.is_terminal());
    }

    #[test]
    fn test_lifecycle_loading_to_rendered() {
        let mut lc = PanelLifecycle::new();
        lc.register("market-pulse-content");
        assert_eq!(
            lc.phase("market-pulse-content"),
            Some(PanelPhase::Loading)
        );

        lc.complete("market-pulse-content", PanelPhase::Rendered)
            .unwrap();
        assert_eq!(
            lc.phase("market-pulse-content"),
            Some(PanelPhase::Rendered)
        );
    }

    #[test]
    fn test_lifecycle_loading_to_error() {
        let mut lc = PanelLifecycle::new();
        lc.register("nte-content");
        lc.complete("nte-content", PanelPhase::Error).unwrap();
        assert_eq!(lc.phase("nte-content"), Some(PanelPhase::Error));
    }

    #[test]
    fn test_lifecycle_terminal_states_reject_second_completion() {
        let mut lc = PanelLifecycle::new();
        lc.register("narratives-content");
        lc.complete("narratives-content", PanelPhase::Rendered)
            .unwrap();

        assert!(lc
            .complete("narratives-content", PanelPhase::Rendered)
            .is_err());
        assert!(lc
            .complete("narratives-content", PanelPhase::Error)
            .is_err());
        // Phase unchanged
        assert_eq!(
            lc.phase("narratives-content"),
            Some(PanelPhase::Rendered)
        );
    }

    #[test]
    fn test_lifecycle_rejects_revert_to_loading() {
        let mut lc = PanelLifecycle::new();
        lc.register("whale-watcher-content");
        assert!(lc
            .complete("whale-watcher-content", PanelPhase::Loading)
            .is_err());
    }

    #[test]
    fn test_lifecycle_unknown_panel() {
        let mut lc = PanelLifecycle::new();
        assert!(lc.complete("missing", PanelPhase::Rendered).is_err());
    }

    #[test]
    fn test_lifecycle_all_settled() {
        let mut lc = PanelLifecycle::new();
        lc.register("a");
        lc.register("b");
        assert!(!lc.all_settled());

        lc.complete("a", PanelPhase::Rendered).unwrap();
        assert!(!lc.all_settled());

        lc.complete("b", PanelPhase::Error).unwrap();
        assert!(lc.all_settled());
    }

    // === TimingContext Tests ===

    #[test]
    fn test_timing_panel_marks() {
        let mut timing = TimingContext::new();
        timing.mark_panel_start("alpha-radar");
        timing.mark_panel_sent("alpha-radar");

        let t = timing.panel_timing("alpha-radar").unwrap();
        assert_eq!(t.name, "alpha-radar");
        assert!(t.sent >= t.start);
    }

    #[test]
    fn test_timing_first_panel() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_first_panel().is_none());

        timing.mark_panel_start("defi-yield");
        timing.mark_panel_sent("defi-yield");
        assert!(timing.time_to_first_panel().is_some());
    }
}
