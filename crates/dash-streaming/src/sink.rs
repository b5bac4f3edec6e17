//! Platform-controlled streaming sink.

use std::fmt::Display;

use dash_core::{DashboardError, TimingContext};
use futures::{Sink, SinkExt};

use crate::flush::{FlushController, FlushPolicy};

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, panels can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over the underlying sink type to work with any `Sink<Vec<u8>>`
/// implementation, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    flush: FlushController,
    panels_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            flush: FlushController::default(),
            panels_sent: Vec::new(),
        }
    }

    /// Override the flush policy.
    pub fn with_flush_policy(mut self, policy: FlushPolicy) -> Self {
        self.flush = FlushController::new(policy);
        self
    }

    async fn write(&mut self, bytes: Vec<u8>, force_flush: bool) -> Result<(), DashboardError> {
        self.flush.add_bytes(bytes.len());
        self.inner
            .feed(bytes)
            .await
            .map_err(|e| DashboardError::StreamError(e.to_string()))?;

        if force_flush || self.flush.should_flush() {
            self.inner
                .flush()
                .await
                .map_err(|e| DashboardError::StreamError(e.to_string()))?;
            self.flush.reset();
        }
        Ok(())
    }

    /// Send the shell HTML. Must be called before any panels.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), DashboardError> {
        if self.state != SinkState::Initial {
            return Err(DashboardError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        let force = self.flush.policy().flush_after_shell();
        self.write(html.as_bytes().to_vec(), force).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named panel update. Shell must be sent first.
    ///
    /// Panels stream in completion order; the sink imposes no ordering of its
    /// own beyond shell-first.
    pub async fn send_panel(&mut self, name: &str, html: &str) -> Result<(), DashboardError> {
        if self.state == SinkState::Initial {
            return Err(DashboardError::ShellNotSent);
        }
        if self.state == SinkState::Completed {
            return Err(DashboardError::StreamError(
                "Sink already completed".to_string(),
            ));
        }

        self.timing.mark_panel_start(name);
        let force = self.flush.policy().flush_after_panel();
        self.write(html.as_bytes().to_vec(), force).await?;
        self.timing.mark_panel_sent(name);
        self.panels_sent.push(name.to_string());

        Ok(())
    }

    /// Send raw bytes. Shell must be sent first.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), DashboardError> {
        if self.state == SinkState::Initial {
            return Err(DashboardError::ShellNotSent);
        }
        if self.state == SinkState::Completed {
            return Err(DashboardError::StreamError(
                "Sink already completed".to_string(),
            ));
        }

        self.write(bytes, false).await
    }

    /// Complete the response.
    pub fn complete(&mut self) -> Result<(), DashboardError> {
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    /// Get the list of panels sent, in stream order.
    pub fn panels_sent(&self) -> &[String] {
        &self.panels_sent
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}
