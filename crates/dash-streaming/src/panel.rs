//! Panel markup in its three states.
//!
//! The shell carries every panel as a card whose container starts in the
//! loading state. Panels stream afterwards in completion order; each update
//! is a fragment that swaps the container's content and applies the terminal
//! state class.

use dash_core::PanelPhase;

/// Terminal content for one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    /// Inner HTML fragment to place into the container.
    Rendered(String),
    /// Localized error sentence; the container gets the error state class.
    Error(String),
}

impl PanelContent {
    /// The lifecycle phase this content moves the panel to.
    pub fn phase(&self) -> PanelPhase {
        match self {
            Self::Rendered(_) => PanelPhase::Rendered,
            Self::Error(_) => PanelPhase::Error,
        }
    }

    /// Render the streamable update fragment for a container.
    pub fn to_stream_html(&self, container_id: &str) -> String {
        match self {
            Self::Rendered(inner) => format!(
                r#"<template id="tpl-{id}">{inner}</template>
<script>(function(){{var t=document.getElementById("tpl-{id}"),c=document.getElementById("{id}");if(!t||!c)return;c.classList.remove("db-loading");c.innerHTML=t.innerHTML;t.remove();}})();</script>"#,
                id = container_id,
                inner = inner,
            ),
            Self::Error(message) => format!(
                r#"<script>(function(){{var c=document.getElementById("{id}");if(!c)return;c.classList.remove("db-loading");c.classList.add("db-error");c.textContent="{msg}";}})();</script>"#,
                id = container_id,
                msg = js_escape(message),
            ),
        }
    }
}

/// Render a shell card for one feed: heading plus container in loading state.
pub fn loading_card(container_id: &str, title: &str) -> String {
    format!(
        r#"<section class="db-card" data-panel="{id}">
    <h2 class="db-card-title">{title}</h2>
    <div id="{id}" class="db-panel db-loading">Cargando…</div>
</section>"#,
        id = container_id,
        title = title,
    )
}

/// Render a streamed text update for a plain indicator element.
///
/// Used for the "last updated" line; when the timestamp is unparseable the
/// orchestrator sends nothing and the indicator keeps its prior text.
pub fn text_update(element_id: &str, text: &str) -> String {
    format!(
        r#"<script>(function(){{var e=document.getElementById("{id}");if(!e)return;e.textContent="{text}";}})();</script>"#,
        id = element_id,
        text = js_escape(text),
    )
}

/// Escape a string for embedding in a double-quoted JS literal.
fn js_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            _ => out.push(c),
        }
    }
    out
}
