//! Narratives panel renderer.

use dash_sdk::dash_data::FeedKind;

use crate::data::{Narrative, Snapshot};

use super::html_escape;

/// Render the narrative ranking fragment: top 4 narratives.
pub fn render_narratives(snapshot: &Snapshot<Narrative>) -> String {
    let top: Vec<&Narrative> = snapshot.items.iter().take(4).collect();
    if top.is_empty() {
        return FeedKind::Narratives.empty_message().to_string();
    }

    let entries: String = top
        .iter()
        .map(|narrative| {
            format!(
                r#"<li>
    <strong>{title}</strong><br/>
    Score: <code>{score:.1}</code> · Frecuencia: {frequency}
</li>"#,
                title = html_escape(narrative.title.as_deref().unwrap_or("N/A")),
                score = narrative.total_score.unwrap_or(0.0),
                frequency = html_escape(&narrative.frequency_display()),
            )
        })
        .collect();

    format!(r#"<ul class="db-list">{}</ul>"#, entries)
}
