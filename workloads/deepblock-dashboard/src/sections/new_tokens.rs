//! New token explorer panel renderer.

use dash_sdk::dash_data::FeedKind;

use crate::data::{NewTokenEntry, Snapshot};
use crate::format::format_grouped;

use super::html_escape;

/// Render the newly listed token ranking fragment: top 5 entries.
pub fn render_new_tokens(snapshot: &Snapshot<NewTokenEntry>) -> String {
    let top: Vec<&NewTokenEntry> = snapshot.items.iter().take(5).collect();
    if top.is_empty() {
        return FeedKind::NewTokenExplorer.empty_message().to_string();
    }

    let entries: String = top
        .iter()
        .map(|token| {
            format!(
                r#"<li>
    <strong>{symbol}</strong> ({chain}) · Score: <code>{score:.1}</code><br/>
    Liq: ${liquidity} · Vol 24h: ${volume}
</li>"#,
                symbol = html_escape(token.symbol.as_deref().unwrap_or("N/A")),
                chain = html_escape(token.chain.as_deref().unwrap_or("N/A")),
                score = token.alpha_score.unwrap_or(0.0),
                liquidity = format_grouped(token.liquidity_usd),
                volume = format_grouped(token.volume_24h_usd),
            )
        })
        .collect();

    format!(r#"<ul class="db-list">{}</ul>"#, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(items: &str) -> Snapshot<NewTokenEntry> {
        serde_json::from_str(&format!(r#"{{"items": {}}}"#, items)).unwrap()
    }

    #[test]
    fn test_empty_items_render_empty_sentence() {
        let html = render_new_tokens(&snapshot("[]"));
        assert_eq!(
            html,
            "No hay nuevos tokens que pasen rug checks + score mínimo."
        );
    }

    #[test]
    fn test_entry_formatting() {
        let html = render_new_tokens(&snapshot(
            r#"[{"symbol": "ABC", "chain": "eth", "alpha_score": 12.345,
                 "liquidity_usd": 1000000, "volume_24h_usd": 500}]"#,
        ));
        assert!(html.contains("<strong>ABC</strong> (eth)"));
        assert!(html.contains("Score: <code>12.3</code>"));
        assert!(html.contains("Liq: $1,000,000"));
        assert!(html.contains("Vol 24h: $500"));
    }

    #[test]
    fn test_top_five_cap() {
        let html = render_new_tokens(&snapshot(
            r#"[{"symbol": "A"}, {"symbol": "B"}, {"symbol": "C"},
                {"symbol": "D"}, {"symbol": "E"}, {"symbol": "F"}]"#,
        ));
        assert_eq!(html.matches("<li>").count(), 5);
        assert!(!html.contains(">F<"));
    }

    #[test]
    fn test_entry_without_score() {
        let html = render_new_tokens(&snapshot(r#"[{"symbol": "X", "chain": "sol"}]"#));
        assert!(html.contains("Score: <code>0.0</code>"));
    }
}
