//! Alpha radar panel renderer.

use dash_sdk::dash_data::FeedKind;

use crate::data::{AlphaRadarEntry, Snapshot};
use crate::format::format_grouped;

use super::html_escape;

/// Render the token-screening ranking fragment: top 5 by scan order.
pub fn render_alpha_radar(snapshot: &Snapshot<AlphaRadarEntry>) -> String {
    let top: Vec<&AlphaRadarEntry> = snapshot.items.iter().take(5).collect();
    if top.is_empty() {
        return FeedKind::AlphaRadar.empty_message().to_string();
    }

    let entries: String = top
        .iter()
        .enumerate()
        .map(|(idx, token)| {
            format!(
                r#"<li>
    <strong>#{rank} {symbol}</strong><br/>
    Chain: <code>{chain}</code> · Score: <strong>{score:.2}</strong><br/>
    MC: ${fdv} · Liq: ${liquidity} · Vol 24h: ${volume}
</li>"#,
                rank = idx + 1,
                symbol = html_escape(token.token_symbol.as_deref().unwrap_or("N/A")),
                chain = html_escape(token.chain_id.as_deref().unwrap_or("N/A")),
                score = token.score.unwrap_or(0.0),
                fdv = format_grouped(token.fdv_usd),
                liquidity = format_grouped(token.liquidity_usd),
                volume = format_grouped(token.volume_24h),
            )
        })
        .collect();

    format!(r#"<ul class="db-list">{}</ul>"#, entries)
}
