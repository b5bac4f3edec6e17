//! Whale watcher panel renderer.

use dash_sdk::dash_data::FeedKind;

use crate::data::{Snapshot, WhaleTransfer};
use crate::format::format_grouped;

use super::html_escape;

/// Render the large-transfer ranking fragment: top 5 movements.
pub fn render_whale_watcher(snapshot: &Snapshot<WhaleTransfer>) -> String {
    let top: Vec<&WhaleTransfer> = snapshot.items.iter().take(5).collect();
    if top.is_empty() {
        return FeedKind::WhaleWatcher.empty_message().to_string();
    }

    let entries: String = top
        .iter()
        .map(|transfer| {
            format!(
                r#"<li>
    <strong>{direction}</strong> · {symbol} en {chain}<br/>
    Size: ${size} · Wallet: {wallet}
</li>"#,
                direction = html_escape(
                    &transfer
                        .direction
                        .as_deref()
                        .unwrap_or("")
                        .to_uppercase()
                ),
                symbol = html_escape(transfer.token_symbol.as_deref().unwrap_or("N/A")),
                chain = html_escape(transfer.chain.as_deref().unwrap_or("N/A")),
                size = format_grouped(transfer.usd_value),
                wallet = html_escape(&transfer.wallet_display()),
            )
        })
        .collect();

    format!(r#"<ul class="db-list">{}</ul>"#, entries)
}
