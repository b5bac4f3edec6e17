//! Market pulse panel renderer.
//!
//! The only renderer with a secondary indexing step: items are classified by
//! their `type` tag into a `MarketSummary` before any section is formatted.

use crate::data::{ChainTvl, CoinMove, MarketPulseItem, MarketSummary, Snapshot};
use crate::format::{abbreviate_usd, format_percent};

use super::html_escape;

/// Render the market pulse panel fragment.
pub fn render_market_pulse(snapshot: &Snapshot<MarketPulseItem>) -> String {
    let summary = MarketSummary::from_items(&snapshot.items);

    let global = summary.global.unwrap_or_default();
    let btc = summary.btc.unwrap_or_default();
    let eth = summary.eth.unwrap_or_default();

    let fear_text = match &summary.fear_greed {
        Some(fear) => match fear.value {
            Some(value) => format!(
                "{} – {}",
                value,
                html_escape(fear.classification.as_deref().unwrap_or("N/A"))
            ),
            None => "N/A".to_string(),
        },
        None => "N/A".to_string(),
    };

    format!(
        r#"<div class="db-section">
    <div class="db-badge">🌐 Mercado global</div>
    <div>Market Cap: <strong>${market_cap}</strong></div>
    <div>Volumen 24h: <strong>${volume}</strong></div>
    <div>Dominancia BTC: <strong>{dominance}</strong></div>
</div>
<div class="db-section">
    <div class="db-badge">🪙 BTC / ETH</div>
    <div>BTC: <strong>${btc}</strong></div>
    <div>ETH: <strong>${eth}</strong></div>
</div>
<div class="db-section">
    <div class="db-badge">📉 Sentimiento</div>
    <div>Fear &amp; Greed Index: <strong>{fear}</strong></div>
</div>
<div class="db-section">
    <div class="db-badge">⛓ Top cadenas por TVL</div>
    <ul class="db-list">{chains}</ul>
</div>
<div class="db-section">
    <div class="db-badge">📈 Gainers / 📉 Losers (24h)</div>
    <div class="db-movers">
        <div class="db-movers-col">
            <strong>Gainers</strong>
            <ul class="db-list">{gainers}</ul>
        </div>
        <div class="db-movers-col">
            <strong>Losers</strong>
            <ul class="db-list">{losers}</ul>
        </div>
    </div>
</div>"#,
        market_cap = abbreviate_usd(global.total_market_cap),
        volume = abbreviate_usd(global.total_volume_24h),
        dominance = format_percent(global.btc_dominance),
        btc = abbreviate_usd(btc.price),
        eth = abbreviate_usd(eth.price),
        fear = fear_text,
        chains = render_chains(&summary.chains),
        gainers = render_movers(&summary.gainers),
        losers = render_movers(&summary.losers),
    )
}

fn render_chains(chains: &[ChainTvl]) -> String {
    if chains.is_empty() {
        return "<li>Sin datos</li>".to_string();
    }
    chains
        .iter()
        .take(5)
        .map(|chain| {
            format!(
                "<li>{} – TVL: <strong>${}</strong></li>",
                html_escape(chain.name.as_deref().unwrap_or("N/A")),
                abbreviate_usd(chain.tvl)
            )
        })
        .collect()
}

fn render_movers(coins: &[CoinMove]) -> String {
    if coins.is_empty() {
        return "<li>Sin datos</li>".to_string();
    }
    coins
        .iter()
        .take(3)
        .map(|coin| {
            format!(
                "<li>{} – {}</li>",
                html_escape(coin.symbol.as_deref().unwrap_or("N/A")),
                format_percent(coin.percent_change_24h)
            )
        })
        .collect()
}
