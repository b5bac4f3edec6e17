//! DeFi yield panel renderer.

use dash_sdk::dash_data::FeedKind;

use crate::data::{Snapshot, YieldPool};
use crate::format::format_grouped;

use super::html_escape;

/// Render the yield-pool ranking fragment: top 5 pools.
pub fn render_defi_yield(snapshot: &Snapshot<YieldPool>) -> String {
    let top: Vec<&YieldPool> = snapshot.items.iter().take(5).collect();
    if top.is_empty() {
        return FeedKind::DefiYield.empty_message().to_string();
    }

    let entries: String = top
        .iter()
        .map(|pool| {
            format!(
                r#"<li>
    <strong>{symbol}</strong> en <strong>{project}</strong> ({chain})<br/>
    TVL: ${tvl} · APY: <strong>{apy:.2}%</strong> · Score: <code>{score:.1}</code>
</li>"#,
                symbol = html_escape(pool.symbol.as_deref().unwrap_or("N/A")),
                project = html_escape(pool.project.as_deref().unwrap_or("N/A")),
                chain = html_escape(pool.chain.as_deref().unwrap_or("N/A")),
                tvl = format_grouped(pool.tvl_usd),
                apy = pool.apy.unwrap_or(0.0),
                score = pool.score.unwrap_or(0.0),
            )
        })
        .collect();

    format!(r#"<ul class="db-list">{}</ul>"#, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(items: &str) -> Snapshot<YieldPool> {
        serde_json::from_str(&format!(r#"{{"items": {}}}"#, items)).unwrap()
    }

    #[test]
    fn test_empty_items_render_empty_sentence() {
        let html = render_defi_yield(&snapshot("[]"));
        assert_eq!(html, "No hay pools que cumplan los filtros de riesgo.");
    }

    #[test]
    fn test_pool_formatting() {
        let html = render_defi_yield(&snapshot(
            r#"[{"symbol": "USDC", "project": "aave-v3", "chain": "Ethereum",
                 "tvlUsd": 2500000, "apy": 4.267, "defiYieldScore": 7.84}]"#,
        ));
        assert!(html.contains("<strong>USDC</strong> en <strong>aave-v3</strong> (Ethereum)"));
        assert!(html.contains("TVL: $2,500,000"));
        assert!(html.contains("APY: <strong>4.27%</strong>"));
        assert!(html.contains("Score: <code>7.8</code>"));
    }

    #[test]
    fn test_top_five_cap() {
        let html = render_defi_yield(&snapshot(
            r#"[{"symbol": "A"}, {"symbol": "B"}, {"symbol": "C"},
                {"symbol": "D"}, {"symbol": "E"}, {"symbol": "F"}]"#,
        ));
        assert_eq!(html.matches("<li>").count(), 5);
    }

    #[test]
    fn test_pool_without_optional_fields() {
        let html = render_defi_yield(&snapshot("[{}]"));
        assert!(html.contains("<strong>N/A</strong>"));
        assert!(html.contains("APY: <strong>0.00%</strong>"));
        assert!(html.contains("TVL: $0"));
    }
}
