//! Ranked-list payload models for the five ranking feeds.

use serde::Deserialize;

/// One token-screening ranking entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlphaRadarEntry {
    #[serde(default, alias = "symbol")]
    pub token_symbol: Option<String>,
    #[serde(default, alias = "chain")]
    pub chain_id: Option<String>,
    #[serde(default, alias = "alpha_score")]
    pub score: Option<f64>,
    #[serde(default)]
    pub fdv_usd: Option<f64>,
    #[serde(default)]
    pub liquidity_usd: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
}

/// One yield-pool ranking entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YieldPool {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default, rename = "tvlUsd")]
    pub tvl_usd: Option<f64>,
    #[serde(default)]
    pub apy: Option<f64>,
    #[serde(default, alias = "defiYieldScore")]
    pub score: Option<f64>,
}

/// One newly listed token entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTokenEntry {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub alpha_score: Option<f64>,
    #[serde(default)]
    pub liquidity_usd: Option<f64>,
    #[serde(default)]
    pub volume_24h_usd: Option<f64>,
}

/// One large-transfer entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhaleTransfer {
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub usd_value: Option<f64>,
    #[serde(default)]
    pub wallet_label: Option<String>,
    #[serde(default)]
    pub wallet: Option<String>,
}

impl WhaleTransfer {
    /// Wallet label, falling back to a truncated address, then `N/A`.
    pub fn wallet_display(&self) -> String {
        if let Some(label) = self.wallet_label.as_deref().filter(|l| !l.is_empty()) {
            return label.to_string();
        }
        match self.wallet.as_deref() {
            Some(addr) if !addr.is_empty() => {
                let prefix: String = addr.chars().take(6).collect();
                format!("{}...", prefix)
            }
            _ => "N/A".to_string(),
        }
    }
}

/// One narrative ranking entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Narrative {
    #[serde(default, alias = "narrative")]
    pub title: Option<String>,
    #[serde(default, alias = "score")]
    pub total_score: Option<f64>,
    /// Upstream emits this as a number or a string, so it stays loose.
    #[serde(default, alias = "count")]
    pub frequency: Option<serde_json::Value>,
}

impl Narrative {
    /// Frequency for display: number or string, `N/A` otherwise.
    pub fn frequency_display(&self) -> String {
        match &self.frequency {
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
            _ => "N/A".to_string(),
        }
    }
}
