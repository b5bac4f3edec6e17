//! Snapshot payload models.
//!
//! The snapshot writer deposits loosely-structured documents; every field
//! here is optional with an alias chain where the upstream bots disagree on
//! naming. Defaulting happens at ingestion so the renderers never touch raw
//! JSON.

mod market;
mod rankings;

pub use market::{
    AssetPrice, ChainList, ChainTvl, CoinList, CoinMove, FearGreedIndex, GlobalStats,
    MarketPulseItem, MarketSummary,
};
pub use rankings::{AlphaRadarEntry, Narrative, NewTokenEntry, WhaleTransfer, YieldPool};

use serde::Deserialize;

/// Envelope every bot snapshot shares: `{bot, generated_at, items, meta}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot<T> {
    #[serde(default)]
    pub bot: Option<String>,
    /// Generation timestamp; older snapshots used `last_updated`.
    #[serde(default, alias = "last_updated")]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub meta: serde_json::Value,
}
