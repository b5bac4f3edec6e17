//! Market pulse payload models.
//!
//! The market pulse snapshot mixes heterogeneous items discriminated by a
//! `type` tag. Unknown tags deserialize to `Unknown` and are skipped.

use serde::Deserialize;

/// Global market aggregates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalStats {
    #[serde(default)]
    pub total_market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume_24h: Option<f64>,
    #[serde(default)]
    pub btc_dominance: Option<f64>,
}

/// Spot price for a single asset (BTC or ETH item).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetPrice {
    #[serde(default, alias = "price_usd")]
    pub price: Option<f64>,
}

/// Fear & Greed index reading.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FearGreedIndex {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub classification: Option<String>,
}

/// One chain with its TVL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainTvl {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tvl: Option<f64>,
}

/// Chain ranking wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainList {
    #[serde(default)]
    pub chains: Vec<ChainTvl>,
}

/// One coin with its 24h move.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinMove {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub percent_change_24h: Option<f64>,
}

/// Gainer/loser wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinList {
    #[serde(default)]
    pub coins: Vec<CoinMove>,
}

/// One item of the market pulse snapshot, discriminated by `type`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarketPulseItem {
    Global(GlobalStats),
    Btc(AssetPrice),
    Eth(AssetPrice),
    FearGreed(FearGreedIndex),
    Chains(ChainList),
    Gainers(CoinList),
    Losers(CoinList),
    #[serde(other)]
    #[default]
    Unknown,
}

/// Market pulse items folded into one per-section index.
#[derive(Debug, Clone, Default)]
pub struct MarketSummary {
    pub global: Option<GlobalStats>,
    pub btc: Option<AssetPrice>,
    pub eth: Option<AssetPrice>,
    pub fear_greed: Option<FearGreedIndex>,
    pub chains: Vec<ChainTvl>,
    pub gainers: Vec<CoinMove>,
    pub losers: Vec<CoinMove>,
}

impl MarketSummary {
    /// Fold the item list by `type` tag.
    ///
    /// Duplicate tags keep the last occurrence, matching the upstream
    /// snapshot contract.
    pub fn from_items(items: &[MarketPulseItem]) -> Self {
        let mut summary = Self::default();
        for item in items {
            match item {
                MarketPulseItem::Global(g) => summary.global = Some(g.clone()),
                MarketPulseItem::Btc(p) => summary.btc = Some(p.clone()),
                MarketPulseItem::Eth(p) => summary.eth = Some(p.clone()),
                MarketPulseItem::FearGreed(f) => summary.fear_greed = Some(f.clone()),
                MarketPulseItem::Chains(c) => summary.chains = c.chains.clone(),
                MarketPulseItem::Gainers(c) => summary.gainers = c.coins.clone(),
                MarketPulseItem::Losers(c) => summary.losers = c.coins.clone(),
                MarketPulseItem::Unknown => {}
            }
        }
        summary
    }
}
