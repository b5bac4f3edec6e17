//! Feed tagging for the six dashboard snapshots.

/// Well-known dashboard feeds.
///
/// Each feed carries its snapshot resource name, its target container id, and
/// the localized copy shown for the empty and failure states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// Global market summary (market cap, BTC/ETH, sentiment, chains, movers).
    MarketPulse,
    /// Token-screening ranking.
    AlphaRadar,
    /// Yield-pool ranking.
    DefiYield,
    /// Newly listed token ranking.
    NewTokenExplorer,
    /// Large-transfer ranking.
    WhaleWatcher,
    /// Narrative ranking.
    Narratives,
}

impl FeedKind {
    /// All feeds, in bootstrap order.
    pub const ALL: [FeedKind; 6] = [
        Self::MarketPulse,
        Self::AlphaRadar,
        Self::DefiYield,
        Self::NewTokenExplorer,
        Self::WhaleWatcher,
        Self::Narratives,
    ];

    /// Stable short name of this feed.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MarketPulse => "market-pulse",
            Self::AlphaRadar => "alpha-radar",
            Self::DefiYield => "defi-yield",
            Self::NewTokenExplorer => "new-token-explorer",
            Self::WhaleWatcher => "whale-watcher",
            Self::Narratives => "narratives",
        }
    }

    /// Snapshot file name under the data base path.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::MarketPulse => "market-pulse-latest.json",
            Self::AlphaRadar => "alpha-radar-latest.json",
            Self::DefiYield => "defi-yield-latest.json",
            Self::NewTokenExplorer => "new-token-explorer-latest.json",
            Self::WhaleWatcher => "whale-watcher-latest.json",
            Self::Narratives => "narratives-ai-detector.json",
        }
    }

    /// Id of the container element this feed renders into.
    pub fn container_id(&self) -> &'static str {
        match self {
            Self::MarketPulse => "market-pulse-content",
            Self::AlphaRadar => "alpha-radar-content",
            Self::DefiYield => "defi-yield-content",
            Self::NewTokenExplorer => "nte-content",
            Self::WhaleWatcher => "whale-watcher-content",
            Self::Narratives => "narratives-content",
        }
    }

    /// Human panel title for the shell card.
    pub fn title(&self) -> &'static str {
        match self {
            Self::MarketPulse => "Market Pulse",
            Self::AlphaRadar => "Alpha Radar",
            Self::DefiYield => "DeFi Yield Scanner",
            Self::NewTokenExplorer => "New Token Explorer",
            Self::WhaleWatcher => "Whale Watcher",
            Self::Narratives => "Narrativas AI",
        }
    }

    /// Localized sentence shown when the feed has no items.
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::MarketPulse => "Sin datos",
            Self::AlphaRadar => {
                "No hay tokens con score suficiente en este último escaneo."
            }
            Self::DefiYield => "No hay pools que cumplan los filtros de riesgo.",
            Self::NewTokenExplorer => {
                "No hay nuevos tokens que pasen rug checks + score mínimo."
            }
            Self::WhaleWatcher => {
                "No se detectaron movimientos relevantes de ballenas."
            }
            Self::Narratives => "No hay narrativas detectadas en el último run.",
        }
    }

    /// Localized message when the snapshot could not be fetched.
    pub fn fetch_error_message(&self) -> String {
        format!("No se pudo cargar {}", self.resource())
    }

    /// Localized message when the snapshot fetched but failed to render.
    pub fn render_error_message(&self) -> &'static str {
        match self {
            Self::MarketPulse => "Error al renderizar Market Pulse.",
            Self::AlphaRadar => "Error al renderizar Alpha Radar.",
            Self::DefiYield => "Error al renderizar DeFi Yield Scanner.",
            Self::NewTokenExplorer => "Error al renderizar New Token Explorer.",
            Self::WhaleWatcher => "Error al renderizar Whale Watcher.",
            Self::Narratives => "Error al renderizar narrativas.",
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static descriptor for one feed: resource name plus target container.
#[derive(Debug, Clone, Copy)]
pub struct FeedDescriptor {
    pub kind: FeedKind,
    pub resource: &'static str,
    pub container_id: &'static str,
}

/// Immutable feed table, one entry per feed, fixed for the process lifetime.
pub const FEEDS: [FeedDescriptor; 6] = [
    FeedDescriptor {
        kind: FeedKind::MarketPulse,
        resource: "market-pulse-latest.json",
        container_id: "market-pulse-content",
    },
    FeedDescriptor {
        kind: FeedKind::AlphaRadar,
        resource: "alpha-radar-latest.json",
        container_id: "alpha-radar-content",
    },
    FeedDescriptor {
        kind: FeedKind::DefiYield,
        resource: "defi-yield-latest.json",
        container_id: "defi-yield-content",
    },
    FeedDescriptor {
        kind: FeedKind::NewTokenExplorer,
        resource: "new-token-explorer-latest.json",
        container_id: "nte-content",
    },
    FeedDescriptor {
        kind: FeedKind::WhaleWatcher,
        resource: "whale-watcher-latest.json",
        container_id: "whale-watcher-content",
    },
    FeedDescriptor {
        kind: FeedKind::Narratives,
        resource: "narratives-ai-detector.json",
        container_id: "narratives-content",
    },
];
