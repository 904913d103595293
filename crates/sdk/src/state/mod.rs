//! Store state definitions

pub mod liquidity;
pub mod zap;

pub use liquidity::LiquidityState;
pub use zap::{KlineEntry, SlippageBound, ZapQuote, ZapState};

use serde::Serialize;

/// App-wide display settings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Keep transient zap state out of the visible URL
    pub in_clean_url_mode: bool,
}
