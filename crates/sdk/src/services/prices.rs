//! Chart price history

use async_trait::async_trait;
use zap_types::ZapResult;

/// Source of recent price samples for a market
#[async_trait]
pub trait PriceHistorySource: Send + Sync {
    /// Price samples, oldest first
    async fn fetch_prices(&self, market_id: &str) -> ZapResult<Vec<f64>>;
}
