//! Price history for the pool backing the selected zap pair

use std::sync::Arc;
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::services::PriceHistorySource;
use crate::state::KlineEntry;

/// Inputs whose change triggers a refetch
#[derive(Debug, Clone, PartialEq)]
struct KlineDeps {
    coin1_mint: Option<String>,
    coin2_mint: Option<String>,
    pools_revision: u64,
    refresh_count: u64,
}

pub struct KlineDataFetcher {
    source: Arc<dyn PriceHistorySource>,
    last_deps: Option<KlineDeps>,
}

impl KlineDataFetcher {
    pub fn new(source: Arc<dyn PriceHistorySource>) -> Self {
        Self {
            source,
            last_deps: None,
        }
    }

    fn deps(ctx: &AppContext) -> KlineDeps {
        let zap = ctx.zap.get();
        KlineDeps {
            coin1_mint: zap.coin1.as_ref().map(|c| c.mint_string()),
            coin2_mint: zap.coin2.as_ref().map(|c| c.mint_string()),
            pools_revision: ctx.liquidity.get().json_infos_revision,
            refresh_count: zap.refresh_count,
        }
    }

    /// Fetch when the coin pair, pool list or refresh counter changed.
    ///
    /// Returns the pool id whose entry was written.
    pub async fn refresh_if_changed(&mut self, ctx: &AppContext) -> Option<String> {
        let deps = Self::deps(ctx);
        if self.last_deps.as_ref() == Some(&deps) {
            return None;
        }
        self.last_deps = Some(deps);
        self.fetch(ctx).await
    }

    /// Fetch unconditionally
    pub async fn fetch(&self, ctx: &AppContext) -> Option<String> {
        let (mint1, mint2) = {
            let zap = ctx.zap.get();
            let coin1 = zap.coin1.as_ref()?;
            let coin2 = zap.coin2.as_ref()?;
            (coin1.balance_mint().to_string(), coin2.balance_mint().to_string())
        };

        let pool_id = ctx
            .liquidity
            .get()
            .find_by_mint_pair(&mint1, &mint2)
            .map(|info| info.id.clone());
        let Some(pool_id) = pool_id else {
            debug!(%mint1, %mint2, "no pool for zap pair, skipping kline fetch");
            return None;
        };

        match self.source.fetch_prices(&pool_id).await {
            Ok(price_data) => {
                let entry = KlineEntry {
                    price_data,
                    update_time: chrono::Utc::now().timestamp_millis(),
                };
                debug!(pool = %pool_id, samples = entry.price_data.len(), "kline data updated");
                ctx.zap.set(|s| {
                    s.kline_data.insert(pool_id.clone(), entry);
                });
                Some(pool_id)
            }
            Err(e) => {
                warn!(pool = %pool_id, error = %e, "failed to fetch kline data");
                None
            }
        }
    }
}
