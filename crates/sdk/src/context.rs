//! Application context owning the stores and collaborator handles

use std::sync::Arc;

use crate::services::{Notifier, TokenRegistry, TracingNotifier, Wallet};
use crate::state::{AppSettings, LiquidityState, ZapState};
use crate::store::Store;

/// Everything the zap components read from or write to.
///
/// Cloning is cheap; every clone shares the same stores.
#[derive(Clone)]
pub struct AppContext {
    pub zap: Store<ZapState>,
    pub liquidity: Store<LiquidityState>,
    pub app_settings: Store<AppSettings>,
    pub tokens: Arc<dyn TokenRegistry>,
    pub wallet: Arc<dyn Wallet>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Fresh stores with default values; warnings go to the log
    pub fn new(tokens: Arc<dyn TokenRegistry>, wallet: Arc<dyn Wallet>) -> Self {
        Self {
            zap: Store::default(),
            liquidity: Store::default(),
            app_settings: Store::default(),
            tokens,
            wallet,
            notifier: Arc::new(TracingNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_settings(self, settings: AppSettings) -> Self {
        self.app_settings.set(|s| *s = settings);
        self
    }

    /// Pool list and token list have both loaded
    pub fn dependent_data_loaded(&self) -> bool {
        !self.liquidity.get().json_infos.is_empty() && self.tokens.token_count() > 0
    }
}
