//! Shared fixtures and recording collaborators for the zap integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::Transaction};
use std::sync::{Arc, Mutex};
use zap_sdk::services::{
    AddLiquidityRequest, BuiltTransaction, LiquiditySdk, Notifier, TokenList,
    TransactionCollector, TxHistoryInfo, WalletSnapshot,
};
use zap_sdk::zap_types::{PoolJsonInfo, SplToken, ZapError, ZapResult};
use zap_sdk::AppContext;

pub fn token(symbol: &str, decimals: u8) -> SplToken {
    SplToken::new(Pubkey::new_unique(), symbol, symbol, decimals)
}

/// Pool with every address filled in, so it converts into pool keys
pub fn full_pool(id: &Pubkey, base: &SplToken, quote: &SplToken) -> PoolJsonInfo {
    let key = || Pubkey::new_unique().to_string();
    let mut info = PoolJsonInfo::new(&id.to_string(), &base.mint_string(), &quote.mint_string());
    info.lp_mint = key();
    info.base_decimals = base.decimals;
    info.quote_decimals = quote.decimals;
    info.lp_decimals = base.decimals;
    info.program_id = key();
    info.authority = key();
    info.open_orders = key();
    info.target_orders = key();
    info.base_vault = key();
    info.quote_vault = key();
    info.market_id = key();
    info
}

/// Context with the given tokens and pools loaded
pub fn loaded_context(
    tokens: Vec<SplToken>,
    pools: Vec<PoolJsonInfo>,
    wallet: WalletSnapshot,
) -> (AppContext, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let ctx = AppContext::new(Arc::new(TokenList::from_tokens(tokens)), Arc::new(wallet))
        .with_notifier(notifier.clone());
    if !pools.is_empty() {
        ctx.liquidity.set(|s| s.set_json_infos(pools));
    }
    (ctx, notifier)
}

pub fn empty_wallet() -> WalletSnapshot {
    WalletSnapshot::new(Pubkey::new_unique(), 0)
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub warnings: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn log_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingSdk {
    pub requests: Mutex<Vec<AddLiquidityRequest>>,
    pub fail: bool,
}

impl RecordingSdk {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LiquiditySdk for RecordingSdk {
    async fn make_add_liquidity_transaction(
        &self,
        request: AddLiquidityRequest,
    ) -> ZapResult<BuiltTransaction> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            return Err(ZapError::transaction_build("sdk offline"));
        }
        Ok(BuiltTransaction {
            transaction: Transaction::default(),
            signers: Vec::new(),
        })
    }
}

#[derive(Default)]
pub struct RecordingCollector {
    pub submitted: Mutex<Vec<TxHistoryInfo>>,
}

impl RecordingCollector {
    pub fn calls(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}

#[async_trait]
impl TransactionCollector for RecordingCollector {
    async fn submit(&self, _built: BuiltTransaction, info: TxHistoryInfo) -> ZapResult<Signature> {
        self.submitted.lock().unwrap().push(info);
        Ok(Signature::new_unique())
    }
}
