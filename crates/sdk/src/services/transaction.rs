//! Transaction-building and submission collaborators

use async_trait::async_trait;
use serde::Serialize;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};
use zap_types::{PoolKeys, PoolSide, TokenAmount, ZapResult};

use super::wallet::TokenAccount;

/// Everything the SDK needs to assemble an add-liquidity transaction
#[derive(Debug, Clone, PartialEq)]
pub struct AddLiquidityRequest {
    pub pool_keys: PoolKeys,
    pub token_accounts: Vec<TokenAccount>,
    pub owner: Pubkey,
    /// Base-side amount, already collapsed to wrapped SOL where needed
    pub amount_in_a: TokenAmount,
    /// Quote-side amount
    pub amount_in_b: TokenAmount,
    pub fixed_side: PoolSide,
}

/// Unsigned transaction plus the extra keypairs that must co-sign it
#[derive(Debug)]
pub struct BuiltTransaction {
    pub transaction: Transaction,
    pub signers: Vec<Keypair>,
}

/// Display metadata for the transaction history panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxHistoryInfo {
    pub title: String,
    pub description: String,
}

/// Pool-aware transaction builder
#[async_trait]
pub trait LiquiditySdk: Send + Sync {
    async fn make_add_liquidity_transaction(
        &self,
        request: AddLiquidityRequest,
    ) -> ZapResult<BuiltTransaction>;
}

/// Signs, sends and tracks transactions
#[async_trait]
pub trait TransactionCollector: Send + Sync {
    /// Resolves once the transaction has been sent successfully
    async fn submit(&self, built: BuiltTransaction, info: TxHistoryInfo) -> ZapResult<Signature>;
}
