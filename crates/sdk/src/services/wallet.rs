//! Wallet inventory and balance checks

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use zap_types::{pubkey_string, TokenAmount, WSOL_MINT};

/// One SPL token account owned by the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccount {
    #[serde(with = "pubkey_string")]
    pub pubkey: Pubkey,
    #[serde(with = "pubkey_string")]
    pub mint: Pubkey,
    /// Raw amount
    pub amount: u64,
}

/// Connected wallet
pub trait Wallet: Send + Sync {
    fn owner(&self) -> Pubkey;

    fn token_accounts(&self) -> Vec<TokenAccount>;

    /// Whether the wallet holds at least `amount.raw` of the token
    fn has_enough_balance(&self, amount: &TokenAmount) -> bool;
}

/// Wallet state captured at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    #[serde(with = "pubkey_string")]
    pub owner: Pubkey,
    pub token_accounts: Vec<TokenAccount>,
    /// Native lamports outside any token account
    pub lamports: u64,
}

impl WalletSnapshot {
    pub fn new(owner: Pubkey, lamports: u64) -> Self {
        Self {
            owner,
            token_accounts: Vec::new(),
            lamports,
        }
    }

    pub fn with_account(mut self, mint: Pubkey, amount: u64) -> Self {
        self.token_accounts.push(TokenAccount {
            pubkey: Pubkey::new_unique(),
            mint,
            amount,
        });
        self
    }

    /// Total raw balance for a mint. Native lamports count toward wrapped SOL.
    pub fn balance_of(&self, mint: &Pubkey) -> u64 {
        let in_accounts: u64 = self
            .token_accounts
            .iter()
            .filter(|account| account.mint == *mint)
            .fold(0u64, |acc, account| acc.saturating_add(account.amount));
        if *mint == WSOL_MINT {
            in_accounts.saturating_add(self.lamports)
        } else {
            in_accounts
        }
    }
}

impl Wallet for WalletSnapshot {
    fn owner(&self) -> Pubkey {
        self.owner
    }

    fn token_accounts(&self) -> Vec<TokenAccount> {
        self.token_accounts.clone()
    }

    fn has_enough_balance(&self, amount: &TokenAmount) -> bool {
        self.balance_of(&amount.token.balance_mint()) >= amount.raw
    }
}
