//! Default coins for empty zap boxes

use solana_sdk::pubkey::Pubkey;
use tracing::debug;
use zap_types::{quantum_sol_version_sol, SplToken, SOL_MINT};

use crate::context::AppContext;

/// Coins written by one fill pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilledCoins {
    pub coin1: Option<SplToken>,
    pub coin2: Option<SplToken>,
}

impl FilledCoins {
    pub fn is_empty(&self) -> bool {
        self.coin1.is_none() && self.coin2.is_none()
    }
}

/// Put SOL in an empty upper box and `secondary_mint` in an empty lower box.
///
/// Both boxes are read once up front, so filling coin1 doesn't influence the
/// coin2 decision. A default that would duplicate the other box is skipped.
pub fn fill_default_coins(ctx: &AppContext, secondary_mint: &Pubkey) -> FilledCoins {
    let (coin1, coin2) = {
        let zap = ctx.zap.get();
        (zap.coin1.clone(), zap.coin2.clone())
    };

    let mut filled = FilledCoins::default();

    if coin1.is_none() && coin2.as_ref().map(|c| c.mint) != Some(SOL_MINT) {
        filled.coin1 = Some(quantum_sol_version_sol());
    }
    if coin2.is_none() && coin1.as_ref().map(|c| &c.mint) != Some(secondary_mint) {
        filled.coin2 = ctx.tokens.get_token(&secondary_mint.to_string(), false);
    }

    if filled.is_empty() {
        return filled;
    }

    let (next1, next2) = (filled.coin1.clone(), filled.coin2.clone());
    if ctx.zap.set_if(|s| s.set_coin_pair(next1, next2)) {
        debug!(
            coin1 = ?filled.coin1.as_ref().map(|c| &c.symbol),
            coin2 = ?filled.coin2.as_ref().map(|c| &c.symbol),
            "filled default zap coins"
        );
        filled
    } else {
        FilledCoins::default()
    }
}

/// Re-runs the fill whenever the token list grows or shrinks
pub struct ZapInitCoinFiller {
    secondary_mint: Pubkey,
    last_token_count: Option<usize>,
}

impl ZapInitCoinFiller {
    pub fn new(secondary_mint: Pubkey) -> Self {
        Self {
            secondary_mint,
            last_token_count: None,
        }
    }

    /// Fill if the token list changed since the last run
    pub fn on_tokens_changed(&mut self, ctx: &AppContext) -> Option<FilledCoins> {
        let token_count = ctx.tokens.token_count();
        if self.last_token_count == Some(token_count) {
            return None;
        }
        self.last_token_count = Some(token_count);
        Some(fill_default_coins(ctx, &self.secondary_mint))
    }
}
