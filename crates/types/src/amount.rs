//! Conversions between human-decimal amounts and raw integer token amounts

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_TOKEN_DECIMALS;
use crate::errors::ZapError;
use crate::token::{is_quantum_sol_version_sol, quantum_sol_version_wsol, SplToken};
use crate::ZapResult;

/// Raw integer amount of a specific token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    pub token: SplToken,
    /// Amount in the token's smallest unit
    pub raw: u64,
}

impl TokenAmount {
    pub fn new(token: SplToken, raw: u64) -> Self {
        Self { token, raw }
    }

    /// Decimal form of the raw amount
    pub fn to_ui_amount(&self) -> Decimal {
        to_ui_amount(self.raw, self.token.decimals)
    }

    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }
}

/// Convert an amount into a [`TokenAmount`].
///
/// With `already_decimaled` the input is in whole tokens (`1.5` SOL) and is
/// scaled by `10^decimals`; digits below the token precision are truncated.
/// Without it the input is already a raw integer amount.
pub fn to_token_amount(token: &SplToken, amount: Decimal, already_decimaled: bool) -> ZapResult<TokenAmount> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ZapError::invalid_amount(&amount.to_string(), "negative"));
    }
    if token.decimals > MAX_TOKEN_DECIMALS {
        return Err(ZapError::AmountOverflow {
            amount: amount.to_string(),
            decimals: token.decimals,
        });
    }

    let scaled = if already_decimaled {
        let factor = Decimal::from(10u64.pow(u32::from(token.decimals)));
        amount.checked_mul(factor).ok_or_else(|| ZapError::AmountOverflow {
            amount: amount.to_string(),
            decimals: token.decimals,
        })?
    } else {
        amount
    };

    let raw = scaled.trunc().to_u64().ok_or_else(|| ZapError::AmountOverflow {
        amount: amount.to_string(),
        decimals: token.decimals,
    })?;

    Ok(TokenAmount::new(token.clone(), raw))
}

/// Raw integer amount back to whole tokens, keeping the token precision as scale
pub fn to_ui_amount(raw: u64, decimals: u8) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(raw), u32::from(decimals))
}

/// SDKs only know wrapped SOL; collapse the native variant before handing an amount over
pub fn de_ui_token_amount(amount: &TokenAmount) -> TokenAmount {
    if is_quantum_sol_version_sol(&amount.token) {
        TokenAmount::new(quantum_sol_version_wsol(), amount.raw)
    } else {
        amount.clone()
    }
}

/// Strictly greater than zero
pub fn is_positive(amount: &Decimal) -> bool {
    amount.is_sign_positive() && !amount.is_zero()
}

/// Parse a user- or URL-supplied decimal string. Empty strings are `None`.
pub fn parse_ui_amount(value: &str) -> ZapResult<Option<Decimal>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Decimal>()
        .map(Some)
        .map_err(|e| ZapError::invalid_amount(trimmed, &e.to_string()))
}
