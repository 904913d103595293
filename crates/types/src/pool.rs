//! Liquidity pool descriptors and SDK quote passthrough shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::errors::ZapError;
use crate::token::pubkey_string;
use crate::ZapResult;

// ============================================================================
// Pool JSON Info
// ============================================================================

/// Pool entry as published in the liquidity JSON list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolJsonInfo {
    /// Pool (AMM) id
    pub id: String,
    pub base_mint: String,
    pub quote_mint: String,
    #[serde(default)]
    pub lp_mint: String,
    #[serde(default)]
    pub base_decimals: u8,
    #[serde(default)]
    pub quote_decimals: u8,
    #[serde(default)]
    pub lp_decimals: u8,
    #[serde(default)]
    pub version: u8,
    #[serde(default)]
    pub program_id: String,
    #[serde(default)]
    pub authority: String,
    #[serde(default)]
    pub open_orders: String,
    #[serde(default)]
    pub target_orders: String,
    #[serde(default)]
    pub base_vault: String,
    #[serde(default)]
    pub quote_vault: String,
    #[serde(default)]
    pub market_id: String,
}

impl PoolJsonInfo {
    /// Pool whose only known fields are the id and the mint pair
    pub fn new(id: &str, base_mint: &str, quote_mint: &str) -> Self {
        Self {
            id: id.to_string(),
            base_mint: base_mint.to_string(),
            quote_mint: quote_mint.to_string(),
            lp_mint: String::new(),
            base_decimals: 0,
            quote_decimals: 0,
            lp_decimals: 0,
            version: 4,
            program_id: String::new(),
            authority: String::new(),
            open_orders: String::new(),
            target_orders: String::new(),
            base_vault: String::new(),
            quote_vault: String::new(),
            market_id: String::new(),
        }
    }

    /// Order-insensitive match on the mint pair
    pub fn has_mint_pair(&self, mint_a: &str, mint_b: &str) -> bool {
        (self.base_mint == mint_a && self.quote_mint == mint_b)
            || (self.base_mint == mint_b && self.quote_mint == mint_a)
    }

    /// Parse every address into [`PoolKeys`]
    pub fn to_pool_keys(&self) -> ZapResult<PoolKeys> {
        Ok(PoolKeys {
            id: parse_key("id", &self.id)?,
            base_mint: parse_key("baseMint", &self.base_mint)?,
            quote_mint: parse_key("quoteMint", &self.quote_mint)?,
            lp_mint: parse_key("lpMint", &self.lp_mint)?,
            base_decimals: self.base_decimals,
            quote_decimals: self.quote_decimals,
            lp_decimals: self.lp_decimals,
            version: self.version,
            program_id: parse_key("programId", &self.program_id)?,
            authority: parse_key("authority", &self.authority)?,
            open_orders: parse_key("openOrders", &self.open_orders)?,
            target_orders: parse_key("targetOrders", &self.target_orders)?,
            base_vault: parse_key("baseVault", &self.base_vault)?,
            quote_vault: parse_key("quoteVault", &self.quote_vault)?,
            market_id: parse_key("marketId", &self.market_id)?,
        })
    }
}

fn parse_key(field: &str, value: &str) -> ZapResult<Pubkey> {
    Pubkey::from_str(value).map_err(|_| ZapError::invalid_public_key(field, value))
}

/// Typed pool keys handed to the transaction-building service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolKeys {
    #[serde(with = "pubkey_string")]
    pub id: Pubkey,
    #[serde(with = "pubkey_string")]
    pub base_mint: Pubkey,
    #[serde(with = "pubkey_string")]
    pub quote_mint: Pubkey,
    #[serde(with = "pubkey_string")]
    pub lp_mint: Pubkey,
    pub base_decimals: u8,
    pub quote_decimals: u8,
    pub lp_decimals: u8,
    pub version: u8,
    #[serde(with = "pubkey_string")]
    pub program_id: Pubkey,
    #[serde(with = "pubkey_string")]
    pub authority: Pubkey,
    #[serde(with = "pubkey_string")]
    pub open_orders: Pubkey,
    #[serde(with = "pubkey_string")]
    pub target_orders: Pubkey,
    #[serde(with = "pubkey_string")]
    pub base_vault: Pubkey,
    #[serde(with = "pubkey_string")]
    pub quote_vault: Pubkey,
    #[serde(with = "pubkey_string")]
    pub market_id: Pubkey,
}

// ============================================================================
// Quote Passthrough
// ============================================================================

/// Price of `base` in units of `quote`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    #[serde(with = "pubkey_string")]
    pub base: Pubkey,
    #[serde(with = "pubkey_string")]
    pub quote: Pubkey,
    pub value: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteType {
    Amm,
    Route,
}

/// One hop of a quoted route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub pool_id: String,
    pub input_mint: String,
    pub output_mint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_pool() -> PoolJsonInfo {
        let key = || Pubkey::new_unique().to_string();
        PoolJsonInfo {
            id: key(),
            base_mint: key(),
            quote_mint: key(),
            lp_mint: key(),
            base_decimals: 9,
            quote_decimals: 6,
            lp_decimals: 9,
            version: 4,
            program_id: key(),
            authority: key(),
            open_orders: key(),
            target_orders: key(),
            base_vault: key(),
            quote_vault: key(),
            market_id: key(),
        }
    }

    #[test]
    fn test_has_mint_pair_is_order_insensitive() {
        let pool = PoolJsonInfo::new("pool", "base", "quote");
        assert!(pool.has_mint_pair("base", "quote"));
        assert!(pool.has_mint_pair("quote", "base"));
        assert!(!pool.has_mint_pair("base", "base"));
    }

    #[test]
    fn test_to_pool_keys() {
        let pool = full_pool();
        let keys = pool.to_pool_keys().unwrap();
        assert_eq!(keys.id.to_string(), pool.id);
        assert_eq!(keys.quote_vault.to_string(), pool.quote_vault);
        assert_eq!(keys.base_decimals, 9);
    }

    #[test]
    fn test_to_pool_keys_names_the_bad_field() {
        let mut pool = full_pool();
        pool.authority = "not-a-key".to_string();
        assert_eq!(
            pool.to_pool_keys(),
            Err(ZapError::invalid_public_key("authority", "not-a-key"))
        );
    }

    #[test]
    fn test_json_list_shape() {
        let json = r#"[{"id":"A","baseMint":"B","quoteMint":"Q"}]"#;
        let pools: Vec<PoolJsonInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(pools[0].base_mint, "B");
        assert_eq!(pools[0].lp_mint, "");
    }
}
