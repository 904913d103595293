//! Well-known mints and shared constants for the zap state layer

use solana_sdk::{pubkey, pubkey::Pubkey};

// ============================================================================
// Mint Constants
// ============================================================================

/// Native SOL has no mint account; the all-zero key stands in for it
pub const SOL_MINT: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// Wrapped SOL mint
pub const WSOL_MINT: Pubkey = pubkey!("So11111111111111111111111111111111111111112");

/// RAY mint, the default lower-box coin
pub const RAY_MINT: Pubkey = pubkey!("4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R");

/// URL spelling of the native SOL variant
pub const SOL_URL_MINT: &str = "sol";

/// SOL decimals (lamports per SOL = 10^9)
pub const SOL_DECIMALS: u8 = 9;

// ============================================================================
// URL Query Keys
// ============================================================================

/// Pool id query key
pub const QUERY_AMM_ID: &str = "ammId";

/// Lower-case pool id query key accepted as a fallback
pub const QUERY_AMM_ID_LOWER: &str = "ammid";

/// Upper-box mint
pub const QUERY_INPUT_CURRENCY: &str = "inputCurrency";

/// Lower-box mint
pub const QUERY_OUTPUT_CURRENCY: &str = "outputCurrency";

/// Upper-box amount
pub const QUERY_INPUT_AMOUNT: &str = "inputAmount";

/// Lower-box amount
pub const QUERY_OUTPUT_AMOUNT: &str = "outputAmount";

/// Fixed side (`in` | `out`)
pub const QUERY_FIXED: &str = "fixed";

// ============================================================================
// Defaults
// ============================================================================

/// Default pathname of the zap view
pub const DEFAULT_ZAP_PATH: &str = "/zap";

/// Default URL mirror throttle (milliseconds)
pub const DEFAULT_URL_THROTTLE_MS: u64 = 100;

/// Upper bound accepted for the URL mirror throttle (milliseconds)
pub const MAX_URL_THROTTLE_MS: u64 = 10_000;

/// Largest token precision we convert (10^19 overflows u64)
pub const MAX_TOKEN_DECIMALS: u8 = 18;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_constants() {
        assert_eq!(SOL_MINT, Pubkey::default());
        assert_eq!(SOL_MINT.to_string(), "11111111111111111111111111111111");
        assert_ne!(SOL_MINT, WSOL_MINT);
        assert_eq!(WSOL_MINT.to_string(), "So11111111111111111111111111111111111111112");
    }

    #[test]
    fn test_default_throttle_in_bounds() {
        assert!(DEFAULT_URL_THROTTLE_MS > 0);
        assert!(DEFAULT_URL_THROTTLE_MS <= MAX_URL_THROTTLE_MS);
    }
}
