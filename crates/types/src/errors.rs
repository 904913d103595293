use thiserror::Error;

use crate::side::CoinSlot;

// ============================================================================
// Main Error Enum
// ============================================================================

/// Error enum shared by the zap stores, URL sync and transaction builder
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZapError {
    // ========================================================================
    // Add-Liquidity Preconditions
    // ========================================================================

    /// Neither an explicit pool id nor a current selection resolved
    #[error("can't find liquidity pool")]
    PoolNotFound { amm_id: Option<String> },

    /// A coin box is empty
    #[error("select a coin in {} box", .slot.box_name())]
    CoinNotSelected { slot: CoinSlot },

    /// Both boxes hold the same mint
    #[error("should not select same mint")]
    SameMint { mint: String },

    /// Amount missing, zero or negative
    #[error("should input {} amount larger than 0", .slot.as_str())]
    NonPositiveAmount { slot: CoinSlot },

    /// Wallet cannot cover the converted raw amount
    #[error("not enough {symbol}")]
    InsufficientBalance { symbol: String, required: u64 },

    // ========================================================================
    // Amount and Key Errors
    // ========================================================================

    /// Decimal amount does not fit the raw integer representation
    #[error("Amount overflow converting {amount} with {decimals} decimals")]
    AmountOverflow { amount: String, decimals: u8 },

    /// Amount could not be parsed or is negative
    #[error("Invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// Address string is not a valid public key
    #[error("Invalid public key for '{field}': '{value}'")]
    InvalidPublicKey { field: String, value: String },

    // ========================================================================
    // Collaborator Errors
    // ========================================================================

    /// Transaction-building service failed
    #[error("Failed to build transaction: {reason}")]
    TransactionBuild { reason: String },

    /// Transaction collector failed to send
    #[error("Transaction submission failed ({signature:?}): {reason}")]
    Submission { reason: String, signature: Option<String> },

    /// Price history source failed
    #[error("Price fetch failed for market {market_id}: {reason}")]
    PriceFetch { market_id: String, reason: String },

    // ========================================================================
    // Configuration and General Errors
    // ========================================================================

    /// Invalid configuration
    #[error("Invalid configuration for '{component}': {reason}")]
    InvalidConfiguration { component: String, reason: String },

    /// Generic error with optional context
    #[error("Error: {message}")]
    Generic { message: String, context: Option<String> },
}

impl ZapError {
    /// Create a pool-not-found error
    pub fn pool_not_found(amm_id: Option<&str>) -> Self {
        Self::PoolNotFound {
            amm_id: amm_id.map(|s| s.to_string()),
        }
    }

    /// Create an insufficient balance error
    pub fn insufficient_balance(symbol: &str, required: u64) -> Self {
        Self::InsufficientBalance {
            symbol: symbol.to_string(),
            required,
        }
    }

    /// Create an invalid amount error
    pub fn invalid_amount(value: &str, reason: &str) -> Self {
        Self::InvalidAmount {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid public key error
    pub fn invalid_public_key(field: &str, value: &str) -> Self {
        Self::InvalidPublicKey {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(component: &str, reason: &str) -> Self {
        Self::InvalidConfiguration {
            component: component.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a transaction build error
    pub fn transaction_build(reason: &str) -> Self {
        Self::TransactionBuild {
            reason: reason.to_string(),
        }
    }

    /// Create a submission error
    pub fn submission(reason: &str, signature: Option<&str>) -> Self {
        Self::Submission {
            reason: reason.to_string(),
            signature: signature.map(|s| s.to_string()),
        }
    }

    /// Create a generic error
    pub fn generic(message: &str) -> Self {
        Self::Generic {
            message: message.to_string(),
            context: None,
        }
    }

    /// Create a parse error
    pub fn parse_error(message: &str, context: Option<&str>) -> Self {
        Self::Generic {
            message: format!("Parse error: {}", message),
            context: context.map(|s| s.to_string()),
        }
    }

    /// True for the add-liquidity precondition failures that abort before any external call
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::PoolNotFound { .. }
                | Self::CoinNotSelected { .. }
                | Self::SameMint { .. }
                | Self::NonPositiveAmount { .. }
                | Self::InsufficientBalance { .. }
        )
    }
}

impl From<std::io::Error> for ZapError {
    fn from(err: std::io::Error) -> Self {
        ZapError::generic(&err.to_string())
    }
}

impl From<serde_json::Error> for ZapError {
    fn from(err: serde_json::Error) -> Self {
        ZapError::parse_error(&err.to_string(), Some("json"))
    }
}
