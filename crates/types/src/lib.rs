/// Shared types for the zap liquidity state layer
///
/// This crate provides the token, pool, amount and side definitions used by
/// the stores, the URL reconciler and the add-liquidity transaction builder.

pub mod amount;
pub mod constants;
pub mod errors;
pub mod pool;
pub mod side;
pub mod token;

// Re-export all public types
pub use amount::*;
pub use constants::*;
pub use errors::*;
pub use pool::*;
pub use side::*;
pub use token::*;

/// Result type alias using the shared error type
pub type ZapResult<T> = std::result::Result<T, ZapError>;
