//! Transactions assembled from store state

pub mod add_liquidity;

pub use add_liquidity::{tx_add_liquidity, SubmittedTransaction};
