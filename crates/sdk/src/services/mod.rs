//! Narrow interfaces onto the collaborators the state layer calls out to
//!
//! Wallet connection, the transaction-building SDK, network submission,
//! routing and notifications all live outside this crate. Each gets a trait
//! here plus, where a local stand-in is useful, an in-memory implementation.

pub mod notifier;
pub mod prices;
pub mod router;
pub mod tokens;
pub mod transaction;
pub mod wallet;

pub use notifier::{Notifier, TracingNotifier};
pub use prices::PriceHistorySource;
pub use router::{MemoryRouter, Router};
pub use tokens::{TokenList, TokenRegistry};
pub use transaction::{
    AddLiquidityRequest, BuiltTransaction, LiquiditySdk, TransactionCollector, TxHistoryInfo,
};
pub use wallet::{TokenAccount, Wallet, WalletSnapshot};
