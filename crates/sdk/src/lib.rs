/// Zap SDK
///
/// Headless state layer behind the zap and add-liquidity views.
/// Provides:
/// - Zap, liquidity and settings stores with change notification
/// - Two-way sync between the zap store and the page URL
/// - Default coin filling and price history fetching
/// - Add-liquidity transaction building
/// - The two-box swap animation

pub mod coin_filler;
pub mod config;
pub mod context;
pub mod kline;
pub mod services;
pub mod state;
pub mod store;
pub mod transaction;
pub mod two_elements;
pub mod url;

pub use coin_filler::{fill_default_coins, FilledCoins, ZapInitCoinFiller};
pub use config::{TokenConfig, UrlConfig, WalletConfig, ZapConfig};
pub use context::AppContext;
pub use kline::KlineDataFetcher;
pub use state::{AppSettings, KlineEntry, LiquidityState, SlippageBound, ZapQuote, ZapState};
pub use store::Store;
pub use transaction::{tx_add_liquidity, SubmittedTransaction};
pub use two_elements::{StyledElement, ZapSlot, ZapTwoElements, ZAP_TRANSITION};
pub use crate::url::{LatchState, RouteLocation, UrlQuery, ZapUrlReconciler};

// Re-export shared types
pub use zap_types;
pub use zap_types::{ZapError, ZapResult};
