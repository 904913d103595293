//! Two-way sync between the zap store and the page URL
//!
//! Each visit to the zap view starts `Uninitialized`: the query string is
//! parsed into the store whenever the query, the pool list or the token list
//! changes. Once both lists have loaded the latch flips to `Initialized`, and
//! from then on the store is mirrored into the URL instead (throttled).
//! Leaving the view or unloading the page resets the latch.

use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use zap_types::{
    parse_ui_amount, quantum_sol_version_sol, quantum_sol_version_wsol, CoinSlot, PoolJsonInfo,
    QuantumSolVersion, SplToken, QUERY_FIXED, QUERY_INPUT_AMOUNT, QUERY_INPUT_CURRENCY,
    QUERY_OUTPUT_AMOUNT, QUERY_OUTPUT_CURRENCY, WSOL_MINT,
};

use super::params::{classify, UrlCoinIntent, ZapUrlParams};
use super::throttle::Throttle;
use super::{is_zap_page, RouteLocation, UrlQuery};
use crate::config::UrlConfig;
use crate::context::AppContext;
use crate::services::Router;
use crate::state::ZapState;

/// Keys the mirror writes; everything else in the query is dropped on replace
const MIRRORED_KEYS: [&str; 5] = [
    QUERY_INPUT_CURRENCY,
    QUERY_OUTPUT_CURRENCY,
    QUERY_INPUT_AMOUNT,
    QUERY_OUTPUT_AMOUNT,
    QUERY_FIXED,
];

/// Warning shown when the pool id in the URL matches nothing
pub const UNKNOWN_AMM_ID_WARNING: &str = "can't find Liquidity pool with url ammId";

/// Whether the URL has been read for the current visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchState {
    /// Reading intent from the URL
    Uninitialized,
    /// Writing the store into the URL
    Initialized,
}

/// Inputs whose change re-runs the inbound parse
#[derive(Debug, Clone, PartialEq)]
struct InboundDeps {
    pathname: String,
    query: UrlQuery,
    pools_revision: u64,
    token_count: usize,
}

/// Inputs whose change re-runs the outbound mirror
#[derive(Debug, Clone, PartialEq)]
struct OutboundDeps {
    pathname: String,
    query: UrlQuery,
    zap_version: u64,
    in_clean_url_mode: bool,
}

pub struct ZapUrlReconciler {
    zap_path: String,
    latch: LatchState,
    last_inbound: Option<InboundDeps>,
    last_outbound: Option<OutboundDeps>,
    throttle: Throttle<RouteLocation>,
}

impl ZapUrlReconciler {
    pub fn new(zap_path: &str, throttle_delay: Duration) -> Self {
        Self {
            zap_path: zap_path.to_string(),
            latch: LatchState::Uninitialized,
            last_inbound: None,
            last_outbound: None,
            throttle: Throttle::new(throttle_delay),
        }
    }

    pub fn from_config(config: &UrlConfig) -> Self {
        Self::new(&config.zap_path, Duration::from_millis(config.throttle_ms))
    }

    pub fn latch(&self) -> LatchState {
        self.latch
    }

    pub fn is_initialized(&self) -> bool {
        self.latch == LatchState::Initialized
    }

    /// Navigating anywhere outside the zap view resets the latch
    pub fn on_pathname_change(&mut self, pathname: &str) {
        if !is_zap_page(pathname, &self.zap_path) {
            self.reset();
        }
    }

    /// Full page reload
    pub fn on_page_unload(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        if self.latch == LatchState::Initialized {
            debug!("zap url latch reset");
        }
        self.latch = LatchState::Uninitialized;
        self.last_inbound = None;
        self.last_outbound = None;
        self.throttle.cancel();
    }

    /// Run both directions for the current inputs, inbound first
    pub fn tick(&mut self, ctx: &AppContext, location: &RouteLocation, now: Instant) {
        self.on_pathname_change(&location.pathname);
        self.sync_from_url(ctx, location);
        self.sync_to_url(ctx, location, now);
    }

    // ========================================================================
    // URL -> store
    // ========================================================================

    /// Parse the URL into the zap store. Returns whether the parse ran.
    pub fn sync_from_url(&mut self, ctx: &AppContext, location: &RouteLocation) -> bool {
        if !is_zap_page(&location.pathname, &self.zap_path) {
            return false;
        }
        if self.latch == LatchState::Initialized {
            return false;
        }

        let deps = InboundDeps {
            pathname: location.pathname.clone(),
            query: location.query.clone(),
            pools_revision: ctx.liquidity.get().json_infos_revision,
            token_count: ctx.tokens.token_count(),
        };
        if self.last_inbound.as_ref() == Some(&deps) {
            return false;
        }
        self.last_inbound = Some(deps);

        let params = ZapUrlParams::from_query(&location.query);
        let data_loaded = ctx.dependent_data_loaded();
        debug!(?params, data_loaded, "parsing zap url");

        Self::apply_coin_intent(ctx, classify(&params), data_loaded);
        Self::apply_amounts(ctx, &params);
        Self::apply_fixed_side(ctx, &params);

        // Deciding "not found" before the lists load would clobber a valid URL
        if data_loaded {
            self.latch = LatchState::Initialized;
            info!(pathname = %location.pathname, "zap url parsed, mirroring store to url");
        }
        true
    }

    fn apply_coin_intent(ctx: &AppContext, intent: UrlCoinIntent, data_loaded: bool) {
        match intent {
            UrlCoinIntent::NativeWrapPair { coin1, coin2 } => {
                let (coin1, coin2) = (quantum_token(coin1), quantum_token(coin2));
                ctx.zap.set_if(|s| set_url_coins(s, Some(coin1), Some(coin2)));
            }
            UrlCoinIntent::ExplicitPool {
                amm_id,
                coin1_mint,
                coin2_mint,
            } => {
                let pool = ctx.liquidity.get().find_by_amm_id(&amm_id).cloned();
                let Some(pool) = pool else {
                    // An empty list only means the pools haven't loaded yet
                    if data_loaded {
                        ctx.notifier.log_warning(UNKNOWN_AMM_ID_WARNING);
                    }
                    return;
                };

                let tokens = &ctx.tokens;
                let explicit1 = coin1_mint.as_deref().and_then(|m| tokens.get_token(m, true));
                let explicit2 = coin2_mint.as_deref().and_then(|m| tokens.get_token(m, true));

                // A lone explicit mint takes its side; the counterpart is the pool's other mint
                let (coin1, coin2) = match (coin1_mint.as_deref(), coin2_mint.as_deref()) {
                    (Some(_), Some(_)) => (explicit1, explicit2),
                    (Some(mint), None) => {
                        let counterpart = pool_counterpart(&pool, mint, explicit1.as_ref());
                        (explicit1, tokens.get_token(counterpart, false))
                    }
                    (None, Some(mint)) => {
                        let counterpart = pool_counterpart(&pool, mint, explicit2.as_ref());
                        (tokens.get_token(counterpart, false), explicit2)
                    }
                    (None, None) => (
                        tokens.get_token(&pool.base_mint, false),
                        tokens.get_token(&pool.quote_mint, false),
                    ),
                };

                ctx.zap.set_if(|s| {
                    // Already holding this pair, in either order
                    if same_mint_pair(
                        [s.coin1.as_ref(), s.coin2.as_ref()],
                        [coin1.as_ref(), coin2.as_ref()],
                    ) {
                        return false;
                    }
                    set_url_coins(s, coin1, coin2)
                });
            }
            UrlCoinIntent::ExplicitMints {
                coin1_mint,
                coin2_mint,
            } => {
                let coin1 = coin1_mint.and_then(|m| ctx.tokens.get_token(&m, false));
                let coin2 = coin2_mint.and_then(|m| ctx.tokens.get_token(&m, false));
                ctx.zap.set_if(|s| set_url_coins(s, coin1, coin2));
            }
            UrlCoinIntent::NoMatch => {}
        }
    }

    fn apply_amounts(ctx: &AppContext, params: &ZapUrlParams) {
        let (amount1, amount2) = params.attributed_amounts();
        for (slot, raw) in [(CoinSlot::Coin1, amount1), (CoinSlot::Coin2, amount2)] {
            let Some(raw) = raw else { continue };
            match parse_ui_amount(raw) {
                Ok(Some(amount)) => {
                    ctx.zap.set_if(|s| {
                        if s.amount(slot) == Some(amount) {
                            return false;
                        }
                        s.set_amount(slot, Some(amount));
                        true
                    });
                }
                Ok(None) => {}
                Err(e) => debug!(%slot, error = %e, "ignoring url amount"),
            }
        }
    }

    fn apply_fixed_side(ctx: &AppContext, params: &ZapUrlParams) {
        let Some(url_fixed) = params.fixed else { return };
        ctx.zap.set_if(|s| {
            if s.effective_fixed_side() == url_fixed {
                return false;
            }
            s.focus_side = url_fixed.to_focus(s.direction_reversed);
            true
        });
    }

    // ========================================================================
    // store -> URL
    // ========================================================================

    /// Queue a URL replacement if the store no longer matches the query.
    /// Returns whether a replacement was queued.
    pub fn sync_to_url(&mut self, ctx: &AppContext, location: &RouteLocation, now: Instant) -> bool {
        if !is_zap_page(&location.pathname, &self.zap_path) {
            return false;
        }
        if self.latch != LatchState::Initialized {
            return false;
        }
        let in_clean_url_mode = ctx.app_settings.get().in_clean_url_mode;
        let deps = OutboundDeps {
            pathname: location.pathname.clone(),
            query: location.query.clone(),
            zap_version: ctx.zap.version(),
            in_clean_url_mode,
        };
        if self.last_outbound.as_ref() == Some(&deps) {
            return false;
        }
        self.last_outbound = Some(deps);

        if in_clean_url_mode {
            return false;
        }

        let data_info = mirror_query(ctx);
        let url_info = location.query.pick(&MIRRORED_KEYS);
        if url_info == data_info {
            return false;
        }

        debug!(query = %data_info.to_query_string(), "queueing zap url update");
        self.throttle
            .push(RouteLocation::new(&location.pathname, data_info), now);
        true
    }

    /// When the next queued URL replacement is due
    pub fn next_flush_deadline(&self) -> Option<Instant> {
        self.throttle.next_deadline()
    }

    /// Take the queued replacement if it is due
    pub fn poll_flush(&mut self, now: Instant) -> Option<RouteLocation> {
        self.throttle.poll(now)
    }

    /// Apply a due replacement to the router. Returns whether one was applied.
    pub fn flush_into(&mut self, router: &dyn Router, now: Instant) -> bool {
        match self.poll_flush(now) {
            Some(location) => {
                debug!(location = %location, "replacing zap url");
                router.replace_shallow(location);
                true
            }
            None => false,
        }
    }

    /// Sleep until the queued replacement is due, then apply it
    pub async fn flush_when_due(&mut self, router: &dyn Router) -> bool {
        let Some(deadline) = self.next_flush_deadline() else {
            return false;
        };
        tokio::time::sleep_until(deadline).await;
        self.flush_into(router, Instant::now())
    }
}

fn quantum_token(version: QuantumSolVersion) -> SplToken {
    match version {
        QuantumSolVersion::Sol => quantum_sol_version_sol(),
        QuantumSolVersion::Wsol => quantum_sol_version_wsol(),
    }
}

/// Write each resolved URL coin into its slot. A coin whose mint already sits
/// in the other slot swaps the two, so the URL wins over what the store held.
///
/// Returns whether anything changed.
fn set_url_coins(state: &mut ZapState, coin1: Option<SplToken>, coin2: Option<SplToken>) -> bool {
    let coin2 = match (&coin1, coin2) {
        (Some(a), Some(b)) if a.mint == b.mint => {
            warn!(mint = %a.mint, "url names the same mint for both zap boxes");
            None
        }
        (_, coin2) => coin2,
    };
    let mut changed = false;
    if let Some(coin) = coin1 {
        changed |= state.set_coin(CoinSlot::Coin1, coin);
    }
    if let Some(coin) = coin2 {
        changed |= state.set_coin(CoinSlot::Coin2, coin);
    }
    changed
}

/// Mint of `pool` on the other side from `mint`
fn pool_counterpart<'a>(pool: &'a PoolJsonInfo, mint: &str, resolved: Option<&SplToken>) -> &'a str {
    let is_base = mint == pool.base_mint
        || resolved.is_some_and(|t| {
            t.mint_string() == pool.base_mint
                || (t.is_quantum_sol() && pool.base_mint == WSOL_MINT.to_string())
        });
    if is_base {
        &pool.quote_mint
    } else {
        &pool.base_mint
    }
}

/// Order-insensitive comparison of two coin pairs by mint
fn same_mint_pair(current: [Option<&SplToken>; 2], next: [Option<&SplToken>; 2]) -> bool {
    let mut a = current.map(|t| t.map(|t| t.mint));
    let mut b = next.map(|t| t.map(|t| t.mint));
    a.sort();
    b.sort();
    a == b
}

/// Query the store should be reflected as
fn mirror_query(ctx: &AppContext) -> UrlQuery {
    let zap = ctx.zap.get();
    let url_mint = |coin: Option<&SplToken>| {
        coin.map(|c| ctx.tokens.to_url_mint(c)).unwrap_or_default()
    };

    let up = zap.up_slot();
    let down = up.other();
    let amount = |slot: CoinSlot| zap.amount(slot).map(|a| a.to_string()).unwrap_or_default();

    UrlQuery::from_non_empty([
        (QUERY_INPUT_CURRENCY, url_mint(zap.coin(up))),
        (QUERY_OUTPUT_CURRENCY, url_mint(zap.coin(down))),
        (QUERY_INPUT_AMOUNT, amount(up)),
        (QUERY_OUTPUT_AMOUNT, amount(down)),
        (QUERY_FIXED, zap.effective_fixed_side().as_str().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{TokenList, WalletSnapshot};
    use solana_sdk::pubkey::Pubkey;
    use std::sync::Arc;

    fn context() -> (AppContext, SplToken, SplToken) {
        let base = SplToken::new(Pubkey::new_unique(), "BASE", "", 6);
        let quote = SplToken::new(Pubkey::new_unique(), "QUOTE", "", 6);
        let tokens = Arc::new(TokenList::from_tokens(vec![base.clone(), quote.clone()]));
        let wallet = Arc::new(WalletSnapshot::new(Pubkey::new_unique(), 0));
        let ctx = AppContext::new(tokens, wallet);
        ctx.liquidity.set(|s| {
            s.set_json_infos(vec![PoolJsonInfo::new(
                "pool",
                &base.mint_string(),
                &quote.mint_string(),
            )])
        });
        (ctx, base, quote)
    }

    #[test]
    fn test_same_mint_pair_ignores_order() {
        let a = SplToken::new(Pubkey::new_unique(), "A", "", 6);
        let b = SplToken::new(Pubkey::new_unique(), "B", "", 6);
        assert!(same_mint_pair([Some(&a), Some(&b)], [Some(&b), Some(&a)]));
        assert!(!same_mint_pair([Some(&a), None], [Some(&a), Some(&b)]));
    }

    #[test]
    fn test_pool_counterpart_matches_native_sol() {
        let quote = Pubkey::new_unique().to_string();
        let pool = PoolJsonInfo::new("sol-pool", &WSOL_MINT.to_string(), &quote);
        let sol = quantum_sol_version_sol();
        assert_eq!(pool_counterpart(&pool, "sol", Some(&sol)), quote);
        assert_eq!(pool_counterpart(&pool, &quote, None), WSOL_MINT.to_string());
    }

    #[test]
    fn test_inbound_runs_only_when_inputs_change() {
        let (ctx, _, _) = context();
        let mut reconciler = ZapUrlReconciler::new("/zap", Duration::from_millis(100));
        // Token list empty: the parse runs but cannot latch
        let empty = AppContext::new(
            Arc::new(TokenList::new()),
            Arc::new(WalletSnapshot::new(Pubkey::new_unique(), 0)),
        );
        let location = RouteLocation::parse("/zap?ammId=pool");

        assert!(reconciler.sync_from_url(&empty, &location));
        assert!(!reconciler.sync_from_url(&empty, &location));
        assert_eq!(reconciler.latch(), LatchState::Uninitialized);

        assert!(reconciler.sync_from_url(&ctx, &location));
        assert_eq!(reconciler.latch(), LatchState::Initialized);
        assert!(!reconciler.sync_from_url(&ctx, &RouteLocation::parse("/zap?ammId=other")));
    }

    #[test]
    fn test_mirror_query_applies_direction() {
        let (ctx, base, quote) = context();
        ctx.zap.set(|s| {
            s.set_coin_pair(Some(base.clone()), Some(quote.clone()));
            s.coin2_amount = Some(rust_decimal::Decimal::new(25, 1));
            s.direction_reversed = true;
        });

        let query = mirror_query(&ctx);
        assert_eq!(query.get(QUERY_INPUT_CURRENCY), Some(quote.mint_string().as_str()));
        assert_eq!(query.get(QUERY_OUTPUT_CURRENCY), Some(base.mint_string().as_str()));
        assert_eq!(query.get(QUERY_INPUT_AMOUNT), Some("2.5"));
        assert_eq!(query.get(QUERY_OUTPUT_AMOUNT), None);
        assert_eq!(query.get(QUERY_FIXED), Some("out"));
    }

    #[test]
    fn test_leaving_zap_page_resets_and_cancels_flush() {
        let (ctx, _, _) = context();
        let mut reconciler = ZapUrlReconciler::new("/zap", Duration::from_millis(100));
        let now = Instant::now();

        reconciler.tick(&ctx, &RouteLocation::parse("/zap?ammId=pool"), now);
        assert!(reconciler.is_initialized());
        assert!(reconciler.next_flush_deadline().is_some());

        reconciler.tick(&ctx, &RouteLocation::parse("/liquidity"), now);
        assert_eq!(reconciler.latch(), LatchState::Uninitialized);
        assert_eq!(reconciler.next_flush_deadline(), None);
    }
}
