//! Zap store: the user's current two-sided swap intent

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;
use zap_types::{
    CoinSlot, FixedSide, FocusSide, Price, RouteInfo, RouteType, SplToken, TokenAmount,
};

/// Slippage-adjusted bound of a quote. Which one exists depends on the fixed side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlippageBound {
    /// Input side is fixed: least amount the output may come to
    MinReceived(Decimal),
    /// Output side is fixed: most the input may cost
    MaxSpent(Decimal),
}

/// Cached chart samples for one market
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KlineEntry {
    pub price_data: Vec<f64>,
    /// Unix milliseconds
    pub update_time: i64,
}

/// Quote fields written back by the routing SDK
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZapQuote {
    pub slippage_bound: Option<SlippageBound>,
    pub price_impact: Option<Decimal>,
    pub execution_price: Option<Price>,
    /// Returned by the SDK; kept as-is, nothing reads it
    pub current_price: Option<Price>,
    pub routes: Vec<RouteInfo>,
    pub route_type: Option<RouteType>,
    pub fee: Vec<TokenAmount>,
    pub zapable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZapState {
    /// Swaps the up/down mapping of coin1/coin2 without changing them
    pub direction_reversed: bool,

    pub coin1: Option<SplToken>,
    pub coin2: Option<SplToken>,
    pub coin1_amount: Option<Decimal>,
    pub coin2_amount: Option<Decimal>,
    /// Set once the user has swapped the boxes
    pub has_ui_swrapped: bool,

    pub focus_side: FocusSide,

    pub slippage_bound: Option<SlippageBound>,

    /// unit: %
    pub price_impact: Option<Decimal>,
    pub execution_price: Option<Price>,
    pub current_price: Option<Price>,
    pub routes: Vec<RouteInfo>,
    pub route_type: Option<RouteType>,
    pub fee: Vec<TokenAmount>,
    pub zapable: Option<bool>,

    pub kline_data: HashMap<String, KlineEntry>,

    /// Bumped only to force dependents to recompute
    pub refresh_count: u64,
}

impl Default for ZapState {
    fn default() -> Self {
        Self {
            direction_reversed: false,
            coin1: None,
            coin2: None,
            coin1_amount: None,
            coin2_amount: None,
            has_ui_swrapped: false,
            focus_side: CoinSlot::Coin1,
            slippage_bound: None,
            price_impact: Some(Decimal::new(9, 2)),
            execution_price: None,
            current_price: None,
            routes: Vec::new(),
            route_type: None,
            fee: Vec::new(),
            zapable: None,
            kline_data: HashMap::new(),
            refresh_count: 0,
        }
    }
}

impl ZapState {
    pub fn coin(&self, slot: CoinSlot) -> Option<&SplToken> {
        match slot {
            CoinSlot::Coin1 => self.coin1.as_ref(),
            CoinSlot::Coin2 => self.coin2.as_ref(),
        }
    }

    pub fn amount(&self, slot: CoinSlot) -> Option<Decimal> {
        match slot {
            CoinSlot::Coin1 => self.coin1_amount,
            CoinSlot::Coin2 => self.coin2_amount,
        }
    }

    fn coin_mut(&mut self, slot: CoinSlot) -> &mut Option<SplToken> {
        match slot {
            CoinSlot::Coin1 => &mut self.coin1,
            CoinSlot::Coin2 => &mut self.coin2,
        }
    }

    /// Select a coin for one slot. Picking the other slot's mint swaps the two slots.
    ///
    /// Returns whether anything changed.
    pub fn set_coin(&mut self, slot: CoinSlot, token: SplToken) -> bool {
        if self.coin(slot) == Some(&token) {
            return false;
        }
        let other_has_mint = self.coin(slot.other()).map(|c| c.mint) == Some(token.mint);
        let previous = self.coin_mut(slot).replace(token);
        if other_has_mint {
            *self.coin_mut(slot.other()) = previous;
        }
        true
    }

    /// Write whichever of the two coins is given, refusing a same-mint pair.
    ///
    /// Returns whether anything changed.
    pub fn set_coin_pair(&mut self, coin1: Option<SplToken>, coin2: Option<SplToken>) -> bool {
        let next1 = coin1.clone().or_else(|| self.coin1.clone());
        let next2 = coin2.clone().or_else(|| self.coin2.clone());
        if let (Some(a), Some(b)) = (&next1, &next2) {
            if a.mint == b.mint {
                warn!(mint = %a.mint, "refusing to put the same mint in both zap boxes");
                return false;
            }
        }
        if next1 == self.coin1 && next2 == self.coin2 {
            return false;
        }
        self.coin1 = next1;
        self.coin2 = next2;
        true
    }

    pub fn set_amount(&mut self, slot: CoinSlot, amount: Option<Decimal>) {
        match slot {
            CoinSlot::Coin1 => self.coin1_amount = amount,
            CoinSlot::Coin2 => self.coin2_amount = amount,
        }
    }

    /// Fixed side as the URL spells it
    pub fn effective_fixed_side(&self) -> FixedSide {
        FixedSide::from_focus(self.focus_side, self.direction_reversed)
    }

    /// Coin shown in the upper (input) box
    pub fn up_slot(&self) -> CoinSlot {
        if self.direction_reversed {
            CoinSlot::Coin2
        } else {
            CoinSlot::Coin1
        }
    }

    /// Flip which coin sits in the upper box
    pub fn toggle_direction(&mut self) {
        self.direction_reversed = !self.direction_reversed;
        self.has_ui_swrapped = !self.has_ui_swrapped;
    }

    /// Replace every quote-derived field at once
    pub fn apply_quote(&mut self, quote: ZapQuote) {
        self.slippage_bound = quote.slippage_bound;
        self.price_impact = quote.price_impact;
        self.execution_price = quote.execution_price;
        self.current_price = quote.current_price;
        self.routes = quote.routes;
        self.route_type = quote.route_type;
        self.fee = quote.fee;
        self.zapable = quote.zapable;
    }

    pub fn clear_quote(&mut self) {
        self.apply_quote(ZapQuote::default());
    }

    pub fn min_received(&self) -> Option<Decimal> {
        match self.slippage_bound {
            Some(SlippageBound::MinReceived(v)) => Some(v),
            _ => None,
        }
    }

    pub fn max_spent(&self) -> Option<Decimal> {
        match self.slippage_bound {
            Some(SlippageBound::MaxSpent(v)) => Some(v),
            _ => None,
        }
    }

    pub fn refresh_zap(&mut self) {
        self.refresh_count += 1;
    }
}
