//! Liquidity store: known pools and the user's add-liquidity selection

use rust_decimal::Decimal;
use serde::Serialize;
use zap_types::{CoinSlot, FocusSide, PoolJsonInfo, SplToken};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityState {
    /// Every pool the app knows about
    pub json_infos: Vec<PoolJsonInfo>,
    /// Bumped whenever `json_infos` is replaced
    pub json_infos_revision: u64,
    /// Pool picked in the add-liquidity panel
    pub current_json_info: Option<PoolJsonInfo>,

    pub coin1: Option<SplToken>,
    pub coin2: Option<SplToken>,
    pub coin1_amount: Option<Decimal>,
    pub coin2_amount: Option<Decimal>,
    pub focus_side: FocusSide,

    pub is_add_dialog_open: bool,
    pub refresh_count: u64,
}

impl LiquidityState {
    pub fn set_json_infos(&mut self, json_infos: Vec<PoolJsonInfo>) {
        self.json_infos = json_infos;
        self.json_infos_revision += 1;
    }

    pub fn find_by_amm_id(&self, amm_id: &str) -> Option<&PoolJsonInfo> {
        self.json_infos.iter().find(|info| info.id == amm_id)
    }

    pub fn find_by_mint_pair(&self, mint_a: &str, mint_b: &str) -> Option<&PoolJsonInfo> {
        self.json_infos.iter().find(|info| info.has_mint_pair(mint_a, mint_b))
    }

    /// Make a known pool the current selection
    pub fn select_pool(&mut self, amm_id: &str) -> bool {
        match self.find_by_amm_id(amm_id).cloned() {
            Some(info) => {
                self.current_json_info = Some(info);
                true
            }
            None => false,
        }
    }

    pub fn set_amount(&mut self, slot: CoinSlot, amount: Option<Decimal>) {
        match slot {
            CoinSlot::Coin1 => self.coin1_amount = amount,
            CoinSlot::Coin2 => self.coin2_amount = amount,
        }
    }

    pub fn refresh_liquidity(&mut self) {
        self.refresh_count += 1;
    }
}
