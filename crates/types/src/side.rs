//! Side enums for the two coin boxes and the fixed-amount mapping between
//! the store (`focus_side` + `direction_reversed`) and the URL (`fixed`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical coin slot in the zap store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CoinSlot {
    #[default]
    Coin1,
    Coin2,
}

/// The slot whose amount the user typed
pub type FocusSide = CoinSlot;

impl CoinSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoinSlot::Coin1 => "coin1",
            CoinSlot::Coin2 => "coin2",
        }
    }

    /// Box the slot is rendered in when the direction is not reversed
    pub fn box_name(&self) -> &'static str {
        match self {
            CoinSlot::Coin1 => "upper",
            CoinSlot::Coin2 => "lower",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            CoinSlot::Coin1 => CoinSlot::Coin2,
            CoinSlot::Coin2 => CoinSlot::Coin1,
        }
    }
}

impl fmt::Display for CoinSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL encoding of the amount-fixed side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    In,
    Out,
}

impl FixedSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixedSide::In => "in",
            FixedSide::Out => "out",
        }
    }

    /// Fixed side shown in the URL for a store state
    pub fn from_focus(focus_side: FocusSide, direction_reversed: bool) -> Self {
        match (direction_reversed, focus_side) {
            (true, CoinSlot::Coin2) => FixedSide::In,
            (true, CoinSlot::Coin1) => FixedSide::Out,
            (false, CoinSlot::Coin2) => FixedSide::Out,
            (false, CoinSlot::Coin1) => FixedSide::In,
        }
    }

    /// Inverse of [`FixedSide::from_focus`] for a given direction
    pub fn to_focus(&self, direction_reversed: bool) -> FocusSide {
        match (self, direction_reversed) {
            (FixedSide::In, false) | (FixedSide::Out, true) => CoinSlot::Coin1,
            (FixedSide::In, true) | (FixedSide::Out, false) => CoinSlot::Coin2,
        }
    }
}

impl FromStr for FixedSide {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(FixedSide::In),
            "out" => Ok(FixedSide::Out),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FixedSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed side as the liquidity SDK names it (`a` = base side, `b` = quote side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolSide {
    A,
    B,
}

impl From<FocusSide> for PoolSide {
    fn from(focus_side: FocusSide) -> Self {
        match focus_side {
            CoinSlot::Coin1 => PoolSide::A,
            CoinSlot::Coin2 => PoolSide::B,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_side_mapping_table() {
        assert_eq!(FixedSide::from_focus(CoinSlot::Coin1, false), FixedSide::In);
        assert_eq!(FixedSide::from_focus(CoinSlot::Coin2, false), FixedSide::Out);
        assert_eq!(FixedSide::from_focus(CoinSlot::Coin1, true), FixedSide::Out);
        assert_eq!(FixedSide::from_focus(CoinSlot::Coin2, true), FixedSide::In);
    }

    #[test]
    fn test_fixed_side_inverse() {
        for reversed in [false, true] {
            for focus in [CoinSlot::Coin1, CoinSlot::Coin2] {
                let fixed = FixedSide::from_focus(focus, reversed);
                assert_eq!(fixed.to_focus(reversed), focus);
            }
        }
    }

    #[test]
    fn test_fixed_side_parse() {
        assert_eq!("in".parse::<FixedSide>(), Ok(FixedSide::In));
        assert_eq!("out".parse::<FixedSide>(), Ok(FixedSide::Out));
        assert!("IN".parse::<FixedSide>().is_err());
        assert!("".parse::<FixedSide>().is_err());
    }

    #[test]
    fn test_pool_side_from_focus() {
        assert_eq!(PoolSide::from(CoinSlot::Coin1), PoolSide::A);
        assert_eq!(PoolSide::from(CoinSlot::Coin2), PoolSide::B);
    }
}
