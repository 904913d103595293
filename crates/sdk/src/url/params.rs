//! Zap query parameters and the coin intent they express

use zap_types::{
    FixedSide, QuantumSolVersion, QUERY_AMM_ID, QUERY_AMM_ID_LOWER, QUERY_FIXED,
    QUERY_INPUT_AMOUNT, QUERY_INPUT_CURRENCY, QUERY_OUTPUT_AMOUNT, QUERY_OUTPUT_CURRENCY,
    SOL_URL_MINT, WSOL_MINT,
};

use super::UrlQuery;

/// Raw zap parameters read off the query string; absent values are empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZapUrlParams {
    pub amm_id: String,
    pub coin1_mint: String,
    pub coin2_mint: String,
    pub coin1_amount: String,
    pub coin2_amount: String,
    /// `None` when missing or not `in`/`out`
    pub fixed: Option<FixedSide>,
}

impl ZapUrlParams {
    pub fn from_query(query: &UrlQuery) -> Self {
        let amm_id = query
            .get(QUERY_AMM_ID)
            .or_else(|| query.get(QUERY_AMM_ID_LOWER))
            .unwrap_or("");
        Self {
            amm_id: amm_id.to_string(),
            coin1_mint: query.get_or_empty(QUERY_INPUT_CURRENCY).to_string(),
            coin2_mint: query.get_or_empty(QUERY_OUTPUT_CURRENCY).to_string(),
            coin1_amount: query.get_or_empty(QUERY_INPUT_AMOUNT).to_string(),
            coin2_amount: query.get_or_empty(QUERY_OUTPUT_AMOUNT).to_string(),
            fixed: query.get_or_empty(QUERY_FIXED).parse().ok(),
        }
    }

    /// Amount strings attributed to (coin1, coin2).
    ///
    /// A present mint claims its own amount. When only one mint is present its
    /// amount is attributed to both coins; with no mints nothing is attributed.
    pub fn attributed_amounts(&self) -> (Option<&str>, Option<&str>) {
        let has1 = !self.coin1_mint.is_empty();
        let has2 = !self.coin2_mint.is_empty();
        let coin1 = if has1 {
            Some(self.coin1_amount.as_str())
        } else if has2 {
            Some(self.coin2_amount.as_str())
        } else {
            None
        };
        let coin2 = if has2 {
            Some(self.coin2_amount.as_str())
        } else if has1 {
            Some(self.coin1_amount.as_str())
        } else {
            None
        };
        (coin1.filter(|s| !s.is_empty()), coin2.filter(|s| !s.is_empty()))
    }
}

/// What the URL says about which coins belong in the two boxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlCoinIntent {
    /// `sol` ⇄ wrapped-SOL mint: wrap or unwrap, no pool lookup
    NativeWrapPair {
        coin1: QuantumSolVersion,
        coin2: QuantumSolVersion,
    },
    /// Pool id given; mints may override the pool's base/quote
    ExplicitPool {
        amm_id: String,
        coin1_mint: Option<String>,
        coin2_mint: Option<String>,
    },
    /// One or both mints without a pool id
    ExplicitMints {
        coin1_mint: Option<String>,
        coin2_mint: Option<String>,
    },
    NoMatch,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Decide which single case the parameters fall into
pub fn classify(params: &ZapUrlParams) -> UrlCoinIntent {
    let wsol = WSOL_MINT.to_string();
    let (m1, m2) = (params.coin1_mint.as_str(), params.coin2_mint.as_str());

    if m1 == SOL_URL_MINT && m2 == wsol {
        return UrlCoinIntent::NativeWrapPair {
            coin1: QuantumSolVersion::Sol,
            coin2: QuantumSolVersion::Wsol,
        };
    }
    if m1 == wsol && m2 == SOL_URL_MINT {
        return UrlCoinIntent::NativeWrapPair {
            coin1: QuantumSolVersion::Wsol,
            coin2: QuantumSolVersion::Sol,
        };
    }
    if !params.amm_id.is_empty() {
        return UrlCoinIntent::ExplicitPool {
            amm_id: params.amm_id.clone(),
            coin1_mint: non_empty(m1),
            coin2_mint: non_empty(m2),
        };
    }
    if !m1.is_empty() || !m2.is_empty() {
        return UrlCoinIntent::ExplicitMints {
            coin1_mint: non_empty(m1),
            coin2_mint: non_empty(m2),
        };
    }
    UrlCoinIntent::NoMatch
}
