//! Token registry lookups

use std::collections::HashMap;
use std::sync::RwLock;
use zap_types::{
    quantum_sol_version_sol, quantum_sol_version_wsol, SplToken, ZapResult, SOL_MINT,
    SOL_URL_MINT, WSOL_MINT,
};

/// Token metadata lookup
pub trait TokenRegistry: Send + Sync {
    /// Resolve a mint (or its URL spelling) to a token.
    ///
    /// `exact` distinguishes the wrapped SOL mint from native SOL; without it
    /// the wrapped mint resolves to native SOL.
    fn get_token(&self, mint: &str, exact: bool) -> Option<SplToken>;

    /// Mint as written into URL query parameters
    fn to_url_mint(&self, token: &SplToken) -> String {
        token.url_mint()
    }

    /// Number of known tokens; zero until the list has loaded
    fn token_count(&self) -> usize;
}

/// In-memory token table keyed by mint
#[derive(Debug, Default)]
pub struct TokenList {
    tokens: RwLock<HashMap<String, SplToken>>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = SplToken>,
    {
        let list = Self::new();
        list.replace(tokens);
        list
    }

    /// Parse a JSON array of tokens
    pub fn from_json(json: &str) -> ZapResult<Self> {
        let tokens: Vec<SplToken> = serde_json::from_str(json)?;
        Ok(Self::from_tokens(tokens))
    }

    /// Swap in a freshly loaded token list
    pub fn replace<I>(&self, tokens: I)
    where
        I: IntoIterator<Item = SplToken>,
    {
        let table: HashMap<String, SplToken> = tokens
            .into_iter()
            .map(|token| (token.mint_string(), token))
            .collect();
        *self.tokens.write().unwrap_or_else(|e| e.into_inner()) = table;
    }

    pub fn insert(&self, token: SplToken) {
        self.tokens
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(token.mint_string(), token);
    }
}

impl TokenRegistry for TokenList {
    fn get_token(&self, mint: &str, exact: bool) -> Option<SplToken> {
        if mint.is_empty() {
            return None;
        }
        if mint == SOL_URL_MINT || mint == SOL_MINT.to_string() {
            return Some(quantum_sol_version_sol());
        }
        if mint == WSOL_MINT.to_string() {
            return Some(if exact {
                quantum_sol_version_wsol()
            } else {
                quantum_sol_version_sol()
            });
        }
        self.tokens
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(mint)
            .cloned()
    }

    fn token_count(&self) -> usize {
        self.tokens.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
