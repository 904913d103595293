//! Token descriptors, including the two synthetic "quantum SOL" variants

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::constants::{SOL_DECIMALS, SOL_MINT, SOL_URL_MINT, WSOL_MINT};

/// Which face of SOL a quantum token shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantumSolVersion {
    /// Native SOL (lamports held by the wallet itself)
    Sol,
    /// Wrapped SOL held in a token account
    Wsol,
}

/// Fungible token descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplToken {
    /// Mint address
    #[serde(with = "pubkey_string")]
    pub mint: Pubkey,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub decimals: u8,
    /// Set only on the two synthetic SOL variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<QuantumSolVersion>,
}

impl SplToken {
    pub fn new(mint: Pubkey, symbol: &str, name: &str, decimals: u8) -> Self {
        Self {
            mint,
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            quantum: None,
        }
    }

    /// Mint as a base58 string
    pub fn mint_string(&self) -> String {
        self.mint.to_string()
    }

    pub fn is_quantum_sol(&self) -> bool {
        self.quantum.is_some()
    }

    /// Mint that holds balances for this token. Both SOL variants share WSOL.
    pub fn balance_mint(&self) -> Pubkey {
        if self.is_quantum_sol() {
            WSOL_MINT
        } else {
            self.mint
        }
    }

    /// Form used in URL query parameters
    pub fn url_mint(&self) -> String {
        if is_quantum_sol_version_sol(self) {
            SOL_URL_MINT.to_string()
        } else {
            self.mint_string()
        }
    }
}

/// Native SOL variant
pub fn quantum_sol_version_sol() -> SplToken {
    SplToken {
        mint: SOL_MINT,
        symbol: "SOL".to_string(),
        name: "solana".to_string(),
        decimals: SOL_DECIMALS,
        quantum: Some(QuantumSolVersion::Sol),
    }
}

/// Wrapped SOL variant
pub fn quantum_sol_version_wsol() -> SplToken {
    SplToken {
        mint: WSOL_MINT,
        symbol: "WSOL".to_string(),
        name: "Wrapped SOL".to_string(),
        decimals: SOL_DECIMALS,
        quantum: Some(QuantumSolVersion::Wsol),
    }
}

pub fn is_quantum_sol_version_sol(token: &SplToken) -> bool {
    token.quantum == Some(QuantumSolVersion::Sol)
}

pub fn is_quantum_sol_version_wsol(token: &SplToken) -> bool {
    token.quantum == Some(QuantumSolVersion::Wsol)
}

/// Serde adapter storing a `Pubkey` as its base58 string
pub mod pubkey_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}
