use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::Error;

/// Kind of asset a token descriptor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    Eth,
    Erc20,
    Erc721,
    Erc1155,
}

/// A token and its known deployments, keyed by chain ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,

    #[serde(rename = "type")]
    pub token_type: TokenType,

    #[serde(default)]
    pub addresses: BTreeMap<u64, Address>,

    #[serde(rename = "logoURI")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl Token {
    pub fn new(name: &str, symbol: &str, decimals: u8, token_type: TokenType) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
            token_type,
            addresses: BTreeMap::new(),
            logo_uri: None,
        }
    }

    /// The chain's base currency. It has no contract address anywhere.
    pub fn eth() -> Self {
        Self::new("Ether", "ETH", 18, TokenType::Eth)
    }

    /// Builder-style address registration.
    pub fn with_address(mut self, chain_id: u64, address: Address) -> Self {
        self.addresses.insert(chain_id, address);
        self
    }

    /// Whether this is the native asset rather than a contract token.
    pub fn is_native(&self) -> bool {
        matches!(self.token_type, TokenType::Eth)
    }

    /// Address recorded for `chain_id`, which may be the zero address.
    pub fn address_on(&self, chain_id: u64) -> Option<Address> {
        self.addresses.get(&chain_id).copied()
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(format!("invalid token: {e}")))
    }

    /// Parse a JSON array of tokens.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(format!("invalid token list: {e}")))
    }
}
