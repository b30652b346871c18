use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::Error;

/// Bridge contracts deployed on a single chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainContracts {
    /// The token vault, which holds the canonical → bridged registry.
    pub token_vault_address: Address,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_service_address: Option<Address>,
}

impl ChainContracts {
    pub fn new(token_vault_address: Address) -> Self {
        Self {
            token_vault_address,
            bridge_address: None,
            signal_service_address: None,
        }
    }
}

/// Per-chain contract table. Built once, then shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainContractsMap {
    entries: HashMap<u64, ChainContracts>,
}

impl ChainContractsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{ "<chainId>": { "tokenVaultAddress": "0x..", ... } }`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let entries: HashMap<u64, ChainContracts> = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid chain contracts: {e}")))?;
        Ok(Self { entries })
    }

    pub fn insert(&mut self, chain_id: u64, contracts: ChainContracts) {
        self.entries.insert(chain_id, contracts);
    }

    pub fn get(&self, chain_id: u64) -> Result<&ChainContracts, Error> {
        self.entries
            .get(&chain_id)
            .ok_or(Error::UnknownChain { chain_id })
    }

    /// Address of the bridging registry on `chain_id`.
    pub fn token_vault(&self, chain_id: u64) -> Result<Address, Error> {
        self.get(chain_id).map(|c| c.token_vault_address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
