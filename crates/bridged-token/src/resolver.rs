use std::sync::Arc;

use tracing::debug;

use crate::address::Address;
use crate::chain::ChainContractsMap;
use crate::error::Error;
use crate::reader::ContractReader;
use crate::registry::BridgingRegistry;
use crate::token::Token;

/// Resolves where a token lives on a source chain, asking the source
/// chain's token vault when the token list has no deployment recorded.
pub struct AddressResolver<R> {
    contracts: Arc<ChainContractsMap>,
    reader: R,
}

impl<R: ContractReader> AddressResolver<R> {
    pub fn new(contracts: Arc<ChainContractsMap>, reader: R) -> Self {
        Self { contracts, reader }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Address of `token` on `src_chain_id`.
    ///
    /// Returns `None` for the native asset, and when the token has no known
    /// deployment on the source chain and no destination chain (or chain 0)
    /// is given.
    /// Otherwise the source chain's vault is queried for the bridged
    /// counterpart of the token's address on `dest_chain_id`; that answer
    /// is returned as-is, so it can be the zero address when nothing has
    /// been bridged yet.
    pub async fn resolve(
        &self,
        token: &Token,
        src_chain_id: u64,
        dest_chain_id: Option<u64>,
    ) -> Result<Option<Address>, Error> {
        get_address(&self.contracts, &self.reader, token, src_chain_id, dest_chain_id).await
    }
}

/// One-shot form of [`AddressResolver::resolve`] over borrowed collaborators.
pub async fn get_address<R: ContractReader + ?Sized>(
    contracts: &ChainContractsMap,
    reader: &R,
    token: &Token,
    src_chain_id: u64,
    dest_chain_id: Option<u64>,
) -> Result<Option<Address>, Error> {
    if token.is_native() {
        return Ok(None);
    }

    if let Some(address) = token.address_on(src_chain_id) {
        if !address.is_zero() {
            return Ok(Some(address));
        }
    }

    // Chain ID 0 is not a real chain and counts as unset.
    let Some(dest_chain_id) = dest_chain_id.filter(|&id| id != 0) else {
        return Ok(None);
    };

    let vault = contracts.token_vault(src_chain_id)?;
    let canonical = token
        .address_on(dest_chain_id)
        .ok_or_else(|| Error::MissingCanonicalAddress {
            symbol: token.symbol.clone(),
            chain_id: dest_chain_id,
        })?;

    let bridged = BridgingRegistry::new(reader, vault)
        .canonical_to_bridged(dest_chain_id, canonical)
        .await?;

    debug!(symbol = %token.symbol, address = %bridged, "resolved bridged token address");

    Ok(Some(bridged))
}
