use crate::abi::{self, AbiWord, CANONICAL_TO_BRIDGED};
use crate::address::Address;
use crate::error::Error;
use crate::reader::{ContractCall, ContractReader};

/// Typed view of a token vault's canonical → bridged mapping.
pub struct BridgingRegistry<'a, R: ContractReader + ?Sized> {
    reader: &'a R,
    address: Address,
}

impl<'a, R: ContractReader + ?Sized> BridgingRegistry<'a, R> {
    pub fn new(reader: &'a R, address: Address) -> Self {
        Self { reader, address }
    }

    /// Bridged representation, on this registry's chain, of the token
    /// deployed at `canonical` on `chain_id`. Zero if none is registered.
    pub async fn canonical_to_bridged(
        &self,
        chain_id: u64,
        canonical: Address,
    ) -> Result<Address, Error> {
        let data = abi::encode_call(
            CANONICAL_TO_BRIDGED,
            &[AbiWord::from(chain_id), AbiWord::from(canonical)],
        )?;
        let call = ContractCall {
            to: self.address,
            data,
        };

        let output = self.reader.read(&call).await?;
        Ok(abi::decode_address(&output)?)
    }
}
