use num_bigint::BigUint;
use tiny_keccak::{Hasher, Keccak};

use crate::address::Address;
use crate::error::AbiError;

/// `canonicalToBridged(uint256 chainId, address canonicalAddress) returns (address)`
pub const CANONICAL_TO_BRIDGED: &str = "canonicalToBridged(uint256,address)";

const WORD: usize = 32;

/// A static ABI argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiWord {
    Uint(BigUint),
    Address(Address),
}

impl AbiWord {
    /// Left-padded 32-byte head encoding.
    pub fn encode(&self) -> Result<[u8; WORD], AbiError> {
        let mut word = [0u8; WORD];
        match self {
            AbiWord::Uint(value) => {
                let bytes = value.to_bytes_be();
                if bytes.len() > WORD {
                    return Err(AbiError::ValueTooLarge { bits: 256 });
                }
                word[WORD - bytes.len()..].copy_from_slice(&bytes);
            }
            AbiWord::Address(addr) => {
                word[12..].copy_from_slice(addr.as_bytes());
            }
        }
        Ok(word)
    }
}

impl From<u64> for AbiWord {
    fn from(value: u64) -> Self {
        AbiWord::Uint(BigUint::from(value))
    }
}

impl From<Address> for AbiWord {
    fn from(addr: Address) -> Self {
        AbiWord::Address(addr)
    }
}

/// Compute the 4-byte selector from a canonical function signature.
pub fn selector(canonical: &str) -> [u8; 4] {
    let mut hasher = Keccak::v256();
    hasher.update(canonical.as_bytes());
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Build calldata: selector followed by one head word per argument.
pub fn encode_call(signature: &str, args: &[AbiWord]) -> Result<Vec<u8>, AbiError> {
    let mut calldata = Vec::with_capacity(4 + args.len() * WORD);
    calldata.extend_from_slice(&selector(signature));
    for arg in args {
        calldata.extend_from_slice(&arg.encode()?);
    }
    Ok(calldata)
}

/// Decode a single `address` return value.
pub fn decode_address(data: &[u8]) -> Result<Address, AbiError> {
    if data.len() < WORD {
        return Err(AbiError::ReturnTooShort {
            expected: WORD,
            actual: data.len(),
        });
    }
    let word = &data[..WORD];
    if word[..12].iter().any(|&b| b != 0) {
        return Err(AbiError::DirtyAddress(hex::encode(word)));
    }
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&word[12..]);
    Ok(Address(addr))
}
