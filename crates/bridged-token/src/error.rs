use thiserror::Error;

/// Unified error type for token address resolution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no chain contracts configured for chain_id={chain_id}")]
    UnknownChain { chain_id: u64 },

    #[error("token {symbol} has no canonical address on chain_id={chain_id}")]
    MissingCanonicalAddress { symbol: String, chain_id: u64 },

    #[error("contract read error: {0}")]
    Read(#[from] ReadError),

    #[error("abi error: {0}")]
    Abi(#[from] AbiError),

    #[error("config error: {0}")]
    Config(String),
}

/// Errors while parsing an address string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid address length: expected 40 hex chars, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex in address: {0}")]
    InvalidHex(String),
}

/// Errors during call encoding and return data decoding.
#[derive(Debug, Error)]
pub enum AbiError {
    #[error("value does not fit in {bits} bits")]
    ValueTooLarge { bits: usize },

    #[error("return data too short: expected at least {expected} bytes, got {actual}")]
    ReturnTooShort { expected: usize, actual: usize },

    #[error("invalid address word: upper 12 bytes must be zero, got 0x{0}")]
    DirtyAddress(String),
}

/// Errors surfaced by a contract read backend.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("no response configured for call to {0}")]
    Unavailable(String),
}
