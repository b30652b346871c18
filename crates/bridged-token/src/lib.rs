//! Token address resolution across bridged EVM chains.
//!
//! A token list records where each token is deployed. When a token has no
//! deployment recorded on the chain in question, the chain's token vault
//! knows whether a bridged copy of it exists there.

pub mod abi;
pub mod address;
pub mod chain;
pub mod error;
pub mod reader;
pub mod registry;
pub mod resolver;
#[cfg(feature = "rpc")]
pub mod rpc;
pub mod token;

// Re-exports for convenience
pub use address::Address;
pub use chain::{ChainContracts, ChainContractsMap};
pub use error::Error;
pub use reader::{ContractCall, ContractReader, StaticReader};
pub use registry::BridgingRegistry;
pub use resolver::{get_address, AddressResolver};
#[cfg(feature = "rpc")]
pub use rpc::RpcReader;
pub use token::{Token, TokenType};
