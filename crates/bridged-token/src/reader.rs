use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::address::Address;
use crate::error::ReadError;

/// A read-only call against a deployed contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractCall {
    pub to: Address,
    pub data: Vec<u8>,
}

/// Read capability for on-chain contracts (an `eth_call`, in practice).
///
/// Implementations own transport concerns such as timeouts. Failures are
/// returned as-is and never retried by callers in this crate.
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Execute `call` against current chain state and return the raw
    /// ABI-encoded return data.
    async fn read(&self, call: &ContractCall) -> Result<Vec<u8>, ReadError>;
}

#[async_trait]
impl<R: ContractReader + ?Sized> ContractReader for Arc<R> {
    async fn read(&self, call: &ContractCall) -> Result<Vec<u8>, ReadError> {
        (**self).read(call).await
    }
}

/// In-memory reader for testing. Answers from a fixed response table and
/// records every call it receives.
#[derive(Debug, Default)]
pub struct StaticReader {
    responses: HashMap<ContractCall, Vec<u8>>,
    failure: Option<String>,
    calls: Mutex<Vec<ContractCall>>,
}

impl StaticReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reader whose every call fails with a transport error.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn insert(&mut self, to: Address, data: Vec<u8>, response: Vec<u8>) {
        self.responses.insert(ContractCall { to, data }, response);
    }

    /// Calls received so far, in order.
    pub async fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ContractReader for StaticReader {
    async fn read(&self, call: &ContractCall) -> Result<Vec<u8>, ReadError> {
        self.calls.lock().await.push(call.clone());

        if let Some(ref message) = self.failure {
            return Err(ReadError::Transport(message.clone()));
        }

        self.responses
            .get(call)
            .cloned()
            .ok_or_else(|| ReadError::Unavailable(call.to.to_hex()))
    }
}
