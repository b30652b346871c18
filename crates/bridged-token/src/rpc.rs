//! JSON-RPC `eth_call` backend for [`ContractReader`].

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::trace;

use crate::error::ReadError;
use crate::reader::{ContractCall, ContractReader};

/// Reads contracts through an Ethereum JSON-RPC endpoint.
pub struct RpcReader {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl RpcReader {
    pub fn new(url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Use a preconfigured client, e.g. one with a request timeout.
    pub fn with_client(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    fn request_body(&self, call: &ContractCall) -> Value {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "eth_call",
            "params": [
                {
                    "to": call.to.to_hex(),
                    "data": format!("0x{}", hex::encode(&call.data)),
                },
                "latest"
            ]
        })
    }
}

#[async_trait]
impl ContractReader for RpcReader {
    async fn read(&self, call: &ContractCall) -> Result<Vec<u8>, ReadError> {
        let body = self.request_body(call);
        trace!(to = %call.to, url = %self.url, "eth_call");

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ReadError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| ReadError::Transport(e.to_string()))?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ReadError::InvalidResponse(e.to_string()))?;

        parse_response(&payload)
    }
}

/// Extract return data from a JSON-RPC response object.
fn parse_response(payload: &Value) -> Result<Vec<u8>, ReadError> {
    if let Some(error) = payload.get("error").filter(|e| !e.is_null()) {
        return Err(ReadError::Rpc {
            code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        });
    }

    let result = payload
        .get("result")
        .and_then(Value::as_str)
        .ok_or_else(|| ReadError::InvalidResponse("missing result".to_string()))?;

    let digits = result.strip_prefix("0x").unwrap_or(result);
    hex::decode(digits).map_err(|e| ReadError::InvalidResponse(format!("invalid hex: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;

    #[test]
    fn test_request_body() {
        let reader = RpcReader::new("http://localhost:8545");
        let call = ContractCall {
            to: Address([0x11; 20]),
            data: vec![0xde, 0xad],
        };

        let first = reader.request_body(&call);
        let second = reader.request_body(&call);
        assert_eq!(first["method"], "eth_call");
        assert_eq!(first["params"][0]["to"], "0x1111111111111111111111111111111111111111");
        assert_eq!(first["params"][0]["data"], "0xdead");
        assert_eq!(first["params"][1], "latest");
        assert_ne!(first["id"], second["id"]);
    }

    #[test]
    fn test_parse_result() {
        let payload = json!({ "jsonrpc": "2.0", "id": 1, "result": "0x00ff" });
        assert_eq!(parse_response(&payload).unwrap(), vec![0x00, 0xff]);
    }

    #[test]
    fn test_parse_revert() {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": 3, "message": "execution reverted" }
        });
        let err = parse_response(&payload).unwrap_err();
        assert!(matches!(err, ReadError::Rpc { code: 3, ref message } if message == "execution reverted"));
    }

    #[test]
    fn test_parse_null_error_field() {
        let payload = json!({ "jsonrpc": "2.0", "id": 1, "result": "0x00ff", "error": null });
        assert_eq!(parse_response(&payload).unwrap(), vec![0x00, 0xff]);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_response(&json!({ "id": 1 })),
            Err(ReadError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_response(&json!({ "result": "0xzz" })),
            Err(ReadError::InvalidResponse(_))
        ));
    }
}
