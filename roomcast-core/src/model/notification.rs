use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw inbound notification as delivered by the transport.
///
/// Deserializes from a JSON-RPC 2.0 notification object; the `jsonrpc`
/// version member and any `id` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl Notification {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}
