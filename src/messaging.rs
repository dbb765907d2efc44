//! Cross-context message protocol.
//!
//! Pages, the profile editor, and the privileged intermediary talk in small
//! JSON request/response pairs:
//!
//! ```text
//! {"action": "fillLinks"}                         ──► {"success": true}
//! {"action": "getStorageData", "keys": [...]}     ──► {"data": {...}}
//!                                                  └► {"error": "..."}
//! ```
//!
//! The transport itself (ports, runtime message buses) is a collaborator
//! behind [`MessageTransport`]; this module only owns the wire shapes and
//! typed send/decode.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Requests understood across contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Request {
    /// Trigger one fill pass in the target page.
    #[serde(rename = "fillLinks")]
    FillLinks,

    /// Ask the privileged intermediary to read storage on the sender's
    /// behalf (the fallback when direct access is blocked).
    #[serde(rename = "getStorageData")]
    GetStorageData { keys: Vec<String> },
}

/// Reply to [`Request::FillLinks`], sent once the scan completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReply {
    pub success: bool,
}

/// Reply to [`Request::GetStorageData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StorageReply {
    Data { data: HashMap<String, String> },
    Error { error: String },
}

/// Transport failures. Decode failures are separated from delivery
/// failures because the former indicate a protocol mismatch, not a flaky
/// channel.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed message: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no receiver for request")]
    NoReceiver,
}

/// Asynchronous request/response channel between contexts.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Deliver one request payload and await its reply.
    async fn request(&self, payload: serde_json::Value) -> Result<serde_json::Value, MessageError>;
}

/// Send a typed request and decode the typed reply.
pub async fn send_request<R: DeserializeOwned>(
    transport: &dyn MessageTransport,
    request: &Request,
) -> Result<R, MessageError> {
    let payload = serde_json::to_value(request)?;
    let reply = transport.request(payload).await?;
    Ok(serde_json::from_value(reply)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_use_the_action_tag() {
        let fill = serde_json::to_value(&Request::FillLinks).unwrap();
        assert_eq!(fill, serde_json::json!({"action": "fillLinks"}));

        let get = serde_json::to_value(&Request::GetStorageData {
            keys: vec!["firstName".into(), "email".into()],
        })
        .unwrap();
        assert_eq!(
            get,
            serde_json::json!({"action": "getStorageData", "keys": ["firstName", "email"]})
        );
    }

    #[test]
    fn storage_replies_decode_both_variants() {
        let ok: StorageReply =
            serde_json::from_str(r#"{"data": {"email": "ada@example.com"}}"#).unwrap();
        assert!(matches!(ok, StorageReply::Data { .. }));

        let err: StorageReply = serde_json::from_str(r#"{"error": "storage gone"}"#).unwrap();
        assert!(matches!(err, StorageReply::Error { .. }));
    }

    struct Echo;

    #[async_trait]
    impl MessageTransport for Echo {
        async fn request(
            &self,
            payload: serde_json::Value,
        ) -> Result<serde_json::Value, MessageError> {
            // Answer every fillLinks with a success reply.
            assert_eq!(payload["action"], "fillLinks");
            Ok(serde_json::json!({"success": true}))
        }
    }

    #[tokio::test]
    async fn typed_send_decodes_replies() {
        let reply: FillReply = send_request(&Echo, &Request::FillLinks).await.unwrap();
        assert!(reply.success);
    }
}
