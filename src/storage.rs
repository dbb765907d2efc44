//! Profile storage collaborator.
//!
//! The persistent key-value store lives outside this crate; the engine
//! only sees the [`ProfileStore`] trait. Two policies are layered on top:
//!
//! - [`RelayStore`]: reads storage through the privileged intermediary
//!   (`getStorageData` messages) when the scanning context cannot reach
//!   storage directly.
//! - [`ProfileSource`]: the best-effort snapshot used by every scan
//!   trigger. Direct store first, relay second, empty profile last; a
//!   snapshot never fails, missing fields simply are not filled.
//!
//! Reads carry no timeouts: a hung storage call stalls that one fill
//! attempt and nothing else.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::messaging::{self, MessageTransport, Request, StorageReply};
use crate::profile::{Profile, STORAGE_KEYS};

/// Raw storage view: string keys to string values.
pub type StorageMap = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The store cannot be reached from this context.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The relay channel itself failed.
    #[error("storage relay failed: {0}")]
    Relay(#[from] crate::messaging::MessageError),

    /// The intermediary answered with an error reply.
    #[error("storage relay refused: {0}")]
    Remote(String),
}

/// Process-wide asynchronous key-value store for profile data.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Read the requested keys; absent keys are simply missing from the
    /// returned map.
    async fn get(&self, keys: &[&str]) -> Result<StorageMap, StorageError>;

    /// Persist the given entries.
    async fn set(&self, values: StorageMap) -> Result<(), StorageError>;
}

/// [`ProfileStore`] reads served through the privileged intermediary.
///
/// Writes are refused: the relay protocol only carries reads, and every
/// surface that writes profile data has direct storage access.
pub struct RelayStore<T> {
    transport: T,
}

impl<T: MessageTransport> RelayStore<T> {
    pub fn new(transport: T) -> Self {
        RelayStore { transport }
    }
}

#[async_trait]
impl<T: MessageTransport> ProfileStore for RelayStore<T> {
    async fn get(&self, keys: &[&str]) -> Result<StorageMap, StorageError> {
        let request = Request::GetStorageData {
            keys: keys.iter().map(|k| (*k).to_string()).collect(),
        };
        let reply: StorageReply = messaging::send_request(&self.transport, &request).await?;
        match reply {
            StorageReply::Data { data } => Ok(data),
            StorageReply::Error { error } => Err(StorageError::Remote(error)),
        }
    }

    async fn set(&self, _values: StorageMap) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("relay is read-only".to_string()))
    }
}

/// Best-effort profile snapshots for scan triggers.
pub struct ProfileSource {
    store: Arc<dyn ProfileStore>,
    relay: Option<Arc<dyn ProfileStore>>,
}

impl ProfileSource {
    /// Snapshot from one store, no fallback.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        ProfileSource { store, relay: None }
    }

    /// Snapshot with a relay fallback for contexts where direct storage
    /// access can be blocked.
    pub fn with_relay(store: Arc<dyn ProfileStore>, relay: Arc<dyn ProfileStore>) -> Self {
        ProfileSource { store, relay: Some(relay) }
    }

    /// Fetch a fresh snapshot. Never fails: on total storage loss the
    /// returned profile is empty and the scan fills nothing.
    pub async fn snapshot(&self) -> Profile {
        match self.store.get(&STORAGE_KEYS).await {
            Ok(map) => {
                debug!(keys = map.len(), "profile snapshot from direct storage");
                Profile::from_map(&map)
            }
            Err(err) => {
                warn!(error = %err, "direct storage access failed; trying relay");
                self.relayed_snapshot().await
            }
        }
    }

    async fn relayed_snapshot(&self) -> Profile {
        let Some(relay) = &self.relay else {
            warn!("no relay configured; proceeding with empty profile");
            return Profile::default();
        };
        match relay.get(&STORAGE_KEYS).await {
            Ok(map) => {
                debug!(keys = map.len(), "profile snapshot via relay");
                Profile::from_map(&map)
            }
            Err(err) => {
                warn!(error = %err, "storage relay failed; proceeding with empty profile");
                Profile::default()
            }
        }
    }

    /// Persist a profile through the direct store, skipping blank fields.
    pub async fn save(&self, profile: &Profile) -> Result<(), StorageError> {
        self.store.set(profile.to_map()).await
    }
}
