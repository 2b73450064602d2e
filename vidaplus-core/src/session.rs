//! Kho phiên: giữ tối đa một identity và cờ tour lần đầu.

use tracing::{debug, warn};

use crate::identity::Identity;
use crate::storage::KeyValueStore;
use crate::{ShellConfig, ShellError};

/// Bọc một `KeyValueStore` và quản lý hai khóa: identity và cờ tour.
///
/// Identity được ghi dưới dạng JSON; giá trị hỏng khi đọc lại được coi như không có.
#[derive(Debug)]
pub struct SessionStore<S> {
    store: S,
    identity_key: String,
    tour_key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, &ShellConfig::default())
    }

    pub fn with_config(store: S, config: &ShellConfig) -> Self {
        Self {
            store,
            identity_key: config.identity_key.clone(),
            tour_key: config.tour_key.clone(),
        }
    }

    /// Identity đã lưu, hoặc `None`. Không bao giờ lỗi.
    pub fn get_identity(&self) -> Option<Identity> {
        let raw = self.store.get(&self.identity_key)?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                warn!(key = %self.identity_key, error = %err, "identity đã lưu không hợp lệ, bỏ qua");
                None
            }
        }
    }

    /// Ghi đè identity hiện có.
    pub fn set_identity(&mut self, identity: &Identity) -> Result<(), ShellError> {
        let raw = serde_json::to_string(identity).map_err(|err| ShellError::Parse(err.to_string()))?;
        self.store.set(&self.identity_key, &raw)?;
        debug!(user_id = %identity.id, role = %identity.role, "đã lưu identity");
        Ok(())
    }

    /// Xóa identity. Gọi nhiều lần không sao.
    pub fn clear_identity(&mut self) -> Result<(), ShellError> {
        self.store.remove(&self.identity_key)
    }

    pub fn tour_seen(&self) -> bool {
        self.store
            .get(&self.tour_key)
            .is_some_and(|value| !value.is_empty())
    }

    pub fn mark_tour_seen(&mut self) -> Result<(), ShellError> {
        self.store.set(&self.tour_key, "true")
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
