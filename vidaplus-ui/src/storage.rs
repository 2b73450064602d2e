#![cfg(target_arch = "wasm32")]

use vidaplus_core::{KeyValueStore, ShellError};
use wasm_bindgen::JsValue;
use web_sys::{console, Storage};

/// `localStorage` của trình duyệt. Khi trình duyệt chặn storage (chế độ riêng tư...),
/// mọi lần đọc trả về `None` và mọi lần ghi trả lỗi `Storage`.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            console::warn_1(&JsValue::from_str("localStorage không khả dụng, phiên sẽ không được lưu"));
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ShellError> {
        self.storage
            .as_ref()
            .ok_or_else(|| ShellError::Storage("localStorage không khả dụng".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShellError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| ShellError::Storage(format!("{err:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), ShellError> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| ShellError::Storage(format!("{err:?}")))
    }
}
