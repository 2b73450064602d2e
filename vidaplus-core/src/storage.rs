//! Khả năng lưu trữ key-value bên ngoài (localStorage, file, bộ nhớ).

use std::collections::HashMap;

use crate::ShellError;

/// Hợp đồng tối thiểu với kho lưu trữ: đọc, ghi, xóa theo khóa.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ShellError>;
    fn remove(&mut self, key: &str) -> Result<(), ShellError>;
}

/// Kho trong bộ nhớ, dùng cho test và môi trường không có trình duyệt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    pub fn into_entries(self) -> HashMap<String, String> {
        self.entries
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShellError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ShellError> {
        self.entries.remove(key);
        Ok(())
    }
}
