//! Kho key-value ghi ra một file JSON, thay cho localStorage của trình duyệt.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;
use vidaplus_core::{KeyValueStore, ShellError};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Mở file trạng thái; file chưa tồn tại nghĩa là kho rỗng.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let data = std::fs::read_to_string(&path)
                .with_context(|| format!("Không đọc được file trạng thái {:?}", path))?;
            serde_json::from_str(&data)
                .with_context(|| format!("File trạng thái {:?} không phải JSON hợp lệ", path))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), ShellError> {
        let data = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| ShellError::Storage(err.to_string()))?;
        std::fs::write(&self.path, data)
            .map_err(|err| ShellError::Storage(format!("{}: {err}", self.path.display())))?;
        debug!(path = %self.path.display(), keys = self.entries.len(), "đã ghi file trạng thái");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShellError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), ShellError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tạo thư mục tạm");
        let store = JsonFileStore::open(dir.path().join("state.json")).expect("mở kho");
        assert!(store.get("currentUser").is_none());
    }

    #[test]
    fn writes_survive_reopen() {
        let dir = tempfile::tempdir().expect("tạo thư mục tạm");
        let path = dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path).expect("mở kho");
        store.set("hasSeenOnboarding", "true").expect("ghi cờ");
        store.set("currentUser", "{}").expect("ghi identity");
        store.remove("currentUser").expect("xóa identity");

        let reopened = JsonFileStore::open(&path).expect("mở lại kho");
        assert_eq!(reopened.get("hasSeenOnboarding").as_deref(), Some("true"));
        assert!(reopened.get("currentUser").is_none());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().expect("tạo thư mục tạm");
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").expect("ghi file hỏng");
        assert!(JsonFileStore::open(&path).is_err());
    }
}
