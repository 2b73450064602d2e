//! Dữ liệu mẫu cho các màn hình lá và các bộ lọc đi kèm.
//!
//! Mỗi màn hình tự sở hữu một `Repository` khởi tạo từ fixture JSON; thay đổi cục bộ
//! (đánh dấu đã đọc, cấp phát thuốc...) mất đi khi màn hình bị hủy.

use serde::de::DeserializeOwned;
use vidaplus_core::ShellError;

pub mod appointments;
pub mod audit;
pub mod beds;
pub mod billing;
pub mod help;
pub mod home_care;
pub mod laboratory;
pub mod notifications;
pub mod patients;
pub mod pharmacy;
pub mod professionals;
pub mod records;

/// Bản ghi có định danh chuỗi.
pub trait Record {
    fn id(&self) -> &str;
}

/// Kho trong bộ nhớ giữ thứ tự fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Repository<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Sửa bản ghi theo id; trả về `false` nếu không tìm thấy.
    pub fn update(&mut self, id: &str, apply: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                apply(item);
                true
            }
            None => false,
        }
    }

    pub fn update_all(&mut self, mut apply: impl FnMut(&mut T)) {
        self.items.iter_mut().for_each(|item| apply(item));
    }

    /// Thêm vào cuối và trả về bản ghi vừa thêm.
    pub fn push(&mut self, item: T) -> &T {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Các bản ghi thỏa điều kiện, giữ thứ tự gốc.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<&T> {
        self.items.iter().filter(|item| predicate(*item)).collect()
    }
}

pub(crate) fn parse_fixture<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>, ShellError> {
    serde_json::from_str(raw).map_err(|err| ShellError::Parse(format!("{name}: {err}")))
}

/// So khớp không phân biệt hoa thường; chuỗi tìm kiếm rỗng khớp mọi bản ghi.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Phần trăm làm tròn, bằng 0 khi mẫu số rỗng.
pub fn rounded_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
