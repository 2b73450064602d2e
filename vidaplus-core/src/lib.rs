//! Lõi điều hướng của VidaPlus SGHSS: phiên đăng nhập, menu theo vai trò và bộ chuyển màn hình.

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod dashboard;
pub mod identity;
pub mod menu;
pub mod session;
pub mod shell;
pub mod storage;
pub mod tour;
pub mod view;

pub use auth::{authenticate, demo_accounts, quick_login};
pub use dashboard::{DashboardSummary, StatCard, UpcomingItem};
pub use identity::{Identity, Role};
pub use menu::{common_menu, resolve_menu, resolve_menu_tag, MenuEntry, MenuIcon};
pub use session::SessionStore;
pub use shell::{NavigationOutcome, Screen, Shell, ShellState};
pub use storage::{KeyValueStore, MemoryStore};
pub use tour::{tour_steps, TourCursor, TourStep};
pub use view::ViewId;

/// Cấu hình khóa lưu trữ và màn hình mặc định của shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    /// Khóa chứa identity đã serialize.
    pub identity_key: String,
    /// Khóa chứa cờ đã xem tour lần đầu.
    pub tour_key: String,
    /// Màn hình hiển thị sau đăng nhập; vai trò không được mở nó thì về dashboard.
    pub default_view: ViewId,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            identity_key: "currentUser".to_string(),
            tour_key: "hasSeenOnboarding".to_string(),
            default_view: ViewId::Dashboard,
        }
    }
}

/// Lỗi chung của shell và các repository dữ liệu mẫu.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Credenciais inválidas. Tente novamente.")]
    InvalidCredentials,
    #[error("Không nhận diện được màn hình: {0}")]
    UnknownView(String),
    #[error("Không nhận diện được vai trò: {0}")]
    UnknownRole(String),
    #[error("Lỗi lưu trữ: {0}")]
    Storage(String),
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Lỗi khác: {0}")]
    Other(String),
}
