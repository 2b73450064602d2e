//! Bộ chuyển màn hình: máy trạng thái Unauthenticated → FirstRunTour → Active(view).

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::identity::{Identity, Role};
use crate::menu::{self, MenuEntry};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;
use crate::view::ViewId;
use crate::{ShellConfig, ShellError};

/// Trạng thái hiện tại của shell.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "state", content = "view", rename_all = "snake_case")]
pub enum ShellState {
    Unauthenticated,
    FirstRunTour,
    Active(ViewId),
}

/// Kết quả của một yêu cầu điều hướng.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Đã chuyển sang màn hình mới (hoặc vẫn là màn hình đó).
    Moved(ViewId),
    /// Màn hình không thuộc menu của vai trò; trạng thái giữ nguyên.
    Refused(ViewId),
    /// Tag không thuộc tập màn hình đã biết; trạng thái giữ nguyên.
    Unknown,
    /// Shell chưa ở trạng thái Active nên bỏ qua.
    Ignored,
}

/// Màn hình cần mount ở lần render này.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Login,
    Tour(&'a Identity),
    View { identity: &'a Identity, view: ViewId },
}

/// Shell sở hữu kho phiên, identity đang hoạt động và định danh màn hình.
///
/// Mọi chuyển trạng thái đều đồng bộ; định danh màn hình không được lưu lại,
/// khởi động lại luôn quay về `default_view`.
#[derive(Debug)]
pub struct Shell<S> {
    session: SessionStore<S>,
    config: ShellConfig,
    identity: Option<Identity>,
    active_view: ViewId,
    state: ShellState,
}

impl<S: KeyValueStore> Shell<S> {
    /// Shell mới ở trạng thái `Unauthenticated`, chưa đọc kho phiên.
    pub fn new(store: S, config: ShellConfig) -> Self {
        let session = SessionStore::with_config(store, &config);
        Self {
            session,
            active_view: config.default_view,
            config,
            identity: None,
            state: ShellState::Unauthenticated,
        }
    }

    /// Khởi tạo rồi khôi phục phiên đã lưu (nếu có).
    pub fn launch(store: S, config: ShellConfig) -> Self {
        let mut shell = Self::new(store, config);
        shell.resume();
        shell
    }

    /// Đọc identity đã lưu; nếu có thì vào thẳng tour hoặc màn hình mặc định.
    pub fn resume(&mut self) -> ShellState {
        if let Some(identity) = self.session.get_identity() {
            info!(user_id = %identity.id, role = %identity.role, "khôi phục phiên đã lưu");
            self.enter(identity);
        }
        self.state
    }

    /// Bộ thu thập identity báo đăng nhập thành công.
    pub fn on_login(&mut self, identity: Identity) -> Result<ShellState, ShellError> {
        self.session.set_identity(&identity)?;
        info!(user_id = %identity.id, role = %identity.role, "đăng nhập");
        self.enter(identity);
        Ok(self.state)
    }

    fn enter(&mut self, identity: Identity) {
        self.active_view = self.landing_view(identity.role);
        self.identity = Some(identity);
        self.state = if self.session.tour_seen() {
            ShellState::Active(self.active_view)
        } else {
            ShellState::FirstRunTour
        };
    }

    /// `default_view` nếu vai trò được mở, ngược lại là Dashboard.
    fn landing_view(&self, role: Role) -> ViewId {
        let configured = self.config.default_view;
        if menu::allows(role, configured) {
            configured
        } else {
            warn!(%role, view = %configured, "default_view ngoài menu của vai trò, dùng dashboard");
            ViewId::Dashboard
        }
    }

    /// Hoàn tất tour; ngoài trạng thái `FirstRunTour` thì không làm gì.
    pub fn complete_tour(&mut self) -> Result<ShellState, ShellError> {
        if self.state != ShellState::FirstRunTour {
            return Ok(self.state);
        }
        self.session.mark_tour_seen()?;
        self.state = ShellState::Active(self.active_view);
        info!(view = %self.active_view, "tour lần đầu đã xong");
        Ok(self.state)
    }

    /// Bỏ qua tour có cùng hiệu lực với hoàn tất.
    pub fn skip_tour(&mut self) -> Result<ShellState, ShellError> {
        self.complete_tour()
    }

    /// Chuyển màn hình nếu vai trò hiện tại có quyền; ngược lại giữ nguyên.
    pub fn on_navigate(&mut self, view: ViewId) -> NavigationOutcome {
        let (ShellState::Active(_), Some(identity)) = (self.state, self.identity.as_ref()) else {
            return NavigationOutcome::Ignored;
        };

        if !menu::allows(identity.role, view) {
            warn!(role = %identity.role, %view, "từ chối điều hướng ngoài menu");
            return NavigationOutcome::Refused(view);
        }

        debug!(from = %self.active_view, to = %view, "điều hướng");
        self.active_view = view;
        self.state = ShellState::Active(view);
        NavigationOutcome::Moved(view)
    }

    /// Điều hướng theo tag chuỗi (từ sidebar hoặc bridge JS).
    pub fn on_navigate_tag(&mut self, tag: &str) -> NavigationOutcome {
        match tag.parse::<ViewId>() {
            Ok(view) => self.on_navigate(view),
            Err(err) => {
                warn!(error = %err, "tag màn hình không hợp lệ");
                NavigationOutcome::Unknown
            }
        }
    }

    /// Đăng xuất từ bất kỳ trạng thái nào. Trạng thái trong bộ nhớ luôn được đặt lại,
    /// lỗi lưu trữ (nếu có) được trả về sau đó.
    pub fn on_logout(&mut self) -> Result<(), ShellError> {
        if let Some(identity) = self.identity.take() {
            info!(user_id = %identity.id, "đăng xuất");
        }
        self.active_view = self.config.default_view;
        self.state = ShellState::Unauthenticated;
        self.session.clear_identity()
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Menu của identity hiện tại; rỗng khi chưa đăng nhập.
    pub fn menu(&self) -> Vec<MenuEntry> {
        self.identity
            .as_ref()
            .map(|identity| menu::resolve_menu(identity.role))
            .unwrap_or_default()
    }

    /// Chọn đúng một màn hình để render.
    pub fn screen(&self) -> Screen<'_> {
        match (self.state, self.identity.as_ref()) {
            (ShellState::FirstRunTour, Some(identity)) => Screen::Tour(identity),
            (ShellState::Active(view), Some(identity)) => Screen::View { identity, view },
            _ => Screen::Login,
        }
    }
}
