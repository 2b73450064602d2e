//! Bridge WASM <-> JavaScript trung lập framework: menu, xác thực demo và một
//! phiên shell giữ trong bộ nhớ mà host tự lưu lại.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use vidaplus_core::{
    DashboardSummary, Identity, MemoryStore, NavigationOutcome, Shell, ShellConfig, ShellError,
    ViewId,
};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsShellConfig {
    #[serde(default)]
    identity_key: Option<String>,
    #[serde(default)]
    tour_key: Option<String>,
    #[serde(default)]
    default_view: Option<String>,
}

impl TryFrom<JsShellConfig> for ShellConfig {
    type Error = ShellError;

    fn try_from(cfg: JsShellConfig) -> Result<Self, Self::Error> {
        let mut base = ShellConfig::default();
        if let Some(key) = cfg.identity_key {
            base.identity_key = key;
        }
        if let Some(key) = cfg.tour_key {
            base.tour_key = key;
        }
        if let Some(tag) = cfg.default_view {
            base.default_view = tag.parse::<ViewId>()?;
        }
        Ok(base)
    }
}

fn parse_config(config: Option<JsValue>) -> Result<ShellConfig, JsValue> {
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsShellConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            ShellConfig::try_from(cfg).map_err(to_js_error)
        }
        _ => Ok(ShellConfig::default()),
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Không serialize kết quả: {err}")))
}

fn to_js_error(err: ShellError) -> JsValue {
    JsValue::from_str(&format!("Shell error: {err}"))
}

fn read_identity(identity: JsValue) -> Result<Identity, JsValue> {
    from_value(identity)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được identity: {err}")))
}

/// Cấu hình mặc định, có thể phủ một phần bằng `overrides`.
#[wasm_bindgen]
pub fn default_config(overrides: Option<JsValue>) -> Result<JsValue, JsValue> {
    let config = parse_config(overrides)?;
    to_js(&config)
}

/// Menu theo tag vai trò; tag lạ chỉ nhận hai mục chung.
#[wasm_bindgen]
pub fn resolve_menu(role: &str) -> Result<JsValue, JsValue> {
    to_js(&vidaplus_core::resolve_menu_tag(role))
}

#[wasm_bindgen]
pub fn authenticate(email: &str, password: &str) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let identity = vidaplus_core::authenticate(email, password).map_err(to_js_error)?;
    to_js(&identity)
}

#[wasm_bindgen]
pub fn demo_accounts() -> Result<JsValue, JsValue> {
    to_js(&vidaplus_core::demo_accounts())
}

#[wasm_bindgen]
pub fn dashboard_summary(identity: JsValue) -> Result<JsValue, JsValue> {
    let identity = read_identity(identity)?;
    to_js(&DashboardSummary::for_identity(&identity))
}

#[wasm_bindgen]
pub fn tour_steps() -> Result<JsValue, JsValue> {
    to_js(&vidaplus_core::tour_steps())
}

#[derive(Serialize)]
struct JsNavigation {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<ViewId>,
}

impl From<NavigationOutcome> for JsNavigation {
    fn from(outcome: NavigationOutcome) -> Self {
        match outcome {
            NavigationOutcome::Moved(view) => Self {
                outcome: "moved",
                view: Some(view),
            },
            NavigationOutcome::Refused(view) => Self {
                outcome: "refused",
                view: Some(view),
            },
            NavigationOutcome::Unknown => Self {
                outcome: "unknown",
                view: None,
            },
            NavigationOutcome::Ignored => Self {
                outcome: "ignored",
                view: None,
            },
        }
    }
}

/// Phiên shell cho host không dùng Yew. Kho phiên nằm trong bộ nhớ;
/// host đọc `entries()` sau mỗi thao tác để tự lưu lại.
#[wasm_bindgen]
pub struct ShellSession {
    inner: Shell<MemoryStore>,
}

#[wasm_bindgen]
impl ShellSession {
    /// `entries` là object `{ khóa: chuỗi }` đã lưu từ lần trước.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>, entries: Option<JsValue>) -> Result<ShellSession, JsValue> {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        let config = parse_config(config)?;
        let entries: HashMap<String, String> = match entries {
            Some(value) if !value.is_undefined() && !value.is_null() => from_value(value)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được entries: {err}")))?,
            _ => HashMap::new(),
        };
        Ok(Self {
            inner: Shell::launch(MemoryStore::from_entries(entries), config),
        })
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.state())
    }

    pub fn identity(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.identity())
    }

    pub fn menu(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.menu())
    }

    pub fn login(&mut self, identity: JsValue) -> Result<JsValue, JsValue> {
        let identity = read_identity(identity)?;
        let state = self.inner.on_login(identity).map_err(to_js_error)?;
        to_js(&state)
    }

    pub fn complete_tour(&mut self) -> Result<JsValue, JsValue> {
        let state = self.inner.complete_tour().map_err(to_js_error)?;
        to_js(&state)
    }

    pub fn skip_tour(&mut self) -> Result<JsValue, JsValue> {
        let state = self.inner.skip_tour().map_err(to_js_error)?;
        to_js(&state)
    }

    pub fn navigate(&mut self, tag: &str) -> Result<JsValue, JsValue> {
        to_js(&JsNavigation::from(self.inner.on_navigate_tag(tag)))
    }

    pub fn logout(&mut self) -> Result<(), JsValue> {
        self.inner.on_logout().map_err(to_js_error)
    }

    /// Bản sao các khóa đang lưu trong kho phiên.
    pub fn entries(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.session().store().entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = JsShellConfig {
            identity_key: Some("vp:user".to_string()),
            tour_key: None,
            default_view: Some("notifications".to_string()),
        };
        let config = ShellConfig::try_from(cfg).expect("config hợp lệ");
        assert_eq!(config.identity_key, "vp:user");
        assert_eq!(config.tour_key, ShellConfig::default().tour_key);
        assert_eq!(config.default_view, ViewId::Notifications);
    }

    #[test]
    fn unknown_default_view_is_rejected() {
        let cfg = JsShellConfig {
            identity_key: None,
            tour_key: None,
            default_view: Some("lobby".to_string()),
        };
        assert!(matches!(
            ShellConfig::try_from(cfg),
            Err(ShellError::UnknownView(tag)) if tag == "lobby"
        ));
    }

    #[test]
    fn navigation_outcome_tags() {
        let moved = JsNavigation::from(NavigationOutcome::Moved(ViewId::Beds));
        assert_eq!(moved.outcome, "moved");
        assert_eq!(moved.view, Some(ViewId::Beds));
        assert_eq!(JsNavigation::from(NavigationOutcome::Unknown).outcome, "unknown");
        assert!(JsNavigation::from(NavigationOutcome::Ignored).view.is_none());
    }
}
