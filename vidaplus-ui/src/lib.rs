//! Giao diện VidaPlus SGHSS cho môi trường WebAssembly.
//!
//! Ứng dụng gồm màn đăng nhập, tour lần đầu và khung chính (sidebar + màn hình lá).
//! Trạng thái điều hướng nằm trong `vidaplus_core::Shell`, lưu phiên qua `localStorage`.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod styles;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::app::{App, AppProps};
    use serde_wasm_bindgen::from_value;
    use vidaplus_core::ShellConfig;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Window};

    /// Mount ứng dụng vào phần tử khớp `selector`.
    ///
    /// `config` có thể là `undefined` hoặc một object chỉ chứa vài trường của `ShellConfig`;
    /// các trường thiếu lấy giá trị mặc định.
    #[wasm_bindgen]
    pub fn mount_app(selector: &str, config: JsValue) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let config: ShellConfig = if config.is_undefined() || config.is_null() {
            ShellConfig::default()
        } else {
            from_value(config)?
        };

        yew::Renderer::<App>::with_root_and_props(target, AppProps { config }).render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_app;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_app(_: &str, _: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "vidaplus-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
