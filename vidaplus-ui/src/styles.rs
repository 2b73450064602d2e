#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use web_sys::Document;

const STYLE_MARKER: &str = "data-vidaplus-ui";
const STYLE_VERSION: &str = "1";

/// CSS mặc định của shell, dùng biến `--vp-*` để dễ ghi đè.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --vp-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --vp-bg: #f5f7fb;
  --vp-card-bg: #ffffff;
  --vp-card-border: rgba(148, 163, 184, 0.28);
  --vp-radius: 14px;
  --vp-text: #1f2933;
  --vp-muted: #52606d;
  --vp-heading: #11181c;
  --vp-surface: #f8fafc;
  --vp-primary: #2563eb;
  --vp-primary-soft: rgba(37, 99, 235, 0.1);
  --vp-sidebar-width: 264px;
  --vp-tone-blue: #2563eb;
  --vp-tone-green: #059669;
  --vp-tone-orange: #dc6803;
  --vp-tone-purple: #7c3aed;
  --vp-tone-red: #b42318;
  --vp-tone-gray: #475467;
  --vp-level-critical: #b42318;
  --vp-level-critical-bg: rgba(180, 35, 24, 0.1);
  --vp-level-high: #dc6803;
  --vp-level-high-bg: rgba(220, 104, 3, 0.12);
  --vp-level-moderate: #067647;
  --vp-level-moderate-bg: rgba(6, 118, 71, 0.12);
  --vp-level-low: #0b5394;
  --vp-level-low-bg: rgba(11, 83, 148, 0.12);
  --vp-level-info: #475467;
  --vp-level-info-bg: rgba(71, 84, 103, 0.12);
}

body {
  margin: 0;
  font-family: var(--vp-font-family);
  background: var(--vp-bg);
  color: var(--vp-text);
}

h1, h2, h3 {
  color: var(--vp-heading);
  margin: 0;
}

.muted {
  color: var(--vp-muted);
  font-size: 0.88rem;
}

.block {
  display: block;
}

.mono {
  font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
  font-size: 0.85rem;
}

/* Buttons */

.button {
  border: 1px solid transparent;
  border-radius: 10px;
  padding: 9px 16px;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background 120ms ease, border-color 120ms ease;
}

.button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.button.primary {
  background: var(--vp-primary);
  color: #ffffff;
}

.button.primary:hover {
  background: #1d4ed8;
}

.button.outline {
  background: transparent;
  border-color: var(--vp-card-border);
  color: var(--vp-text);
}

.button.outline:hover {
  background: var(--vp-surface);
}

.button.danger {
  background: var(--vp-level-critical);
  color: #ffffff;
}

.link-button {
  background: none;
  border: none;
  padding: 0;
  font: inherit;
  color: var(--vp-primary);
  cursor: pointer;
}

.link-button.danger {
  color: var(--vp-level-critical);
}

/* Login */

.login-page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 16px;
  background: linear-gradient(135deg, #eff6ff 0%, #ecfdf5 100%);
}

.login-card {
  width: min(420px, 92vw);
  background: var(--vp-card-bg);
  border-radius: var(--vp-radius);
  box-shadow: 0 24px 48px rgba(15, 23, 42, 0.12);
  padding: 32px;
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.login-brand {
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 6px;
}

.brand-mark {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 44px;
  height: 44px;
  border-radius: 12px;
  background: var(--vp-primary);
  color: #ffffff;
  font-size: 1.3rem;
}

.login-form {
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.login-form label,
.form-grid label {
  display: flex;
  flex-direction: column;
  gap: 6px;
  font-size: 0.9rem;
  font-weight: 600;
}

.login-form input,
.form-grid input,
.form-grid textarea,
.search,
.select {
  border: 1px solid var(--vp-card-border);
  border-radius: 10px;
  padding: 9px 12px;
  font: inherit;
  background: #ffffff;
}

.login-error {
  color: var(--vp-level-critical);
  background: var(--vp-level-critical-bg);
  border-radius: 8px;
  padding: 8px 12px;
  margin: 0;
}

.login-demo {
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.login-divider {
  text-align: center;
  color: var(--vp-muted);
  font-size: 0.85rem;
}

.login-footnote {
  color: var(--vp-muted);
  font-size: 0.8rem;
}

/* Tour */

.tour-overlay {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 20;
}

.tour-card {
  width: min(560px, 92vw);
  background: var(--vp-card-bg);
  border-radius: var(--vp-radius);
  padding: 28px;
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.tour-header,
.tour-footer {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.tour-eyebrow {
  color: var(--vp-primary);
  font-weight: 600;
}

.tour-progress {
  height: 6px;
  border-radius: 999px;
  background: var(--vp-surface);
  overflow: hidden;
}

.tour-progress-bar {
  height: 100%;
  background: var(--vp-primary);
  transition: width 200ms ease;
}

.tour-description {
  color: var(--vp-muted);
  margin: 0;
}

.tour-highlights {
  margin: 0;
  padding-left: 20px;
  display: grid;
  gap: 4px;
}

.tour-counter {
  color: var(--vp-muted);
  font-size: 0.85rem;
}

.tour-actions {
  display: flex;
  gap: 8px;
}

/* Layout */

.app-layout {
  display: grid;
  grid-template-columns: var(--vp-sidebar-width) 1fr;
  min-height: 100vh;
}

.app-main {
  overflow-y: auto;
}

.sidebar {
  background: var(--vp-card-bg);
  border-right: 1px solid var(--vp-card-border);
  display: flex;
  flex-direction: column;
  position: sticky;
  top: 0;
  height: 100vh;
}

.sidebar-brand {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 20px;
  border-bottom: 1px solid var(--vp-card-border);
}

.sidebar-menu {
  flex: 1;
  overflow-y: auto;
  padding: 12px;
  display: flex;
  flex-direction: column;
  gap: 2px;
}

.menu-item {
  display: flex;
  align-items: center;
  gap: 10px;
  width: 100%;
  border: none;
  background: none;
  border-radius: 10px;
  padding: 9px 12px;
  font: inherit;
  color: var(--vp-text);
  text-align: left;
  cursor: pointer;
}

.menu-item:hover {
  background: var(--vp-surface);
}

.menu-item.is-active {
  background: var(--vp-primary-soft);
  color: var(--vp-primary);
  font-weight: 600;
}

.menu-icon {
  width: 22px;
  text-align: center;
}

.sidebar-user {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 16px;
  border-top: 1px solid var(--vp-card-border);
}

.sidebar-user-text {
  flex: 1;
  min-width: 0;
  display: flex;
  flex-direction: column;
}

.avatar {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  border-radius: 50%;
  background: var(--vp-primary-soft);
  color: var(--vp-primary);
  font-weight: 700;
}

.avatar.large {
  width: 64px;
  height: 64px;
  font-size: 1.4rem;
}

/* Pages */

.page {
  padding: 32px;
  max-width: 1200px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.page-header p {
  color: var(--vp-muted);
  margin: 4px 0 0;
}

.stat-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 16px;
}

.stat-card {
  background: var(--vp-card-bg);
  border: 1px solid var(--vp-card-border);
  border-left: 4px solid var(--vp-tone-blue);
  border-radius: var(--vp-radius);
  padding: 16px 18px;
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.stat-card[data-tone='green'] { border-left-color: var(--vp-tone-green); }
.stat-card[data-tone='orange'] { border-left-color: var(--vp-tone-orange); }
.stat-card[data-tone='purple'] { border-left-color: var(--vp-tone-purple); }

.stat-title {
  color: var(--vp-muted);
  font-size: 0.88rem;
}

.stat-value {
  font-size: 1.5rem;
}

.card {
  background: var(--vp-card-bg);
  border: 1px solid var(--vp-card-border);
  border-radius: var(--vp-radius);
  padding: 20px;
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.card-header p {
  color: var(--vp-muted);
  margin: 4px 0 0;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 16px;
}

.card-grid.wide {
  grid-template-columns: 2fr 1fr;
}

.profile-card {
  flex-direction: row;
  align-items: center;
  gap: 18px;
}

.toolbar {
  display: flex;
  flex-wrap: wrap;
  gap: 10px;
  align-items: center;
}

.search {
  flex: 1;
  min-width: 240px;
}

.tab {
  border: 1px solid var(--vp-card-border);
  background: var(--vp-card-bg);
  border-radius: 999px;
  padding: 6px 14px;
  font: inherit;
  cursor: pointer;
}

.tab.is-active {
  background: var(--vp-primary);
  border-color: var(--vp-primary);
  color: #ffffff;
}

.row-start {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
  align-items: center;
}

.row-end {
  display: flex;
  gap: 12px;
  justify-content: flex-end;
  align-items: center;
}

/* Tables and lists */

.table {
  width: 100%;
  border-collapse: collapse;
  font-size: 0.92rem;
}

.table th {
  text-align: left;
  color: var(--vp-muted);
  font-weight: 600;
  padding: 10px;
  border-bottom: 1px solid var(--vp-card-border);
}

.table td {
  padding: 10px;
  border-bottom: 1px solid var(--vp-card-border);
  vertical-align: top;
}

.table.compact td,
.table.compact th {
  padding: 6px 8px;
}

.table tr.clickable {
  cursor: pointer;
}

.table tr.clickable:hover {
  background: var(--vp-surface);
}

.empty {
  text-align: center;
  color: var(--vp-muted);
  padding: 24px;
}

.list {
  list-style: none;
  margin: 0;
  padding: 0;
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.list.compact {
  gap: 4px;
}

.list-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 12px;
  padding: 8px 0;
  border-bottom: 1px dashed var(--vp-card-border);
}

.list-row > div {
  display: flex;
  flex-direction: column;
}

.facts {
  display: grid;
  grid-template-columns: max-content 1fr;
  gap: 6px 16px;
  margin: 0;
}

.facts dt {
  color: var(--vp-muted);
}

.facts dd {
  margin: 0;
}

/* Badges */

.badge {
  display: inline-flex;
  align-items: center;
  border-radius: 999px;
  padding: 2px 10px;
  font-size: 0.78rem;
  font-weight: 600;
  color: var(--vp-level-info);
  background: var(--vp-level-info-bg);
}

.badge[data-level='critical'] { color: var(--vp-level-critical); background: var(--vp-level-critical-bg); }
.badge[data-level='high'] { color: var(--vp-level-high); background: var(--vp-level-high-bg); }
.badge[data-level='moderate'] { color: var(--vp-level-moderate); background: var(--vp-level-moderate-bg); }
.badge[data-level='low'] { color: var(--vp-level-low); background: var(--vp-level-low-bg); }

.badge[data-tone='green'] { color: var(--vp-tone-green); background: var(--vp-level-moderate-bg); }
.badge[data-tone='red'] { color: var(--vp-tone-red); background: var(--vp-level-critical-bg); }
.badge[data-tone='blue'] { color: var(--vp-tone-blue); background: var(--vp-primary-soft); }
.badge[data-tone='orange'] { color: var(--vp-tone-orange); background: var(--vp-level-high-bg); }

.pill,
.chip {
  display: inline-flex;
  align-items: center;
  border-radius: 999px;
  padding: 3px 10px;
  font-size: 0.8rem;
  background: var(--vp-surface);
  border: 1px solid var(--vp-card-border);
  margin-right: 4px;
}

.notice {
  border-radius: 10px;
  padding: 10px 14px;
  margin: 0;
  color: var(--vp-level-info);
  background: var(--vp-level-info-bg);
}

.notice[data-level='critical'] { color: var(--vp-level-critical); background: var(--vp-level-critical-bg); }
.notice[data-level='moderate'] { color: var(--vp-level-moderate); background: var(--vp-level-moderate-bg); }

.meter {
  height: 6px;
  border-radius: 999px;
  background: var(--vp-surface);
  overflow: hidden;
  margin: 4px 0;
  min-width: 80px;
}

.meter-fill {
  height: 100%;
  background: var(--vp-primary);
}

/* Module specifics */

.bed-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 12px;
}

.bed-card {
  background: var(--vp-card-bg);
  border: 1px solid var(--vp-card-border);
  border-top: 4px solid var(--vp-level-info);
  border-radius: var(--vp-radius);
  padding: 14px;
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.bed-card[data-level='critical'] { border-top-color: var(--vp-level-critical); }
.bed-card[data-level='high'] { border-top-color: var(--vp-level-high); }
.bed-card[data-level='moderate'] { border-top-color: var(--vp-level-moderate); }

.notification {
  flex-direction: row;
  align-items: flex-start;
}

.notification.is-unread {
  border-left: 4px solid var(--vp-primary);
}

.notification-body {
  flex: 1;
}

.notification-body p {
  margin: 4px 0;
}

.form-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 12px;
}

.form-grid.single {
  grid-template-columns: 1fr;
}

.toggle-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 6px 0;
}

.faq-group {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.faq-item {
  border: 1px solid var(--vp-card-border);
  border-radius: 10px;
  padding: 10px 14px;
}

.faq-item summary {
  cursor: pointer;
  font-weight: 600;
}

.call-room {
  display: grid;
  gap: 12px;
}

.call-video {
  aspect-ratio: 16 / 9;
  border-radius: var(--vp-radius);
  background: #0f172a;
  color: #e2e8f0;
  display: flex;
  align-items: center;
  justify-content: center;
}

.call-video[data-off='true'] {
  background: #334155;
}

.call-controls {
  display: flex;
  justify-content: center;
  gap: 10px;
}

@media (max-width: 900px) {
  .app-layout {
    grid-template-columns: 1fr;
  }

  .sidebar {
    position: static;
    height: auto;
  }

  .card-grid.wide {
    grid-template-columns: 1fr;
  }

  .page {
    padding: 18px;
  }
}
"#;

/// Gắn CSS vào `<head>` đúng một lần. Thẻ đã có nhưng khác phiên bản thì được
/// thay nội dung tại chỗ.
pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if let Some(existing) = document.query_selector(&format!("style[{STYLE_MARKER}]"))? {
        if existing.get_attribute(STYLE_MARKER).as_deref() != Some(STYLE_VERSION) {
            existing.set_attribute(STYLE_MARKER, STYLE_VERSION)?;
            existing.set_text_content(Some(DEFAULT_STYLES));
        }
        return Ok(());
    }

    let Some(head) = document.head() else {
        return Err(JsValue::from_str("Trang không có <head> để gắn CSS"));
    };
    let style = document.create_element("style")?;
    style.set_attribute(STYLE_MARKER, STYLE_VERSION)?;
    style.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style)?;
    Ok(())
}
