//! Mỗi API `web_sys` được import phải có feature tương ứng trong Cargo.toml,
//! vì web-sys chỉ sinh binding cho feature đã bật.

const MANIFEST: &str = include_str!("../Cargo.toml");

const SOURCES: [(&str, &str); 7] = [
    ("lib.rs", include_str!("../src/lib.rs")),
    ("app.rs", include_str!("../src/app.rs")),
    ("storage.rs", include_str!("../src/storage.rs")),
    ("styles.rs", include_str!("../src/styles.rs")),
    ("views/mod.rs", include_str!("../src/views/mod.rs")),
    ("views/account.rs", include_str!("../src/views/account.rs")),
    ("views/operations.rs", include_str!("../src/views/operations.rs")),
];

fn imported_web_sys_items(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix("use web_sys::"))
        .flat_map(|rest| {
            rest.trim_end_matches(';')
                .trim_matches(|c| c == '{' || c == '}')
                .split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn every_imported_web_sys_api_has_its_feature() {
    let mut missing = Vec::new();
    for (file, source) in SOURCES {
        for item in imported_web_sys_items(source) {
            if !MANIFEST.contains(&format!("\"{item}\"")) {
                missing.push(format!("{file}: {item}"));
            }
        }
    }
    assert!(missing.is_empty(), "Thiếu feature web-sys: {missing:?}");
}

#[test]
fn console_logging_is_enabled() {
    let items: Vec<String> = SOURCES
        .iter()
        .flat_map(|(_, source)| imported_web_sys_items(source))
        .collect();
    assert!(items.iter().any(|item| item == "console"));
    assert!(MANIFEST.contains("\"console\""));
}

#[test]
fn style_injection_has_head_access() {
    let (_, styles) = SOURCES[3];
    assert!(styles.contains("document.head()"));
    for feature in ["Document", "HtmlHeadElement", "Node", "Element"] {
        assert!(
            MANIFEST.contains(&format!("\"{feature}\"")),
            "styles.rs cần feature {feature}"
        );
    }
}
