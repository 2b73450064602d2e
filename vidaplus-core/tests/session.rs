use vidaplus_core::{quick_login, KeyValueStore, MemoryStore, Role, SessionStore, ShellConfig};

#[test]
fn stored_identity_round_trips() {
    let mut session = SessionStore::new(MemoryStore::new());
    let identity = quick_login(Role::Professional);

    session.set_identity(&identity).expect("Không lưu được identity");

    assert_eq!(session.get_identity(), Some(identity));
}

#[test]
fn set_identity_overwrites_previous_value() {
    let mut session = SessionStore::new(MemoryStore::new());
    session
        .set_identity(&quick_login(Role::Patient))
        .expect("Không lưu được identity");
    session
        .set_identity(&quick_login(Role::Admin))
        .expect("Không lưu được identity");

    let stored = session.get_identity().expect("Thiếu identity");
    assert_eq!(stored.role, Role::Admin);
}

#[test]
fn clear_identity_removes_persisted_slot() {
    let mut session = SessionStore::new(MemoryStore::new());
    session
        .set_identity(&quick_login(Role::Patient))
        .expect("Không lưu được identity");

    session.clear_identity().expect("Không xóa được identity");
    session.clear_identity().expect("Xóa lần hai phải thành công");

    assert_eq!(session.get_identity(), None);
    assert!(session.store().get("currentUser").is_none());
}

#[test]
fn corrupt_slot_reads_as_none() {
    let mut store = MemoryStore::new();
    store
        .set("currentUser", "{not json")
        .expect("Không ghi được giá trị");
    let session = SessionStore::new(store);

    assert_eq!(session.get_identity(), None);
}

#[test]
fn reads_identity_written_in_original_layout() {
    let mut store = MemoryStore::new();
    let raw = r#"{"id":"2","name":"Maria Santos","email":"maria.santos@email.com","role":"patient","cpf":"987.654.321-00","phone":"(11) 91234-5678"}"#;
    store.set("currentUser", raw).expect("Không ghi được giá trị");
    let session = SessionStore::new(store);

    let identity = session.get_identity().expect("Thiếu identity");
    assert_eq!(identity.name, "Maria Santos");
    assert_eq!(identity.role, Role::Patient);
    assert_eq!(identity.specialty, None);
}

#[test]
fn tour_flag_uses_configured_key() {
    let config = ShellConfig {
        tour_key: "tour".to_string(),
        ..ShellConfig::default()
    };
    let mut session = SessionStore::with_config(MemoryStore::new(), &config);
    assert!(!session.tour_seen());

    session.mark_tour_seen().expect("Không ghi được cờ tour");

    assert!(session.tour_seen());
    assert_eq!(session.store().get("tour").as_deref(), Some("true"));
}

#[test]
fn empty_tour_flag_counts_as_absent() {
    let mut store = MemoryStore::new();
    store.set("hasSeenOnboarding", "").expect("Không ghi được giá trị");

    assert!(!SessionStore::new(store).tour_seen());
}
