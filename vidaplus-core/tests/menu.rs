use vidaplus_core::{common_menu, resolve_menu, resolve_menu_tag, MenuEntry, Role, ViewId};

fn views(entries: &[MenuEntry]) -> Vec<ViewId> {
    entries.iter().map(|entry| entry.view).collect()
}

#[test]
fn every_role_gets_common_entries_once() {
    for role in Role::ALL {
        let menu = resolve_menu(role);
        assert!(!menu.is_empty());
        for common in [ViewId::Dashboard, ViewId::Notifications] {
            let count = menu.iter().filter(|entry| entry.view == common).count();
            assert_eq!(count, 1, "{role} phải có đúng một mục {common}");
        }
    }
}

#[test]
fn common_entries_lead_every_menu() {
    for role in Role::ALL {
        let menu = resolve_menu(role);
        assert_eq!(&menu[..2], common_menu().as_slice());
    }
}

#[test]
fn unknown_role_tag_fails_closed() {
    assert_eq!(resolve_menu_tag("superuser"), common_menu());
    assert_eq!(resolve_menu_tag(""), common_menu());
    assert_eq!(resolve_menu_tag("admin"), resolve_menu(Role::Admin));
}

#[test]
fn admin_menu_exposes_management_views() {
    let admin = views(&resolve_menu(Role::Admin));
    for view in [
        ViewId::Patients,
        ViewId::Professionals,
        ViewId::Billing,
        ViewId::Audit,
    ] {
        assert!(admin.contains(&view), "admin thiếu {view}");
    }
}

#[test]
fn admin_menu_ends_with_system_pages() {
    let admin = views(&resolve_menu(Role::Admin));
    assert_eq!(
        &admin[admin.len() - 3..],
        &[ViewId::Help, ViewId::SystemInfo, ViewId::Prototypes]
    );
}

#[test]
fn every_view_is_reachable_by_some_role() {
    for view in ViewId::ALL {
        let reachable = Role::ALL
            .iter()
            .any(|role| views(&resolve_menu(*role)).contains(&view));
        assert!(reachable, "{view} không có trong menu nào");
    }
}

#[test]
fn patient_menu_hides_staff_views() {
    let patient = views(&resolve_menu(Role::Patient));
    assert!(!patient.contains(&ViewId::Professionals));
    assert!(!patient.contains(&ViewId::Audit));
    assert!(patient.contains(&ViewId::Appointments));
}

#[test]
fn professional_menu_keeps_declaration_order() {
    let expected = vec![
        ViewId::Dashboard,
        ViewId::Notifications,
        ViewId::Schedule,
        ViewId::Patients,
        ViewId::MedicalRecords,
        ViewId::Prescriptions,
        ViewId::Telemedicine,
        ViewId::Laboratory,
        ViewId::HomeCare,
        ViewId::Profile,
        ViewId::Help,
    ];
    assert_eq!(views(&resolve_menu(Role::Professional)), expected);
    assert_eq!(resolve_menu(Role::Professional), resolve_menu(Role::Professional));
}

#[test]
fn labels_follow_role_wording() {
    let patient = resolve_menu(Role::Patient);
    let records = patient
        .iter()
        .find(|entry| entry.view == ViewId::MedicalRecords)
        .expect("Thiếu mục prontuário");
    assert_eq!(records.label, "Prontuário");

    let professional = resolve_menu(Role::Professional);
    let records = professional
        .iter()
        .find(|entry| entry.view == ViewId::MedicalRecords)
        .expect("Thiếu mục prontuário");
    assert_eq!(records.label, "Prontuários");
}

#[test]
fn view_tags_parse_back() {
    for view in ViewId::ALL {
        assert_eq!(view.as_str().parse::<ViewId>().ok(), Some(view));
    }
    assert!("unknown-view".parse::<ViewId>().is_err());
}
