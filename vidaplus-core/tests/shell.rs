use vidaplus_core::{
    authenticate, quick_login, DashboardSummary, KeyValueStore, MemoryStore, NavigationOutcome,
    Role, Screen, Shell, ShellConfig, ShellError, ShellState, ViewId,
};

fn fresh_shell() -> Shell<MemoryStore> {
    Shell::new(MemoryStore::new(), ShellConfig::default())
}

fn active_shell(role: Role) -> Shell<MemoryStore> {
    let mut shell = fresh_shell();
    shell.on_login(quick_login(role)).expect("Đăng nhập thất bại");
    shell.complete_tour().expect("Không hoàn tất được tour");
    shell
}

#[test]
fn starts_unauthenticated_on_login_screen() {
    let shell = fresh_shell();
    assert_eq!(shell.state(), ShellState::Unauthenticated);
    assert_eq!(shell.screen(), Screen::Login);
    assert!(shell.menu().is_empty());
}

#[test]
fn first_login_interposes_tour() {
    let mut shell = fresh_shell();

    let state = shell
        .on_login(quick_login(Role::Patient))
        .expect("Đăng nhập thất bại");

    assert_eq!(state, ShellState::FirstRunTour);
    assert!(matches!(shell.screen(), Screen::Tour(_)));
}

#[test]
fn completing_tour_lands_on_summary() {
    let mut shell = fresh_shell();
    shell
        .on_login(quick_login(Role::Patient))
        .expect("Đăng nhập thất bại");

    let state = shell.complete_tour().expect("Không hoàn tất được tour");

    assert_eq!(state, ShellState::Active(ViewId::Dashboard));
    assert!(shell.session().tour_seen());
}

#[test]
fn skipping_tour_lands_on_summary() {
    let mut shell = fresh_shell();
    shell
        .on_login(quick_login(Role::Admin))
        .expect("Đăng nhập thất bại");

    let state = shell.skip_tour().expect("Không bỏ qua được tour");

    assert_eq!(state, ShellState::Active(ViewId::Dashboard));
}

#[test]
fn tour_shows_only_once_per_persisted_context() {
    let mut shell = active_shell(Role::Patient);
    shell.on_logout().expect("Đăng xuất thất bại");

    let state = shell
        .on_login(quick_login(Role::Professional))
        .expect("Đăng nhập thất bại");

    assert_eq!(state, ShellState::Active(ViewId::Dashboard));
}

#[test]
fn complete_tour_outside_tour_is_noop() {
    let mut shell = fresh_shell();
    assert_eq!(
        shell.complete_tour().expect("Không được lỗi"),
        ShellState::Unauthenticated
    );
    assert!(!shell.session().tour_seen());
}

#[test]
fn navigation_within_menu_moves() {
    let mut shell = active_shell(Role::Admin);

    let outcome = shell.on_navigate(ViewId::Billing);

    assert_eq!(outcome, NavigationOutcome::Moved(ViewId::Billing));
    assert_eq!(shell.state(), ShellState::Active(ViewId::Billing));
    assert_eq!(shell.active_view(), ViewId::Billing);
}

#[test]
fn navigation_outside_menu_keeps_current_view() {
    let mut shell = active_shell(Role::Patient);
    shell.on_navigate(ViewId::Telemedicine);

    let outcome = shell.on_navigate(ViewId::Audit);

    assert_eq!(outcome, NavigationOutcome::Refused(ViewId::Audit));
    assert_eq!(shell.state(), ShellState::Active(ViewId::Telemedicine));
}

#[test]
fn unknown_tag_keeps_current_view() {
    let mut shell = active_shell(Role::Professional);
    shell.on_navigate_tag("laboratory");

    assert_eq!(shell.on_navigate_tag("nowhere"), NavigationOutcome::Unknown);
    assert_eq!(shell.state(), ShellState::Active(ViewId::Laboratory));
}

#[test]
fn navigation_ignored_before_activation() {
    let mut shell = fresh_shell();
    assert_eq!(
        shell.on_navigate(ViewId::Dashboard),
        NavigationOutcome::Ignored
    );

    shell
        .on_login(quick_login(Role::Admin))
        .expect("Đăng nhập thất bại");
    assert_eq!(shell.on_navigate(ViewId::Audit), NavigationOutcome::Ignored);
    assert_eq!(shell.state(), ShellState::FirstRunTour);
}

#[test]
fn logout_from_any_state_clears_session() {
    let mut shell = active_shell(Role::Admin);
    shell.on_navigate(ViewId::Audit);

    shell.on_logout().expect("Đăng xuất thất bại");

    assert_eq!(shell.state(), ShellState::Unauthenticated);
    assert_eq!(shell.active_view(), ViewId::Dashboard);
    assert_eq!(shell.identity(), None);
    assert_eq!(shell.session().get_identity(), None);

    let mut touring = fresh_shell();
    touring
        .on_login(quick_login(Role::Patient))
        .expect("Đăng nhập thất bại");
    touring.on_logout().expect("Đăng xuất thất bại");
    assert_eq!(touring.state(), ShellState::Unauthenticated);

    fresh_shell().on_logout().expect("Đăng xuất khi chưa đăng nhập phải ổn");
}

#[test]
fn launch_restores_persisted_identity() {
    let mut store = MemoryStore::new();
    let raw = serde_json::to_string(&quick_login(Role::Professional))
        .expect("Không serialize được identity");
    store.set("currentUser", &raw).expect("Không ghi được giá trị");
    store
        .set("hasSeenOnboarding", "true")
        .expect("Không ghi được giá trị");

    let shell = Shell::launch(store, ShellConfig::default());

    assert_eq!(shell.state(), ShellState::Active(ViewId::Dashboard));
    let identity = shell.identity().expect("Thiếu identity");
    assert_eq!(identity.role, Role::Professional);
}

#[test]
fn launch_without_tour_flag_shows_tour() {
    let mut store = MemoryStore::new();
    let raw =
        serde_json::to_string(&quick_login(Role::Patient)).expect("Không serialize được identity");
    store.set("currentUser", &raw).expect("Không ghi được giá trị");

    let shell = Shell::launch(store, ShellConfig::default());

    assert_eq!(shell.state(), ShellState::FirstRunTour);
}

#[test]
fn launch_with_empty_store_stays_on_login() {
    let shell = Shell::launch(MemoryStore::new(), ShellConfig::default());
    assert_eq!(shell.state(), ShellState::Unauthenticated);
}

#[test]
fn relogin_resets_active_view() {
    let mut shell = active_shell(Role::Admin);
    shell.on_navigate(ViewId::Pharmacy);

    shell
        .on_login(quick_login(Role::Patient))
        .expect("Đăng nhập thất bại");

    assert_eq!(shell.state(), ShellState::Active(ViewId::Dashboard));
}

#[test]
fn screen_mounts_active_view_with_identity() {
    let mut shell = active_shell(Role::Professional);
    shell.on_navigate(ViewId::Schedule);

    match shell.screen() {
        Screen::View { identity, view } => {
            assert_eq!(view, ViewId::Schedule);
            assert_eq!(identity.name, "Dr. Carlos Silva");
        }
        other => panic!("Màn hình không mong đợi: {other:?}"),
    }
}

#[test]
fn authenticate_accepts_demo_email_only() {
    let identity =
        authenticate("admin@vidaplus.com", "qualquer").expect("Tài khoản demo phải hợp lệ");
    assert_eq!(identity.role, Role::Admin);

    let err = authenticate("ADMIN@vidaplus.com", "x").expect_err("E-mail phân biệt hoa thường");
    assert!(matches!(err, ShellError::InvalidCredentials));
    assert_eq!(err.to_string(), "Credenciais inválidas. Tente novamente.");
}

#[test]
fn dashboard_branches_on_role() {
    let patient = DashboardSummary::for_identity(&quick_login(Role::Patient));
    assert_eq!(patient.greeting, "Bem-vindo, Maria!");
    assert_eq!(patient.agenda_title, "Próximos Compromissos");
    assert_eq!(patient.upcoming[0].detail, "Dr. Carlos Silva");

    let admin = DashboardSummary::for_identity(&quick_login(Role::Admin));
    assert_eq!(admin.stats.len(), 4);
    assert_eq!(admin.stats[2].value, "87%");
}

#[test]
fn default_view_outside_role_menu_falls_back_to_dashboard() {
    let config = ShellConfig {
        default_view: ViewId::Audit,
        ..ShellConfig::default()
    };
    let mut shell = Shell::new(MemoryStore::new(), config);
    shell
        .on_login(quick_login(Role::Patient))
        .expect("Đăng nhập thất bại");

    let state = shell.complete_tour().expect("Không hoàn tất được tour");

    assert_eq!(state, ShellState::Active(ViewId::Dashboard));
    assert_eq!(shell.active_view(), ViewId::Dashboard);
}

#[test]
fn default_view_inside_role_menu_is_honored() {
    let config = ShellConfig {
        default_view: ViewId::Audit,
        ..ShellConfig::default()
    };
    let mut shell = Shell::new(MemoryStore::new(), config);
    shell
        .on_login(quick_login(Role::Admin))
        .expect("Đăng nhập thất bại");

    let state = shell.skip_tour().expect("Không bỏ qua được tour");

    assert_eq!(state, ShellState::Active(ViewId::Audit));
}
