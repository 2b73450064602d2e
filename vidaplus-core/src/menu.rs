//! Ánh xạ vai trò sang danh sách menu có thứ tự.

use serde::Serialize;

use crate::identity::Role;
use crate::view::ViewId;

/// Biểu tượng của một mục menu. UI tự quyết định cách vẽ.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MenuIcon {
    BarChart,
    Bell,
    Calendar,
    FileText,
    Stethoscope,
    Video,
    UserCircle,
    HelpCircle,
    Users,
    TestTube,
    Home,
    Pill,
    BedDouble,
    DollarSign,
    Shield,
    Settings,
    Info,
    Layout,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MenuEntry {
    pub view: ViewId,
    pub label: &'static str,
    pub icon: MenuIcon,
}

const fn entry(view: ViewId, label: &'static str, icon: MenuIcon) -> MenuEntry {
    MenuEntry { view, label, icon }
}

const COMMON: [MenuEntry; 2] = [
    entry(ViewId::Dashboard, "Dashboard", MenuIcon::BarChart),
    entry(ViewId::Notifications, "Notificações", MenuIcon::Bell),
];

const PATIENT: [MenuEntry; 6] = [
    entry(ViewId::Appointments, "Minhas Consultas", MenuIcon::Calendar),
    entry(ViewId::MedicalRecords, "Prontuário", MenuIcon::FileText),
    entry(ViewId::Prescriptions, "Prescrições", MenuIcon::Stethoscope),
    entry(ViewId::Telemedicine, "Telemedicina", MenuIcon::Video),
    entry(ViewId::Profile, "Meu Perfil", MenuIcon::UserCircle),
    entry(ViewId::Help, "Ajuda", MenuIcon::HelpCircle),
];

const PROFESSIONAL: [MenuEntry; 9] = [
    entry(ViewId::Schedule, "Minha Agenda", MenuIcon::Calendar),
    entry(ViewId::Patients, "Pacientes", MenuIcon::Users),
    entry(ViewId::MedicalRecords, "Prontuários", MenuIcon::FileText),
    entry(ViewId::Prescriptions, "Prescrições", MenuIcon::Stethoscope),
    entry(ViewId::Telemedicine, "Telemedicina", MenuIcon::Video),
    entry(ViewId::Laboratory, "Laboratório", MenuIcon::TestTube),
    entry(ViewId::HomeCare, "Home Care", MenuIcon::Home),
    entry(ViewId::Profile, "Meu Perfil", MenuIcon::UserCircle),
    entry(ViewId::Help, "Ajuda", MenuIcon::HelpCircle),
];

const ADMIN: [MenuEntry; 15] = [
    entry(ViewId::Patients, "Pacientes", MenuIcon::Users),
    entry(ViewId::Professionals, "Profissionais", MenuIcon::Stethoscope),
    entry(ViewId::Appointments, "Agendamentos", MenuIcon::Calendar),
    entry(ViewId::Prescriptions, "Prescrições", MenuIcon::Stethoscope),
    entry(ViewId::Laboratory, "Laboratório", MenuIcon::TestTube),
    entry(ViewId::Pharmacy, "Farmácia", MenuIcon::Pill),
    entry(ViewId::HomeCare, "Home Care", MenuIcon::Home),
    entry(ViewId::Beds, "Gestão de Leitos", MenuIcon::BedDouble),
    entry(ViewId::Billing, "Faturamento", MenuIcon::DollarSign),
    entry(ViewId::Reports, "Relatórios", MenuIcon::BarChart),
    entry(ViewId::Audit, "Auditoria", MenuIcon::Shield),
    entry(ViewId::Settings, "Configurações", MenuIcon::Settings),
    entry(ViewId::Help, "Ajuda", MenuIcon::HelpCircle),
    entry(ViewId::SystemInfo, "Sobre o Sistema", MenuIcon::Info),
    entry(ViewId::Prototypes, "Protótipos", MenuIcon::Layout),
];

/// Hai mục chung cho mọi vai trò: tổng quan và thông báo.
pub fn common_menu() -> Vec<MenuEntry> {
    COMMON.to_vec()
}

/// Menu của một vai trò, theo thứ tự khai báo cố định.
pub fn resolve_menu(role: Role) -> Vec<MenuEntry> {
    let specific: &[MenuEntry] = match role {
        Role::Patient => &PATIENT,
        Role::Professional => &PROFESSIONAL,
        Role::Admin => &ADMIN,
    };
    COMMON.iter().chain(specific).copied().collect()
}

/// Giống `resolve_menu` nhưng nhận tag dạng chuỗi; tag lạ chỉ nhận menu chung.
pub fn resolve_menu_tag(tag: &str) -> Vec<MenuEntry> {
    match tag.parse::<Role>() {
        Ok(role) => resolve_menu(role),
        Err(_) => common_menu(),
    }
}

/// Vai trò có được phép mở màn hình này không.
pub fn allows(role: Role, view: ViewId) -> bool {
    resolve_menu(role).iter().any(|entry| entry.view == view)
}
