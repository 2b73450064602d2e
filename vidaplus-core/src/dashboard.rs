//! Nội dung màn hình tổng quan, phân nhánh theo vai trò.

use serde::Serialize;

use crate::identity::{Identity, Role};

/// Thẻ số liệu ở đầu trang.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Khóa màu cho UI (`blue`, `green`, `orange`, `purple`).
    pub tone: &'static str,
}

/// Một dòng trong danh sách lịch sắp tới.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingItem {
    pub title: &'static str,
    pub time: &'static str,
    /// Bác sĩ phụ trách (bệnh nhân) hoặc loại hoạt động (các vai trò khác).
    pub detail: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub greeting: String,
    pub subtitle: &'static str,
    pub stats: Vec<StatCard>,
    pub agenda_title: &'static str,
    pub agenda_description: &'static str,
    pub upcoming: Vec<UpcomingItem>,
}

const fn stat(title: &'static str, value: &'static str, tone: &'static str) -> StatCard {
    StatCard { title, value, tone }
}

const fn item(title: &'static str, time: &'static str, detail: &'static str) -> UpcomingItem {
    UpcomingItem { title, time, detail }
}

impl DashboardSummary {
    pub fn for_identity(identity: &Identity) -> Self {
        let greeting = format!("Bem-vindo, {}!", identity.first_name());
        match identity.role {
            Role::Patient => Self {
                greeting,
                subtitle: "Gerencie suas consultas, exames e acompanhe seu histórico médico.",
                stats: vec![
                    stat("Próximas Consultas", "3", "blue"),
                    stat("Exames Pendentes", "2", "orange"),
                    stat("Prescrições Ativas", "4", "green"),
                    stat("Teleconsultas", "1", "purple"),
                ],
                agenda_title: "Próximos Compromissos",
                agenda_description: "Suas próximas consultas e exames",
                upcoming: vec![
                    item("Consulta - Cardiologia", "Hoje, 14:00", "Dr. Carlos Silva"),
                    item("Exame de Sangue", "Amanhã, 08:00", "Laboratório Central"),
                    item("Teleconsulta - Dermatologia", "03/12, 10:00", "Dra. Ana Costa"),
                ],
            },
            Role::Professional => Self {
                greeting,
                subtitle: "Visualize sua agenda e gerencie seus pacientes.",
                stats: vec![
                    stat("Consultas Hoje", "12", "blue"),
                    stat("Pacientes Ativos", "89", "green"),
                    stat("Prontuários Pendentes", "3", "orange"),
                    stat("Teleconsultas", "5", "purple"),
                ],
                agenda_title: "Agenda de Hoje",
                agenda_description: "Atendimentos agendados para hoje",
                upcoming: vec![
                    item("João Pedro Silva", "10:00 - 10:30", "Consulta"),
                    item("Maria Santos", "10:30 - 11:00", "Retorno"),
                    item("Carlos Alberto", "11:00 - 11:30", "Teleconsulta"),
                    item("Ana Paula", "14:00 - 14:30", "Consulta"),
                ],
            },
            Role::Admin => Self {
                greeting,
                subtitle: "Acompanhe os indicadores e gerencie o sistema hospitalar.",
                stats: vec![
                    stat("Total de Pacientes", "1,234", "blue"),
                    stat("Profissionais Ativos", "156", "green"),
                    stat("Taxa de Ocupação", "87%", "orange"),
                    stat("Consultas do Mês", "3,456", "purple"),
                ],
                agenda_title: "Atividades Programadas",
                agenda_description: "Reuniões e tarefas do dia",
                upcoming: vec![
                    item("Reunião Administrativa", "10:00", "Gestão"),
                    item("Análise de Indicadores", "14:00", "Relatórios"),
                    item("Auditoria LGPD", "16:00", "Compliance"),
                ],
            },
        }
    }
}
