use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{matches_query, parse_fixture, Record, Repository};

const FIXTURE: &str = include_str!("../data/appointments.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub professional_id: String,
    pub professional_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentKind {
    Consulta,
    Exame,
    Teleconsulta,
    Retorno,
}

impl AppointmentKind {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentKind::Consulta => "Consulta",
            AppointmentKind::Exame => "Exame",
            AppointmentKind::Teleconsulta => "Teleconsulta",
            AppointmentKind::Retorno => "Retorno",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Agendado,
    Confirmado,
    EmAndamento,
    Concluido,
    Cancelado,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        AppointmentStatus::Agendado,
        AppointmentStatus::Confirmado,
        AppointmentStatus::EmAndamento,
        AppointmentStatus::Concluido,
        AppointmentStatus::Cancelado,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Agendado => "agendado",
            AppointmentStatus::Confirmado => "confirmado",
            AppointmentStatus::EmAndamento => "em-andamento",
            AppointmentStatus::Concluido => "concluido",
            AppointmentStatus::Cancelado => "cancelado",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Agendado => "Agendado",
            AppointmentStatus::Confirmado => "Confirmado",
            AppointmentStatus::EmAndamento => "Em Andamento",
            AppointmentStatus::Concluido => "Concluído",
            AppointmentStatus::Cancelado => "Cancelado",
        }
    }
}

impl Record for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn load_appointments() -> Result<Repository<Appointment>, ShellError> {
    parse_fixture("appointments", FIXTURE).map(Repository::new)
}

/// Tìm theo bệnh nhân, bác sĩ hoặc chuyên khoa; `status = None` nghĩa là mọi trạng thái.
pub fn filter_appointments<'a>(
    repo: &'a Repository<Appointment>,
    query: &str,
    status: Option<AppointmentStatus>,
) -> Vec<&'a Appointment> {
    repo.filter(|apt| {
        let matches_search = matches_query(
            query,
            &[
                apt.patient_name.as_str(),
                apt.professional_name.as_str(),
                apt.specialty.as_str(),
            ],
        );
        matches_search && status.map_or(true, |wanted| apt.status == wanted)
    })
}

pub fn count_by_status(repo: &Repository<Appointment>, status: AppointmentStatus) -> usize {
    repo.items().iter().filter(|apt| apt.status == status).count()
}

/// Lịch của một bác sĩ theo tên, sắp theo ngày rồi giờ.
pub fn schedule_for<'a>(
    repo: &'a Repository<Appointment>,
    professional_name: &str,
) -> Vec<&'a Appointment> {
    let mut agenda = repo.filter(|apt| apt.professional_name == professional_name);
    agenda.sort_by(|a, b| (a.date, a.time.as_str()).cmp(&(b.date, b.time.as_str())));
    agenda
}

/// Lịch hẹn của một bệnh nhân theo tên.
pub fn appointments_for_patient<'a>(
    repo: &'a Repository<Appointment>,
    patient_name: &str,
) -> Vec<&'a Appointment> {
    repo.filter(|apt| apt.patient_name == patient_name)
}
