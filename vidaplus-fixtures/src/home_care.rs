use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{matches_query, parse_fixture, Record, Repository};

const FIXTURE: &str = include_str!("../data/home_care_visits.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HomeCareVisit {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub address: String,
    pub date: NaiveDate,
    pub time: String,
    pub professional_name: String,
    pub service_type: String,
    pub status: VisitStatus,
    pub priority: VisitPriority,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub procedures: Vec<String>,
    #[serde(default)]
    pub vital_signs: Option<VitalSigns>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub oxygen_saturation: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum VisitStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl VisitStatus {
    pub const ALL: [VisitStatus; 4] = [
        VisitStatus::Scheduled,
        VisitStatus::InProgress,
        VisitStatus::Completed,
        VisitStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "scheduled",
            VisitStatus::InProgress => "in-progress",
            VisitStatus::Completed => "completed",
            VisitStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "Agendada",
            VisitStatus::InProgress => "Em Andamento",
            VisitStatus::Completed => "Concluída",
            VisitStatus::Cancelled => "Cancelada",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VisitPriority {
    Normal,
    High,
    Urgent,
}

impl VisitPriority {
    pub fn label(self) -> &'static str {
        match self {
            VisitPriority::Normal => "Normal",
            VisitPriority::High => "Alta",
            VisitPriority::Urgent => "Urgente",
        }
    }
}

impl Record for HomeCareVisit {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn load_home_care_visits() -> Result<Repository<HomeCareVisit>, ShellError> {
    parse_fixture("home_care_visits", FIXTURE).map(Repository::new)
}

/// Tìm theo bệnh nhân, nhân viên hoặc loại dịch vụ.
pub fn filter_visits<'a>(
    repo: &'a Repository<HomeCareVisit>,
    query: &str,
    status: Option<VisitStatus>,
) -> Vec<&'a HomeCareVisit> {
    repo.filter(|visit| {
        matches_query(
            query,
            &[
                visit.patient_name.as_str(),
                visit.professional_name.as_str(),
                visit.service_type.as_str(),
            ],
        ) && status.map_or(true, |wanted| visit.status == wanted)
    })
}

pub fn count_visits(repo: &Repository<HomeCareVisit>, status: VisitStatus) -> usize {
    repo.items()
        .iter()
        .filter(|visit| visit.status == status)
        .count()
}
