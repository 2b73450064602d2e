use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{matches_query, parse_fixture, Record, Repository};

const FIXTURE: &str = include_str!("../data/lab_exams.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabExam {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub exam_type: String,
    pub category: String,
    pub request_date: NaiveDate,
    #[serde(default)]
    pub collection_date: Option<NaiveDate>,
    #[serde(default)]
    pub result_date: Option<NaiveDate>,
    pub status: LabStatus,
    pub requested_by: String,
    #[serde(default)]
    pub results: Vec<LabResult>,
    #[serde(default)]
    pub observations: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    pub parameter: String,
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: ResultFlag,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LabStatus {
    Pending,
    Collected,
    Processing,
    Completed,
    Urgent,
}

impl LabStatus {
    pub const ALL: [LabStatus; 5] = [
        LabStatus::Pending,
        LabStatus::Collected,
        LabStatus::Processing,
        LabStatus::Completed,
        LabStatus::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LabStatus::Pending => "pending",
            LabStatus::Collected => "collected",
            LabStatus::Processing => "processing",
            LabStatus::Completed => "completed",
            LabStatus::Urgent => "urgent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LabStatus::Pending => "Pendente",
            LabStatus::Collected => "Coletado",
            LabStatus::Processing => "Processando",
            LabStatus::Completed => "Concluído",
            LabStatus::Urgent => "Urgente",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultFlag {
    Normal,
    High,
    Low,
    Critical,
}

impl ResultFlag {
    pub fn label(self) -> &'static str {
        match self {
            ResultFlag::Normal => "Normal",
            ResultFlag::High => "Alto",
            ResultFlag::Low => "Baixo",
            ResultFlag::Critical => "Crítico",
        }
    }
}

impl Record for LabExam {
    fn id(&self) -> &str {
        &self.id
    }
}

impl LabExam {
    /// Có ít nhất một chỉ số ngoài khoảng tham chiếu.
    pub fn has_abnormal_result(&self) -> bool {
        self.results
            .iter()
            .any(|result| result.status != ResultFlag::Normal)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabStats {
    pub total: usize,
    pub pending: usize,
    /// Đã lấy mẫu hoặc đang xử lý.
    pub processing: usize,
    pub completed: usize,
    pub urgent: usize,
}

pub fn load_lab_exams() -> Result<Repository<LabExam>, ShellError> {
    parse_fixture("lab_exams", FIXTURE).map(Repository::new)
}

pub fn filter_exams<'a>(
    repo: &'a Repository<LabExam>,
    query: &str,
    status: Option<LabStatus>,
    category: Option<&str>,
) -> Vec<&'a LabExam> {
    repo.filter(|exam| {
        matches_query(
            query,
            &[
                exam.patient_name.as_str(),
                exam.exam_type.as_str(),
                exam.id.as_str(),
            ],
        ) && status.map_or(true, |wanted| exam.status == wanted)
            && category.map_or(true, |wanted| exam.category == wanted)
    })
}

pub fn lab_stats(repo: &Repository<LabExam>) -> LabStats {
    repo.items()
        .iter()
        .fold(LabStats::default(), |mut stats, exam| {
            stats.total += 1;
            match exam.status {
                LabStatus::Pending => stats.pending += 1,
                LabStatus::Collected | LabStatus::Processing => stats.processing += 1,
                LabStatus::Completed => stats.completed += 1,
                LabStatus::Urgent => stats.urgent += 1,
            }
            stats
        })
}
