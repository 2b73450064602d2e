use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{parse_fixture, Record, Repository};

const FIXTURE: &str = include_str!("../data/medical_records.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub patient_id: String,
    pub appointment_id: String,
    pub date: NaiveDate,
    pub professional_id: String,
    pub professional_name: String,
    pub complaints: String,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
    #[serde(default)]
    pub exams: Vec<ExamRequest>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExamRequest {
    pub id: String,
    pub exam_type: String,
    pub request_date: NaiveDate,
    pub status: ExamRequestStatus,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExamRequestStatus {
    Solicitado,
    Agendado,
    Realizado,
    Cancelado,
}

impl ExamRequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            ExamRequestStatus::Solicitado => "Solicitado",
            ExamRequestStatus::Agendado => "Agendado",
            ExamRequestStatus::Realizado => "Realizado",
            ExamRequestStatus::Cancelado => "Cancelado",
        }
    }
}

impl Record for MedicalRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Đơn thuốc kèm thông tin hồ sơ nguồn, dùng cho màn hình Prescrições.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrescriptionLine<'a> {
    pub record: &'a MedicalRecord,
    pub prescription: &'a Prescription,
}

pub fn load_medical_records() -> Result<Repository<MedicalRecord>, ShellError> {
    parse_fixture("medical_records", FIXTURE).map(Repository::new)
}

/// Hồ sơ của một bệnh nhân, mới nhất trước.
pub fn records_for_patient<'a>(
    repo: &'a Repository<MedicalRecord>,
    patient_id: &str,
) -> Vec<&'a MedicalRecord> {
    let mut records = repo.filter(|record| record.patient_id == patient_id);
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

/// Trải phẳng mọi đơn thuốc theo thứ tự hồ sơ.
pub fn prescription_lines(repo: &Repository<MedicalRecord>) -> Vec<PrescriptionLine<'_>> {
    repo.items()
        .iter()
        .flat_map(|record| {
            record
                .prescriptions
                .iter()
                .map(move |prescription| PrescriptionLine {
                    record,
                    prescription,
                })
        })
        .collect()
}
