use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{matches_query, parse_fixture, Record, Repository};

const FIXTURE: &str = include_str!("../data/patients.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    pub emergency_contact: EmergencyContact,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "Outro")]
    Other,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
            Gender::Other => "Outro",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

impl Record for Patient {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Patient {
    /// Tuổi tròn năm tính tới ngày `today`.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }
}

pub fn load_patients() -> Result<Repository<Patient>, ShellError> {
    parse_fixture("patients", FIXTURE).map(Repository::new)
}

/// Tìm theo tên, e-mail hoặc CPF.
pub fn search_patients<'a>(repo: &'a Repository<Patient>, query: &str) -> Vec<&'a Patient> {
    repo.filter(|patient| {
        matches_query(
            query,
            &[
                patient.name.as_str(),
                patient.email.as_str(),
                patient.cpf.as_str(),
            ],
        )
    })
}
