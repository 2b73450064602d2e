use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{matches_query, parse_fixture, Record, Repository};

const FIXTURE: &str = include_str!("../data/professionals.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub specialty: String,
    pub crm: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub work_schedule: Vec<WorkShift>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkShift {
    /// 0 = chủ nhật.
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

impl WorkShift {
    pub fn day_label(&self) -> &'static str {
        match self.day_of_week {
            0 => "Domingo",
            1 => "Segunda",
            2 => "Terça",
            3 => "Quarta",
            4 => "Quinta",
            5 => "Sexta",
            _ => "Sábado",
        }
    }
}

impl Record for Professional {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn load_professionals() -> Result<Repository<Professional>, ShellError> {
    parse_fixture("professionals", FIXTURE).map(Repository::new)
}

pub fn search_professionals<'a>(
    repo: &'a Repository<Professional>,
    query: &str,
) -> Vec<&'a Professional> {
    repo.filter(|prof| matches_query(query, &[prof.name.as_str(), prof.specialty.as_str()]))
}
