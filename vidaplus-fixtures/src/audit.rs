use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{matches_query, parse_fixture, rounded_percent, Record, Repository};

const FIXTURE: &str = include_str!("../data/audit_logs.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub action: String,
    pub module: String,
    pub details: String,
    pub timestamp: NaiveDateTime,
    pub ip_address: String,
}

impl Record for AuditLog {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Nhóm hành động, suy ra từ từ khóa trong tên hành động.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Delete,
    Read,
    Update,
    Other,
}

impl ActionKind {
    pub fn classify(action: &str) -> Self {
        if contains_any(action, &["Cadastro", "Criação"]) {
            ActionKind::Create
        } else if contains_any(action, &["Exclusão", "Cancelamento"]) {
            ActionKind::Delete
        } else if contains_any(action, &["Visualização", "Consulta"]) {
            ActionKind::Read
        } else if contains_any(action, &["Atualização", "Edição"]) {
            ActionKind::Update
        } else {
            ActionKind::Other
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            ActionKind::Create => "green",
            ActionKind::Delete => "red",
            ActionKind::Read => "blue",
            ActionKind::Update => "orange",
            ActionKind::Other => "gray",
        }
    }
}

fn contains_any(action: &str, words: &[&str]) -> bool {
    words.iter().any(|word| action.contains(word))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleShare {
    pub module: String,
    pub count: usize,
    pub percent: u32,
}

pub fn load_audit_logs() -> Result<Repository<AuditLog>, ShellError> {
    parse_fixture("audit_logs", FIXTURE).map(Repository::new)
}

/// Tìm theo người dùng, hành động hoặc chi tiết; `module = None` là mọi module.
pub fn filter_logs<'a>(
    repo: &'a Repository<AuditLog>,
    query: &str,
    module: Option<&str>,
) -> Vec<&'a AuditLog> {
    repo.filter(|log| {
        matches_query(
            query,
            &[
                log.user_name.as_str(),
                log.action.as_str(),
                log.details.as_str(),
            ],
        ) && module.map_or(true, |wanted| log.module == wanted)
    })
}

/// Các module theo thứ tự xuất hiện đầu tiên.
pub fn modules(repo: &Repository<AuditLog>) -> Vec<&str> {
    let mut modules: Vec<&str> = Vec::new();
    for log in repo.items() {
        if !modules.contains(&log.module.as_str()) {
            modules.push(&log.module);
        }
    }
    modules
}

pub fn module_breakdown(repo: &Repository<AuditLog>) -> Vec<ModuleShare> {
    modules(repo)
        .into_iter()
        .map(|module| {
            let count = repo
                .items()
                .iter()
                .filter(|log| log.module == module)
                .count();
            ModuleShare {
                module: module.to_string(),
                count,
                percent: rounded_percent(count, repo.len()),
            }
        })
        .collect()
}
