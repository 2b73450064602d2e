//! Danh tính người dùng giữ trong phiên.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ShellError;

/// Vai trò quyết định menu hiển thị.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Bệnh nhân (end-user).
    Patient,
    /// Nhân viên y tế (provider).
    Professional,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Professional, Role::Admin];

    /// Tag dùng khi lưu trữ và trong JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Professional => "professional",
            Role::Admin => "admin",
        }
    }

    /// Tên hiển thị trên sidebar.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Patient => "Paciente",
            Role::Professional => "Profissional de Saúde",
            Role::Admin => "Administrador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ShellError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "patient" => Ok(Role::Patient),
            "professional" => Ok(Role::Professional),
            "admin" => Ok(Role::Admin),
            other => Err(ShellError::UnknownRole(other.to_string())),
        }
    }
}

/// Người dùng đã xác thực. Không đổi trong suốt phiên.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub cpf: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Chuyên khoa, chỉ có với nhân viên y tế.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    /// Số đăng ký hành nghề (CRM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crm: Option<String>,
}

impl Identity {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    /// Chữ cái đầu của tối đa hai từ đầu tiên trong tên, dùng cho avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}
