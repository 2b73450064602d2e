//! Tập đóng các định danh màn hình.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ShellError;

/// Mỗi biến thể ứng với đúng một màn hình lá.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    #[default]
    Dashboard,
    Patients,
    Professionals,
    Appointments,
    Schedule,
    Telemedicine,
    Beds,
    Reports,
    Notifications,
    Audit,
    MedicalRecords,
    Prescriptions,
    Laboratory,
    Pharmacy,
    HomeCare,
    Billing,
    Profile,
    Settings,
    Help,
    SystemInfo,
    Prototypes,
}

impl ViewId {
    pub const ALL: [ViewId; 21] = [
        ViewId::Dashboard,
        ViewId::Patients,
        ViewId::Professionals,
        ViewId::Appointments,
        ViewId::Schedule,
        ViewId::Telemedicine,
        ViewId::Beds,
        ViewId::Reports,
        ViewId::Notifications,
        ViewId::Audit,
        ViewId::MedicalRecords,
        ViewId::Prescriptions,
        ViewId::Laboratory,
        ViewId::Pharmacy,
        ViewId::HomeCare,
        ViewId::Billing,
        ViewId::Profile,
        ViewId::Settings,
        ViewId::Help,
        ViewId::SystemInfo,
        ViewId::Prototypes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Patients => "patients",
            ViewId::Professionals => "professionals",
            ViewId::Appointments => "appointments",
            ViewId::Schedule => "schedule",
            ViewId::Telemedicine => "telemedicine",
            ViewId::Beds => "beds",
            ViewId::Reports => "reports",
            ViewId::Notifications => "notifications",
            ViewId::Audit => "audit",
            ViewId::MedicalRecords => "medical-records",
            ViewId::Prescriptions => "prescriptions",
            ViewId::Laboratory => "laboratory",
            ViewId::Pharmacy => "pharmacy",
            ViewId::HomeCare => "home-care",
            ViewId::Billing => "billing",
            ViewId::Profile => "profile",
            ViewId::Settings => "settings",
            ViewId::Help => "help",
            ViewId::SystemInfo => "system-info",
            ViewId::Prototypes => "prototypes",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ShellError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str() == tag)
            .ok_or_else(|| ShellError::UnknownView(tag.to_string()))
    }
}
