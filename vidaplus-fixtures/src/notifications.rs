use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{parse_fixture, Record, Repository};

const FIXTURE: &str = include_str!("../data/notifications.json");

/// Người nhận đặc biệt: thông báo gửi cho mọi người dùng.
pub const BROADCAST_USER: &str = "all";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Appointment,
    Exam,
    Prescription,
    Alert,
    System,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Appointment => "appointment",
            NotificationKind::Exam => "exam",
            NotificationKind::Prescription => "prescription",
            NotificationKind::Alert => "alert",
            NotificationKind::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Appointment => "Agendamento",
            NotificationKind::Exam => "Exame",
            NotificationKind::Prescription => "Prescrição",
            NotificationKind::Alert => "Alerta",
            NotificationKind::System => "Sistema",
        }
    }
}

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Hộp thư thông báo của một người dùng, chỉ sống trong màn hình Notificações.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inbox {
    notifications: Repository<Notification>,
}

impl Inbox {
    /// Lọc fixture cho `user_id` cùng các thông báo gửi chung.
    pub fn for_user(user_id: &str) -> Result<Self, ShellError> {
        let all: Vec<Notification> = parse_fixture("notifications", FIXTURE)?;
        let mine = all
            .into_iter()
            .filter(|n| n.user_id == user_id || n.user_id == BROADCAST_USER)
            .collect();
        Ok(Self {
            notifications: Repository::new(mine),
        })
    }

    pub fn items(&self) -> &[Notification] {
        self.notifications.items()
    }

    pub fn unread_count(&self) -> usize {
        self.items().iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: &str) -> bool {
        self.notifications.update(id, |n| n.read = true)
    }

    pub fn mark_all_read(&mut self) {
        self.notifications.update_all(|n| n.read = true);
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.notifications.remove(id).is_some()
    }

    pub fn unread(&self) -> Vec<&Notification> {
        self.notifications.filter(|n| !n.read)
    }
}

/// Thời gian tương đối kiểu "5 min atrás"; quá 7 ngày thì trả về ngày dd/mm/yyyy.
pub fn relative_time(date: NaiveDateTime, now: NaiveDateTime) -> String {
    let delta = now.signed_duration_since(date);
    let minutes = delta.num_minutes();
    let hours = delta.num_hours();
    let days = delta.num_days();

    if minutes < 60 {
        format!("{minutes} min atrás")
    } else if hours < 24 {
        format!("{hours}h atrás")
    } else if days < 7 {
        format!("{days}d atrás")
    } else {
        date.format("%d/%m/%Y").to_string()
    }
}
