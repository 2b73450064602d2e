use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{matches_query, parse_fixture, Record, Repository};

const FIXTURE: &str = include_str!("../data/invoices.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: f64,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Pending,
        InvoiceStatus::Overdue,
        InvoiceStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Pago",
            InvoiceStatus::Pending => "Pendente",
            InvoiceStatus::Overdue => "Vencido",
            InvoiceStatus::Cancelled => "Cancelado",
        }
    }
}

impl Record for Invoice {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillingStats {
    pub total_revenue: f64,
    pub pending_revenue: f64,
    pub overdue_revenue: f64,
    pub monthly_revenue: f64,
    pub total_invoices: usize,
    pub paid_invoices: usize,
    pub pending_invoices: usize,
    pub overdue_invoices: usize,
}

pub fn load_invoices() -> Result<Repository<Invoice>, ShellError> {
    parse_fixture("invoices", FIXTURE).map(Repository::new)
}

/// Tìm theo tên bệnh nhân hoặc mã hóa đơn.
pub fn filter_invoices<'a>(
    repo: &'a Repository<Invoice>,
    query: &str,
    status: Option<InvoiceStatus>,
) -> Vec<&'a Invoice> {
    repo.filter(|invoice| {
        matches_query(query, &[invoice.patient_name.as_str(), invoice.id.as_str()])
            && status.map_or(true, |wanted| invoice.status == wanted)
    })
}

fn sum_where(repo: &Repository<Invoice>, predicate: impl Fn(&Invoice) -> bool) -> f64 {
    repo.items()
        .iter()
        .filter(|invoice| predicate(*invoice))
        .map(|invoice| invoice.amount)
        .sum()
}

fn count_status(repo: &Repository<Invoice>, status: InvoiceStatus) -> usize {
    repo.items()
        .iter()
        .filter(|invoice| invoice.status == status)
        .count()
}

/// Tổng hợp doanh thu; "tháng này" là tháng chứa `today`.
pub fn billing_stats(repo: &Repository<Invoice>, today: NaiveDate) -> BillingStats {
    BillingStats {
        total_revenue: sum_where(repo, |inv| inv.status == InvoiceStatus::Paid),
        pending_revenue: sum_where(repo, |inv| inv.status == InvoiceStatus::Pending),
        overdue_revenue: sum_where(repo, |inv| inv.status == InvoiceStatus::Overdue),
        monthly_revenue: sum_where(repo, |inv| {
            inv.status == InvoiceStatus::Paid
                && inv.date.year() == today.year()
                && inv.date.month() == today.month()
        }),
        total_invoices: repo.len(),
        paid_invoices: count_status(repo, InvoiceStatus::Paid),
        pending_invoices: count_status(repo, InvoiceStatus::Pending),
        overdue_invoices: count_status(repo, InvoiceStatus::Overdue),
    }
}

/// Định dạng tiền BRL kiểu pt-BR: `R$ 1.250,00`.
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}R$ {grouped},{:02}", cents % 100)
}
