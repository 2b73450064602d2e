use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{matches_query, parse_fixture, Record, Repository};

const MEDICATIONS: &str = include_str!("../data/medications.json");
const DISPENSATIONS: &str = include_str!("../data/dispensations.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    pub category: String,
    pub manufacturer: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub unit: String,
    pub unit_price: f64,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub location: String,
    pub requires_prescription: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dispensation {
    pub id: String,
    pub patient_name: String,
    pub medication: String,
    pub quantity: u32,
    pub date: NaiveDate,
    pub prescription_id: String,
    pub dispensed_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Low,
    Attention,
    Normal,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Low => "Estoque Baixo",
            StockStatus::Attention => "Atenção",
            StockStatus::Normal => "Normal",
        }
    }

    pub fn level(self) -> &'static str {
        match self {
            StockStatus::Low => "critical",
            StockStatus::Attention => "high",
            StockStatus::Normal => "moderate",
        }
    }
}

impl Medication {
    /// Dưới mức tối thiểu là thấp; dưới 1.5 lần mức tối thiểu là cần chú ý.
    pub fn stock_status(&self) -> StockStatus {
        let current = f64::from(self.current_stock);
        let min = f64::from(self.min_stock);
        if current < min {
            StockStatus::Low
        } else if current < min * 1.5 {
            StockStatus::Attention
        } else {
            StockStatus::Normal
        }
    }

    /// Phần trăm so với mức tồn kho tối đa, làm tròn.
    pub fn stock_percent(&self) -> u32 {
        if self.max_stock == 0 {
            return 0;
        }
        (f64::from(self.current_stock) / f64::from(self.max_stock) * 100.0).round() as u32
    }

    /// Hết hạn trong vòng ba tháng kể từ `today` (kể cả đã hết hạn).
    pub fn expires_within_three_months(&self, today: NaiveDate) -> bool {
        let horizon = today
            .checked_add_months(Months::new(3))
            .unwrap_or(NaiveDate::MAX);
        self.expiry_date <= horizon
    }
}

impl Record for Medication {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Dispensation {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Yêu cầu cấp phát từ form "Dispensar".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispenseRequest<'a> {
    pub medication_id: &'a str,
    pub quantity: u32,
    pub patient_name: &'a str,
    pub prescription_id: &'a str,
    pub dispensed_by: &'a str,
    pub date: NaiveDate,
}

/// Kho thuốc và lịch sử cấp phát của màn hình Farmácia.
#[derive(Debug, Clone, PartialEq)]
pub struct Pharmacy {
    pub medications: Repository<Medication>,
    pub dispensations: Repository<Dispensation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyStats {
    pub total_items: usize,
    pub low_stock: usize,
    pub expiring: usize,
    pub inventory_value: f64,
    pub dispensations_today: usize,
}

pub fn load_pharmacy() -> Result<Pharmacy, ShellError> {
    Ok(Pharmacy {
        medications: parse_fixture("medications", MEDICATIONS).map(Repository::new)?,
        dispensations: parse_fixture("dispensations", DISPENSATIONS).map(Repository::new)?,
    })
}

impl Pharmacy {
    /// Tìm theo tên, tên gốc hoặc mã; `category = None` là mọi nhóm.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Medication> {
        self.medications.filter(|med| {
            matches_query(
                query,
                &[med.name.as_str(), med.generic_name.as_str(), med.id.as_str()],
            ) && category.map_or(true, |wanted| med.category == wanted)
        })
    }

    /// Các nhóm thuốc theo thứ tự xuất hiện, không trùng.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for med in self.medications.items() {
            if !categories.contains(&med.category.as_str()) {
                categories.push(&med.category);
            }
        }
        categories
    }

    pub fn low_stock(&self) -> Vec<&Medication> {
        self.medications.filter(|med| med.current_stock < med.min_stock)
    }

    pub fn expiring(&self, today: NaiveDate) -> Vec<&Medication> {
        self.medications.filter(|med| med.expires_within_three_months(today))
    }

    pub fn inventory_value(&self) -> f64 {
        self.medications
            .items()
            .iter()
            .map(|med| f64::from(med.current_stock) * med.unit_price)
            .sum()
    }

    pub fn stats(&self, today: NaiveDate) -> PharmacyStats {
        PharmacyStats {
            total_items: self.medications.len(),
            low_stock: self.low_stock().len(),
            expiring: self.expiring(today).len(),
            inventory_value: self.inventory_value(),
            dispensations_today: self
                .dispensations
                .filter(|disp| disp.date == today)
                .len(),
        }
    }

    /// Trừ tồn kho và ghi một lượt cấp phát. Lỗi khi không đủ thuốc hoặc sai mã.
    pub fn dispense(&mut self, request: DispenseRequest<'_>) -> Result<&Dispensation, ShellError> {
        let DispenseRequest {
            medication_id,
            quantity,
            patient_name,
            prescription_id,
            dispensed_by,
            date,
        } = request;
        let med = self
            .medications
            .get(medication_id)
            .ok_or_else(|| {
                ShellError::Other(format!("Medicamento {medication_id} não encontrado"))
            })?;
        if quantity == 0 || quantity > med.current_stock {
            return Err(ShellError::Other(format!(
                "Estoque insuficiente de {} ({} disponíveis)",
                med.name, med.current_stock
            )));
        }
        let medication_name = med.name.clone();

        self.medications
            .update(medication_id, |med| med.current_stock -= quantity);

        let id = format!("DISP{:03}", self.dispensations.len() + 1);
        Ok(self.dispensations.push(Dispensation {
            id,
            patient_name: patient_name.to_string(),
            medication: medication_name,
            quantity,
            date,
            prescription_id: prescription_id.to_string(),
            dispensed_by: dispensed_by.to_string(),
        }))
    }
}
