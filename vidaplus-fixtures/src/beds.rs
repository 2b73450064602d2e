use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vidaplus_core::ShellError;

use crate::{parse_fixture, rounded_percent, Record, Repository};

const FIXTURE: &str = include_str!("../data/beds.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HospitalBed {
    pub id: String,
    pub number: String,
    pub wing: String,
    pub floor: u8,
    #[serde(rename = "type")]
    pub kind: BedKind,
    pub status: BedStatus,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub admission_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BedKind {
    Uti,
    Enfermaria,
    Apartamento,
    Observacao,
}

impl BedKind {
    pub const ALL: [BedKind; 4] = [
        BedKind::Uti,
        BedKind::Enfermaria,
        BedKind::Apartamento,
        BedKind::Observacao,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BedKind::Uti => "uti",
            BedKind::Enfermaria => "enfermaria",
            BedKind::Apartamento => "apartamento",
            BedKind::Observacao => "observacao",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BedKind::Uti => "UTI",
            BedKind::Enfermaria => "Enfermaria",
            BedKind::Apartamento => "Apartamento",
            BedKind::Observacao => "Observação",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BedStatus {
    Disponivel,
    Ocupado,
    Manutencao,
    Higienizacao,
}

impl BedStatus {
    pub const ALL: [BedStatus; 4] = [
        BedStatus::Disponivel,
        BedStatus::Ocupado,
        BedStatus::Manutencao,
        BedStatus::Higienizacao,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BedStatus::Disponivel => "disponivel",
            BedStatus::Ocupado => "ocupado",
            BedStatus::Manutencao => "manutencao",
            BedStatus::Higienizacao => "higienizacao",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BedStatus::Disponivel => "Disponível",
            BedStatus::Ocupado => "Ocupado",
            BedStatus::Manutencao => "Manutenção",
            BedStatus::Higienizacao => "Higienização",
        }
    }
}

impl Record for HospitalBed {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Tỷ lệ lấp đầy của một nhóm giường.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
    pub rate_percent: u32,
}

impl Occupancy {
    fn of<'a>(beds: impl IntoIterator<Item = &'a HospitalBed>) -> Self {
        let mut total = 0;
        let mut occupied = 0;
        let mut available = 0;
        for bed in beds {
            total += 1;
            match bed.status {
                BedStatus::Ocupado => occupied += 1,
                BedStatus::Disponivel => available += 1,
                BedStatus::Manutencao | BedStatus::Higienizacao => {}
            }
        }
        Self {
            total,
            occupied,
            available,
            rate_percent: rounded_percent(occupied, total),
        }
    }
}

pub fn load_beds() -> Result<Repository<HospitalBed>, ShellError> {
    parse_fixture("beds", FIXTURE).map(Repository::new)
}

pub fn filter_beds<'a>(
    repo: &'a Repository<HospitalBed>,
    kind: Option<BedKind>,
    status: Option<BedStatus>,
) -> Vec<&'a HospitalBed> {
    repo.filter(|bed| {
        kind.map_or(true, |wanted| bed.kind == wanted)
            && status.map_or(true, |wanted| bed.status == wanted)
    })
}

pub fn occupancy(repo: &Repository<HospitalBed>) -> Occupancy {
    Occupancy::of(repo.items())
}

/// Lấp đầy theo loại giường, chỉ các loại có trong dữ liệu.
pub fn occupancy_by_kind(repo: &Repository<HospitalBed>) -> Vec<(BedKind, Occupancy)> {
    BedKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let stats = Occupancy::of(repo.items().iter().filter(|bed| bed.kind == kind));
            (stats.total > 0).then_some((kind, stats))
        })
        .collect()
}

/// Lấp đầy theo khu (ala), sắp theo tên khu.
pub fn occupancy_by_wing(repo: &Repository<HospitalBed>) -> Vec<(String, Occupancy)> {
    let mut wings: BTreeMap<&str, Vec<&HospitalBed>> = BTreeMap::new();
    for bed in repo.items() {
        wings.entry(bed.wing.as_str()).or_default().push(bed);
    }
    wings
        .into_iter()
        .map(|(wing, beds)| (wing.to_string(), Occupancy::of(beds)))
        .collect()
}
