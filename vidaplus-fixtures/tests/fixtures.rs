use chrono::{NaiveDate, NaiveDateTime};
use vidaplus_fixtures::appointments::{
    count_by_status, filter_appointments, load_appointments, schedule_for, AppointmentStatus,
};
use vidaplus_fixtures::audit::{filter_logs, load_audit_logs, module_breakdown, ActionKind};
use vidaplus_fixtures::beds::{load_beds, occupancy, occupancy_by_kind, occupancy_by_wing, BedKind};
use vidaplus_fixtures::billing::{billing_stats, filter_invoices, format_brl, load_invoices, InvoiceStatus};
use vidaplus_fixtures::help::{load_faq, search_faq};
use vidaplus_fixtures::home_care::{count_visits, filter_visits, load_home_care_visits, VisitStatus};
use vidaplus_fixtures::laboratory::{filter_exams, lab_stats, load_lab_exams, LabStatus};
use vidaplus_fixtures::notifications::{relative_time, Inbox};
use vidaplus_fixtures::patients::{load_patients, search_patients};
use vidaplus_fixtures::pharmacy::{load_pharmacy, DispenseRequest, StockStatus};
use vidaplus_fixtures::professionals::{load_professionals, search_professionals};
use vidaplus_fixtures::records::{load_medical_records, prescription_lines, records_for_patient};
use vidaplus_fixtures::{matches_query, rounded_percent};

fn day(raw: &str) -> NaiveDate {
    raw.parse().expect("ngày hợp lệ")
}

fn at(raw: &str) -> NaiveDateTime {
    raw.parse().expect("thời điểm hợp lệ")
}

#[test]
fn search_helpers_ignore_case_and_blank_queries() {
    assert!(matches_query("", &["bất kỳ"]));
    assert!(matches_query("  ", &[]));
    assert!(matches_query("SANTOS", &["Maria Santos"]));
    assert!(!matches_query("silva", &["Maria Santos"]));
    assert_eq!(rounded_percent(1, 3), 33);
    assert_eq!(rounded_percent(3, 0), 0);
}

#[test]
fn patients_search_by_name_email_or_cpf() {
    let patients = load_patients().expect("đọc fixture bệnh nhân");
    assert_eq!(patients.len(), 3);

    let by_cpf = search_patients(&patients, "123.456.789-99");
    assert_eq!(by_cpf.len(), 1);
    assert_eq!(by_cpf[0].name, "João Pedro Silva");

    assert_eq!(search_patients(&patients, "costa").len(), 1);
    assert_eq!(search_patients(&patients, "").len(), 3);

    let maria = patients.get("p1").expect("có p1");
    assert_eq!(maria.age_on(day("2024-12-07")), 39);
}

#[test]
fn professionals_search_by_specialty() {
    let professionals = load_professionals().expect("đọc fixture nhân viên");
    let cardio = search_professionals(&professionals, "cardio");
    assert_eq!(cardio.len(), 1);
    assert_eq!(cardio[0].id, "prof1");
}

#[test]
fn appointments_filter_and_schedule() {
    let appointments = load_appointments().expect("đọc fixture lịch hẹn");
    assert_eq!(count_by_status(&appointments, AppointmentStatus::Confirmado), 2);

    let confirmed = filter_appointments(&appointments, "maria", Some(AppointmentStatus::Confirmado));
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].id, "apt1");

    let agenda = schedule_for(&appointments, "Dr. Carlos Silva");
    let ids: Vec<&str> = agenda.iter().map(|apt| apt.id.as_str()).collect();
    assert_eq!(ids, vec!["apt3", "apt1"]);
}

#[test]
fn records_are_listed_newest_first() {
    let records = load_medical_records().expect("đọc fixture hồ sơ");
    let history = records_for_patient(&records, "p1");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, "mr1");
    assert!(records_for_patient(&records, "p9").is_empty());
    assert_eq!(prescription_lines(&records).len(), 3);
}

#[test]
fn bed_occupancy_by_group() {
    let beds = load_beds().expect("đọc fixture giường");
    let overall = occupancy(&beds);
    assert_eq!((overall.total, overall.occupied, overall.available), (5, 3, 2));
    assert_eq!(overall.rate_percent, 60);

    let uti = occupancy_by_kind(&beds)
        .into_iter()
        .find(|(kind, _)| *kind == BedKind::Uti)
        .expect("có giường UTI");
    assert_eq!(uti.1.rate_percent, 50);

    let wings: Vec<String> = occupancy_by_wing(&beds).into_iter().map(|(wing, _)| wing).collect();
    assert_eq!(wings, vec!["Ala A", "Ala B", "Ala C"]);
}

#[test]
fn pharmacy_flags_low_stock_and_expiry() {
    let pharmacy = load_pharmacy().expect("đọc fixture nhà thuốc");
    let low: Vec<&str> = pharmacy.low_stock().iter().map(|med| med.id.as_str()).collect();
    assert_eq!(low, vec!["MED002", "MED005"]);

    let status = |id: &str| {
        pharmacy
            .medications
            .get(id)
            .map(|med| med.stock_status())
            .expect("thuốc tồn tại")
    };
    assert_eq!(status("MED001"), StockStatus::Normal);
    assert_eq!(status("MED003"), StockStatus::Attention);
    assert_eq!(status("MED005"), StockStatus::Low);

    let stats = pharmacy.stats(day("2024-12-07"));
    assert_eq!(stats.total_items, 5);
    assert_eq!(stats.low_stock, 2);
    assert_eq!(stats.expiring, 1);
    assert_eq!(stats.dispensations_today, 1);
    assert_eq!(pharmacy.categories().len(), 5);
}

#[test]
fn dispensing_decrements_stock() {
    let mut pharmacy = load_pharmacy().expect("đọc fixture nhà thuốc");
    let request = DispenseRequest {
        medication_id: "MED001",
        quantity: 30,
        patient_name: "Maria Santos",
        prescription_id: "RX010",
        dispensed_by: "Farm. João Silva",
        date: day("2024-12-07"),
    };
    let record = pharmacy.dispense(request).expect("đủ tồn kho");
    assert_eq!(record.id, "DISP003");
    assert_eq!(record.medication, "Losartana Potássica");

    let stock = pharmacy.medications.get("MED001").map(|med| med.current_stock);
    assert_eq!(stock, Some(420));
}

#[test]
fn dispensing_rejects_bad_requests() {
    let mut pharmacy = load_pharmacy().expect("đọc fixture nhà thuốc");
    let base = DispenseRequest {
        medication_id: "MED005",
        quantity: 16,
        patient_name: "Ana Paula Costa",
        prescription_id: "RX003",
        dispensed_by: "Farm. Maria Costa",
        date: day("2024-12-07"),
    };
    assert!(pharmacy.dispense(base).is_err());
    assert!(pharmacy.dispense(DispenseRequest { quantity: 0, ..base }).is_err());
    assert!(pharmacy
        .dispense(DispenseRequest {
            medication_id: "MED999",
            ..base
        })
        .is_err());

    assert_eq!(pharmacy.dispensations.len(), 2);
    let stock = pharmacy.medications.get("MED005").map(|med| med.current_stock);
    assert_eq!(stock, Some(15));
}

#[test]
fn billing_totals_by_status_and_month() {
    let invoices = load_invoices().expect("đọc fixture hóa đơn");
    let stats = billing_stats(&invoices, day("2024-12-10"));
    assert_eq!(stats.total_revenue, 2100.0);
    assert_eq!(stats.pending_revenue, 5080.0);
    assert_eq!(stats.overdue_revenue, 2100.0);
    assert_eq!(stats.monthly_revenue, 2100.0);
    assert_eq!(stats.total_invoices, 5);
    assert_eq!(stats.pending_invoices, 2);

    let november = billing_stats(&invoices, day("2024-11-10"));
    assert_eq!(november.monthly_revenue, 0.0);

    let overdue = filter_invoices(&invoices, "", Some(InvoiceStatus::Overdue));
    assert_eq!(overdue.len(), 1);
    assert_eq!(filter_invoices(&invoices, "inv-2024-00", None).len(), 5);
}

#[test]
fn brl_formatting_groups_thousands() {
    assert_eq!(format_brl(1250.0), "R$ 1.250,00");
    assert_eq!(format_brl(0.35), "R$ 0,35");
    assert_eq!(format_brl(1_234_567.8), "R$ 1.234.567,80");
    assert_eq!(format_brl(-42.5), "-R$ 42,50");
}

#[test]
fn lab_stats_group_collected_with_processing() {
    let exams = load_lab_exams().expect("đọc fixture xét nghiệm");
    let stats = lab_stats(&exams);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.processing, 2);
    assert_eq!(stats.urgent, 1);
    assert_eq!(stats.pending, 0);

    let biochem = filter_exams(&exams, "", None, Some("Bioquímica"));
    assert_eq!(biochem.len(), 2);
    let urgent = filter_exams(&exams, "joão", Some(LabStatus::Urgent), None);
    assert_eq!(urgent.len(), 1);

    let lipid = exams.get("LAB003").expect("có LAB003");
    assert!(lipid.has_abnormal_result());
    let blood = exams.get("LAB001").expect("có LAB001");
    assert!(!blood.has_abnormal_result());
}

#[test]
fn home_care_visits_filter_by_status() {
    let visits = load_home_care_visits().expect("đọc fixture chăm sóc tại nhà");
    assert_eq!(count_visits(&visits, VisitStatus::InProgress), 1);
    assert_eq!(filter_visits(&visits, "enf.", None).len(), 2);
    assert_eq!(filter_visits(&visits, "curativo", Some(VisitStatus::Scheduled)).len(), 0);
}

#[test]
fn inbox_only_shows_own_notifications() {
    let mut inbox = Inbox::for_user("p1").expect("đọc fixture thông báo");
    assert_eq!(inbox.items().len(), 2);
    assert_eq!(inbox.unread_count(), 1);

    assert!(inbox.mark_read("notif1"));
    assert_eq!(inbox.unread_count(), 0);
    assert!(!inbox.mark_read("notif3"));

    assert!(inbox.delete("notif2"));
    assert!(!inbox.delete("notif2"));
    assert_eq!(inbox.items().len(), 1);

    let mut other = Inbox::for_user("prof1").expect("đọc fixture thông báo");
    other.mark_all_read();
    assert!(other.unread().is_empty());
}

#[test]
fn relative_time_buckets() {
    let now = at("2024-12-01T12:00:00");
    assert_eq!(relative_time(at("2024-12-01T11:55:00"), now), "5 min atrás");
    assert_eq!(relative_time(at("2024-12-01T09:00:00"), now), "3h atrás");
    assert_eq!(relative_time(at("2024-11-29T12:00:00"), now), "2d atrás");
    assert_eq!(relative_time(at("2024-11-20T14:30:00"), now), "20/11/2024");
}

#[test]
fn audit_logs_break_down_by_module() {
    let logs = load_audit_logs().expect("đọc fixture nhật ký");
    let shares = module_breakdown(&logs);
    assert_eq!(shares.len(), 3);
    assert!(shares.iter().all(|share| share.count == 1 && share.percent == 33));

    assert_eq!(filter_logs(&logs, "carlos", None).len(), 2);
    assert_eq!(filter_logs(&logs, "", Some("Prescrições")).len(), 1);

    assert_eq!(ActionKind::classify("Cadastro de Profissional"), ActionKind::Create);
    assert_eq!(ActionKind::classify("Visualização de Prontuário"), ActionKind::Read);
    assert_eq!(ActionKind::classify("Emissão de Prescrição"), ActionKind::Other);
}

#[test]
fn faq_search_drops_empty_categories() {
    let faq = load_faq().expect("đọc fixture FAQ");
    assert_eq!(faq.len(), 5);
    assert_eq!(search_faq(&faq, "").len(), 5);

    let password = search_faq(&faq, "SENHA");
    assert_eq!(password.len(), 1);
    assert_eq!(password[0].category, "Geral");
    assert_eq!(password[0].questions.len(), 1);

    assert!(search_faq(&faq, "radiologia intervencionista").is_empty());
}
