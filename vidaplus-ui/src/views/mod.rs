//! Các màn hình lá. Mỗi màn hình tự nạp repository từ fixture khi mount và
//! bỏ mọi thay đổi cục bộ khi bị hủy.

mod account;
mod clinical;
mod operations;

use chrono::{Local, NaiveDate, NaiveDateTime};
use vidaplus_core::{Identity, ShellError, ViewId};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::events::{Event, InputEvent};
use yew::prelude::*;
use yew::TargetCast;

use crate::app::DashboardView;
use account::{HelpView, ProfileView, PrototypesView, SettingsView, SystemInfoView};
use clinical::{
    AppointmentsView, MedicalRecordsView, PatientsView, PrescriptionsView, ProfessionalsView,
    ScheduleView, TelemedicineView,
};
use operations::{
    AuditView, BedsView, BillingView, HomeCareView, LaboratoryView, NotificationsView,
    PharmacyView, ReportsView,
};

/// Ánh xạ định danh màn hình sang component. `match` phải phủ hết `ViewId`.
pub(crate) fn render(view: ViewId, identity: &Identity) -> Html {
    let identity = identity.clone();
    match view {
        ViewId::Dashboard => html! { <DashboardView identity={identity} /> },
        ViewId::Patients => html! { <PatientsView /> },
        ViewId::Professionals => html! { <ProfessionalsView /> },
        ViewId::Appointments => html! { <AppointmentsView /> },
        ViewId::Schedule => html! { <ScheduleView identity={identity} /> },
        ViewId::Telemedicine => html! { <TelemedicineView identity={identity} /> },
        ViewId::Beds => html! { <BedsView /> },
        ViewId::Reports => html! { <ReportsView /> },
        ViewId::Notifications => html! { <NotificationsView identity={identity} /> },
        ViewId::Audit => html! { <AuditView /> },
        ViewId::MedicalRecords => html! { <MedicalRecordsView /> },
        ViewId::Prescriptions => html! { <PrescriptionsView /> },
        ViewId::Laboratory => html! { <LaboratoryView /> },
        ViewId::Pharmacy => html! { <PharmacyView identity={identity} /> },
        ViewId::HomeCare => html! { <HomeCareView /> },
        ViewId::Billing => html! { <BillingView /> },
        ViewId::Profile => html! { <ProfileView identity={identity} /> },
        ViewId::Settings => html! { <SettingsView /> },
        ViewId::Help => html! { <HelpView /> },
        ViewId::SystemInfo => html! { <SystemInfoView /> },
        ViewId::Prototypes => html! { <PrototypesView /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct IdentityProps {
    pub identity: Identity,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn page_header(title: &str, subtitle: &str) -> Html {
    html! {
        <header class="page-header">
            <h1>{ title.to_string() }</h1>
            <p>{ subtitle.to_string() }</p>
        </header>
    }
}

fn load_failed(err: &ShellError) -> Html {
    html! {
        <div class="page">
            <div class="card notice" data-level="critical">
                { format!("Não foi possível carregar os dados: {err}") }
            </div>
        </div>
    }
}

fn stat_card(title: &str, value: impl Into<String>, tone: &'static str) -> Html {
    html! {
        <div class="stat-card" data-tone={tone}>
            <span class="stat-title">{ title.to_string() }</span>
            <strong class="stat-value">{ value.into() }</strong>
        </div>
    }
}

fn badge(label: &str, level: &'static str) -> Html {
    html! { <span class="badge" data-level={level}>{ label.to_string() }</span> }
}

fn empty_row(columns: usize, text: &str) -> Html {
    html! {
        <tr>
            <td class="empty" colspan={columns.to_string()}>{ text.to_string() }</td>
        </tr>
    }
}

/// Ô tìm kiếm ghi thẳng vào `state`.
fn search_box(state: &UseStateHandle<String>, placeholder: &'static str) -> Html {
    let oninput = {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            state.set(input.value());
        })
    };
    html! {
        <input
            class="search"
            type="search"
            placeholder={placeholder}
            value={(**state).clone()}
            oninput={oninput}
            aria-label={placeholder}
        />
    }
}

/// Ô chọn lưu giá trị thô (`value` của option) vào `state`; option đầu tiên là "Todos".
fn select_box(
    state: &UseStateHandle<String>,
    all_label: &'static str,
    options: Vec<(String, String)>,
) -> Html {
    let onchange = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            state.set(select.value());
        })
    };
    let current = (**state).clone();
    html! {
        <select class="select" onchange={onchange}>
            <option value="" selected={current.is_empty()}>{ all_label }</option>
            {
                for options.into_iter().map(|(value, label)| {
                    let selected = value == current;
                    html! { <option value={value} selected={selected}>{ label }</option> }
                })
            }
        </select>
    }
}

/// Tìm giá trị enum có tag khớp; tag rỗng (hoặc lạ) nghĩa là không lọc.
fn pick<T: Copy>(all: &[T], tag: &str, as_str: fn(T) -> &'static str) -> Option<T> {
    all.iter().copied().find(|value| as_str(*value) == tag)
}

/// Tag rỗng nghĩa là không lọc.
fn non_empty(tag: &str) -> Option<&str> {
    (!tag.is_empty()).then_some(tag)
}

fn enum_options<T: Copy>(
    all: &[T],
    as_str: fn(T) -> &'static str,
    label: fn(T) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|value| (as_str(*value).to_string(), label(*value).to_string()))
        .collect()
}
