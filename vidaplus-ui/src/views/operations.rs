use vidaplus_core::ShellError;
use vidaplus_fixtures::appointments::{count_by_status, load_appointments, Appointment, AppointmentStatus};
use vidaplus_fixtures::audit::{filter_logs, load_audit_logs, module_breakdown, modules, ActionKind};
use vidaplus_fixtures::beds::{
    filter_beds, load_beds, occupancy, occupancy_by_kind, occupancy_by_wing, BedKind, BedStatus,
    HospitalBed, Occupancy,
};
use vidaplus_fixtures::billing::{
    billing_stats, filter_invoices, format_brl, load_invoices, Invoice, InvoiceStatus,
};
use vidaplus_fixtures::home_care::{
    count_visits, filter_visits, load_home_care_visits, VisitPriority, VisitStatus,
};
use vidaplus_fixtures::laboratory::{
    filter_exams, lab_stats, load_lab_exams, LabExam, LabStatus, ResultFlag,
};
use vidaplus_fixtures::notifications::{relative_time, Inbox, NotificationKind};
use vidaplus_fixtures::pharmacy::{load_pharmacy, DispenseRequest, Pharmacy};
use vidaplus_fixtures::Repository;
use web_sys::HtmlInputElement;
use yew::events::InputEvent;
use yew::prelude::*;
use yew::TargetCast;

use super::{
    badge, empty_row, enum_options, format_date, load_failed, non_empty, now, page_header, pick,
    search_box, select_box, stat_card, today, IdentityProps,
};

fn occupancy_row(label: &str, stats: &Occupancy) -> Html {
    html! {
        <tr>
            <td>{ label.to_string() }</td>
            <td>{ stats.total }</td>
            <td>{ stats.occupied }</td>
            <td>{ stats.available }</td>
            <td>
                <div class="meter">
                    <div class="meter-fill" style={format!("width: {}%", stats.rate_percent)}></div>
                </div>
                <span class="muted">{ format!("{}%", stats.rate_percent) }</span>
            </td>
        </tr>
    }
}

fn bed_level(status: BedStatus) -> &'static str {
    match status {
        BedStatus::Disponivel => "moderate",
        BedStatus::Ocupado => "critical",
        BedStatus::Manutencao => "high",
        BedStatus::Higienizacao => "info",
    }
}

fn bed_card(bed: &HospitalBed) -> Html {
    html! {
        <div class="bed-card" data-level={bed_level(bed.status)}>
            <strong>{ format!("Leito {}", bed.number) }</strong>
            <span class="muted">{ format!("{} • {}º andar • {}", bed.wing, bed.floor, bed.kind.label()) }</span>
            { badge(bed.status.label(), bed_level(bed.status)) }
            {
                bed.patient_name.clone().map(|name| html! {
                    <span class="muted block">
                        { name }
                        { bed.admission_date.map(|date| format!(" • desde {}", format_date(date))).unwrap_or_default() }
                    </span>
                }).unwrap_or_default()
            }
        </div>
    }
}

#[function_component(BedsView)]
pub fn beds_view() -> Html {
    let beds = use_state(load_beds);
    let kind_tag = use_state(String::new);
    let status_tag = use_state(String::new);

    let repo = match &*beds {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let overall = occupancy(repo);
    let kind = pick(&BedKind::ALL, &kind_tag, BedKind::as_str);
    let status = pick(&BedStatus::ALL, &status_tag, BedStatus::as_str);
    let visible = filter_beds(repo, kind, status);

    html! {
        <div class="page">
            { page_header("Gestão de Leitos", "Ocupação e disponibilidade de leitos hospitalares") }
            <div class="stat-grid">
                { stat_card("Total de Leitos", overall.total.to_string(), "blue") }
                { stat_card("Ocupados", overall.occupied.to_string(), "orange") }
                { stat_card("Disponíveis", overall.available.to_string(), "green") }
                { stat_card("Taxa de Ocupação", format!("{}%", overall.rate_percent), "purple") }
            </div>
            <section class="card">
                <header class="card-header">
                    <h2>{"Ocupação por Tipo e Ala"}</h2>
                </header>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Grupo"}</th>
                            <th>{"Total"}</th>
                            <th>{"Ocupados"}</th>
                            <th>{"Disponíveis"}</th>
                            <th>{"Ocupação"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for occupancy_by_kind(repo).iter().map(|(kind, stats)| occupancy_row(kind.label(), stats)) }
                        { for occupancy_by_wing(repo).iter().map(|(wing, stats)| occupancy_row(wing, stats)) }
                    </tbody>
                </table>
            </section>
            <div class="toolbar">
                { select_box(&kind_tag, "Todos os tipos", enum_options(&BedKind::ALL, BedKind::as_str, BedKind::label)) }
                { select_box(&status_tag, "Todos os status", enum_options(&BedStatus::ALL, BedStatus::as_str, BedStatus::label)) }
            </div>
            <div class="bed-grid">
                {
                    if visible.is_empty() {
                        html! { <div class="card empty">{"Nenhum leito encontrado"}</div> }
                    } else {
                        html! { for visible.into_iter().map(bed_card) }
                    }
                }
            </div>
        </div>
    }
}

/// Dữ liệu tổng hợp cho màn hình báo cáo.
struct ReportData {
    appointments: Repository<Appointment>,
    beds: Repository<HospitalBed>,
    invoices: Repository<Invoice>,
    exams: Repository<LabExam>,
    pharmacy: Pharmacy,
}

impl ReportData {
    fn load() -> Result<Self, ShellError> {
        Ok(Self {
            appointments: load_appointments()?,
            beds: load_beds()?,
            invoices: load_invoices()?,
            exams: load_lab_exams()?,
            pharmacy: load_pharmacy()?,
        })
    }
}

#[function_component(ReportsView)]
pub fn reports_view() -> Html {
    let data = use_state(ReportData::load);

    let data = match &*data {
        Ok(data) => data,
        Err(err) => return load_failed(err),
    };
    let today = today();
    let billing = billing_stats(&data.invoices, today);
    let lab = lab_stats(&data.exams);
    let beds = occupancy(&data.beds);
    let pharmacy = data.pharmacy.stats(today);

    html! {
        <div class="page">
            { page_header("Relatórios", "Indicadores consolidados da operação") }
            <div class="stat-grid">
                { stat_card("Consultas", data.appointments.len().to_string(), "blue") }
                { stat_card("Taxa de Ocupação", format!("{}%", beds.rate_percent), "orange") }
                { stat_card("Receita Recebida", format_brl(billing.total_revenue), "green") }
                { stat_card("Exames Realizados", lab.completed.to_string(), "purple") }
            </div>
            <div class="card-grid">
                <section class="card">
                    <header class="card-header">
                        <h2>{"Atendimentos por Status"}</h2>
                    </header>
                    <ul class="list compact">
                        {
                            for AppointmentStatus::ALL.into_iter().map(|status| html! {
                                <li class="list-row">
                                    <span>{ status.label() }</span>
                                    <strong>{ count_by_status(&data.appointments, status) }</strong>
                                </li>
                            })
                        }
                    </ul>
                </section>
                <section class="card">
                    <header class="card-header">
                        <h2>{"Financeiro"}</h2>
                    </header>
                    <ul class="list compact">
                        <li class="list-row"><span>{"Receita do Mês"}</span><strong>{ format_brl(billing.monthly_revenue) }</strong></li>
                        <li class="list-row"><span>{"A Receber"}</span><strong>{ format_brl(billing.pending_revenue) }</strong></li>
                        <li class="list-row"><span>{"Em Atraso"}</span><strong>{ format_brl(billing.overdue_revenue) }</strong></li>
                    </ul>
                </section>
                <section class="card">
                    <header class="card-header">
                        <h2>{"Farmácia e Laboratório"}</h2>
                    </header>
                    <ul class="list compact">
                        <li class="list-row"><span>{"Itens em Estoque Baixo"}</span><strong>{ pharmacy.low_stock }</strong></li>
                        <li class="list-row"><span>{"Valor do Estoque"}</span><strong>{ format_brl(pharmacy.inventory_value) }</strong></li>
                        <li class="list-row"><span>{"Exames Pendentes"}</span><strong>{ lab.pending + lab.processing }</strong></li>
                        <li class="list-row"><span>{"Exames Urgentes"}</span><strong>{ lab.urgent }</strong></li>
                    </ul>
                </section>
            </div>
        </div>
    }
}

fn notification_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Appointment => "📅",
        NotificationKind::Exam => "🧪",
        NotificationKind::Prescription => "💊",
        NotificationKind::Alert => "⚠",
        NotificationKind::System => "ℹ",
    }
}

fn edit_inbox(inbox: &UseStateHandle<Result<Inbox, ShellError>>, apply: impl FnOnce(&mut Inbox)) {
    if let Ok(current) = &**inbox {
        let mut next = current.clone();
        apply(&mut next);
        inbox.set(Ok(next));
    }
}

#[function_component(NotificationsView)]
pub fn notifications_view(props: &IdentityProps) -> Html {
    let user_id = props.identity.id.clone();
    let inbox = use_state(move || Inbox::for_user(&user_id));
    let unread_only = use_state(|| false);

    let current = match &*inbox {
        Ok(current) => current,
        Err(err) => return load_failed(err),
    };
    let now = now();
    let items: Vec<_> = if *unread_only {
        current.unread()
    } else {
        current.items().iter().collect()
    };

    let on_mark_all = {
        let inbox = inbox.clone();
        Callback::from(move |_: MouseEvent| edit_inbox(&inbox, Inbox::mark_all_read))
    };
    let tab = |unread: bool, label: String| {
        let unread_only = unread_only.clone();
        let active = *unread_only == unread;
        let onclick = Callback::from(move |_: MouseEvent| unread_only.set(unread));
        html! {
            <button type="button" class={classes!("tab", active.then_some("is-active"))} onclick={onclick}>
                { label }
            </button>
        }
    };

    html! {
        <div class="page">
            { page_header("Notificações", "Acompanhe avisos e atualizações importantes") }
            <div class="toolbar">
                { tab(false, format!("Todas ({})", current.items().len())) }
                { tab(true, format!("Não lidas ({})", current.unread_count())) }
                <button
                    type="button"
                    class="button outline"
                    onclick={on_mark_all}
                    disabled={current.unread_count() == 0}
                >
                    {"Marcar todas como lidas"}
                </button>
            </div>
            <ul class="list">
                {
                    if items.is_empty() {
                        html! { <li class="card empty">{"Nenhuma notificação"}</li> }
                    } else {
                        html! {
                            for items.into_iter().map(|notification| {
                                let on_read = {
                                    let inbox = inbox.clone();
                                    let id = notification.id.clone();
                                    Callback::from(move |_: MouseEvent| edit_inbox(&inbox, |inbox| {
                                        inbox.mark_read(&id);
                                    }))
                                };
                                let on_delete = {
                                    let inbox = inbox.clone();
                                    let id = notification.id.clone();
                                    Callback::from(move |_: MouseEvent| edit_inbox(&inbox, |inbox| {
                                        inbox.delete(&id);
                                    }))
                                };
                                html! {
                                    <li class={classes!("card", "notification", (!notification.read).then_some("is-unread"))}>
                                        <span class="menu-icon" aria-hidden="true">{ notification_icon(notification.kind) }</span>
                                        <div class="notification-body">
                                            <strong>{ notification.title.clone() }</strong>
                                            <p>{ notification.message.clone() }</p>
                                            <span class="muted">
                                                { format!("{} • {}", notification.kind.label(), relative_time(notification.date, now)) }
                                            </span>
                                        </div>
                                        <div class="row-end">
                                            {
                                                if notification.read {
                                                    Html::default()
                                                } else {
                                                    html! { <button type="button" class="link-button" onclick={on_read}>{"Marcar como lida"}</button> }
                                                }
                                            }
                                            <button type="button" class="link-button danger" onclick={on_delete}>{"Excluir"}</button>
                                        </div>
                                    </li>
                                }
                            })
                        }
                    }
                }
            </ul>
        </div>
    }
}

#[function_component(AuditView)]
pub fn audit_view() -> Html {
    let logs = use_state(load_audit_logs);
    let query = use_state(String::new);
    let module_tag = use_state(String::new);

    let repo = match &*logs {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let rows = filter_logs(repo, &query, non_empty(&module_tag));
    let module_options = modules(repo)
        .into_iter()
        .map(|module| (module.to_string(), module.to_string()))
        .collect();

    html! {
        <div class="page">
            { page_header("Auditoria", "Registro de acessos e operações no sistema") }
            <div class="stat-grid">
                {
                    for module_breakdown(repo).into_iter().map(|share| {
                        stat_card(&share.module, format!("{} ({}%)", share.count, share.percent), "blue")
                    })
                }
            </div>
            <div class="toolbar">
                { search_box(&query, "Buscar por usuário, ação ou detalhes") }
                { select_box(&module_tag, "Todos os módulos", module_options) }
            </div>
            <section class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Data/Hora"}</th>
                            <th>{"Usuário"}</th>
                            <th>{"Ação"}</th>
                            <th>{"Módulo"}</th>
                            <th>{"Detalhes"}</th>
                            <th>{"IP"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if rows.is_empty() {
                                empty_row(6, "Nenhum registro encontrado")
                            } else {
                                html! {
                                    for rows.iter().map(|log| html! {
                                        <tr>
                                            <td>{ log.timestamp.format("%d/%m/%Y %H:%M").to_string() }</td>
                                            <td>{ log.user_name.clone() }</td>
                                            <td>
                                                <span class="badge" data-tone={ActionKind::classify(&log.action).tone()}>
                                                    { log.action.clone() }
                                                </span>
                                            </td>
                                            <td>{ log.module.clone() }</td>
                                            <td>{ log.details.clone() }</td>
                                            <td class="mono">{ log.ip_address.clone() }</td>
                                        </tr>
                                    })
                                }
                            }
                        }
                    </tbody>
                </table>
            </section>
        </div>
    }
}

fn lab_level(status: LabStatus) -> &'static str {
    match status {
        LabStatus::Pending => "info",
        LabStatus::Collected | LabStatus::Processing => "high",
        LabStatus::Completed => "moderate",
        LabStatus::Urgent => "critical",
    }
}

fn flag_level(flag: ResultFlag) -> &'static str {
    match flag {
        ResultFlag::Normal => "moderate",
        ResultFlag::High | ResultFlag::Low => "high",
        ResultFlag::Critical => "critical",
    }
}

fn exam_card(exam: &LabExam) -> Html {
    html! {
        <section class="card">
            <header class="card-header">
                <h2>{ format!("{} • {}", exam.id, exam.exam_type) }</h2>
                <p>{ format!("{} • {} • solicitado por {}", exam.patient_name, exam.category, exam.requested_by) }</p>
            </header>
            <div class="row-start">
                { badge(exam.status.label(), lab_level(exam.status)) }
                { if exam.has_abnormal_result() { badge("Resultado alterado", "high") } else { Html::default() } }
                <span class="pill">{ format!("Solicitação: {}", format_date(exam.request_date)) }</span>
                { exam.result_date.map(|date| html! { <span class="pill">{ format!("Resultado: {}", format_date(date)) }</span> }).unwrap_or_default() }
            </div>
            {
                if exam.results.is_empty() {
                    Html::default()
                } else {
                    html! {
                        <table class="table compact">
                            <thead>
                                <tr>
                                    <th>{"Parâmetro"}</th>
                                    <th>{"Valor"}</th>
                                    <th>{"Referência"}</th>
                                    <th>{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    for exam.results.iter().map(|result| html! {
                                        <tr>
                                            <td>{ result.parameter.clone() }</td>
                                            <td>{ format!("{} {}", result.value, result.unit) }</td>
                                            <td>{ result.reference_range.clone() }</td>
                                            <td>{ badge(result.status.label(), flag_level(result.status)) }</td>
                                        </tr>
                                    })
                                }
                            </tbody>
                        </table>
                    }
                }
            }
            { exam.observations.clone().map(|text| html! { <p class="muted">{ text }</p> }).unwrap_or_default() }
        </section>
    }
}

#[function_component(LaboratoryView)]
pub fn laboratory_view() -> Html {
    let exams = use_state(load_lab_exams);
    let query = use_state(String::new);
    let status_tag = use_state(String::new);
    let category_tag = use_state(String::new);

    let repo = match &*exams {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let stats = lab_stats(repo);
    let status = pick(&LabStatus::ALL, &status_tag, LabStatus::as_str);
    let rows = filter_exams(repo, &query, status, non_empty(&category_tag));

    let mut categories: Vec<String> = repo.items().iter().map(|exam| exam.category.clone()).collect();
    categories.sort();
    categories.dedup();
    let category_options = categories
        .into_iter()
        .map(|category| (category.clone(), category))
        .collect();

    html! {
        <div class="page">
            { page_header("Laboratório", "Solicitações, coletas e resultados de exames") }
            <div class="stat-grid">
                { stat_card("Total de Exames", stats.total.to_string(), "blue") }
                { stat_card("Em Processamento", stats.processing.to_string(), "orange") }
                { stat_card("Concluídos", stats.completed.to_string(), "green") }
                { stat_card("Urgentes", stats.urgent.to_string(), "purple") }
            </div>
            <div class="toolbar">
                { search_box(&query, "Buscar por paciente, exame ou código") }
                { select_box(&status_tag, "Todos os status", enum_options(&LabStatus::ALL, LabStatus::as_str, LabStatus::label)) }
                { select_box(&category_tag, "Todas as categorias", category_options) }
            </div>
            {
                if rows.is_empty() {
                    html! { <div class="card empty">{"Nenhum exame encontrado"}</div> }
                } else {
                    html! { for rows.into_iter().map(exam_card) }
                }
            }
        </div>
    }
}

#[derive(Clone, Default, PartialEq)]
struct DispenseForm {
    quantity: String,
    patient_name: String,
    prescription_id: String,
}

/// Kết quả lần cấp phát gần nhất: `(thành công, thông điệp)`.
type Feedback = Option<(bool, String)>;

fn form_input(
    form: &UseStateHandle<DispenseForm>,
    label: &'static str,
    value: &str,
    apply: fn(&mut DispenseForm, String),
) -> Html {
    let oninput = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    html! {
        <label>
            <span>{ label }</span>
            <input type="text" value={value.to_string()} oninput={oninput} />
        </label>
    }
}

#[function_component(PharmacyView)]
pub fn pharmacy_view(props: &IdentityProps) -> Html {
    let pharmacy = use_state(load_pharmacy);
    let query = use_state(String::new);
    let category_tag = use_state(String::new);
    let medication_tag = use_state(String::new);
    let form = use_state(DispenseForm::default);
    let feedback = use_state(Feedback::default);

    let on_dispense = {
        let pharmacy = pharmacy.clone();
        let medication_tag = medication_tag.clone();
        let form = form.clone();
        let feedback = feedback.clone();
        let dispensed_by = props.identity.name.clone();
        Callback::from(move |_: MouseEvent| {
            let Ok(current) = &*pharmacy else {
                return;
            };
            let values = (*form).clone();
            if medication_tag.is_empty() || values.patient_name.trim().is_empty() {
                feedback.set(Some((false, "Preencha todos os campos obrigatórios".to_string())));
                return;
            }
            let Ok(quantity) = values.quantity.trim().parse::<u32>() else {
                feedback.set(Some((false, "Quantidade inválida".to_string())));
                return;
            };
            let mut next = current.clone();
            let outcome = next
                .dispense(DispenseRequest {
                    medication_id: &medication_tag,
                    quantity,
                    patient_name: values.patient_name.trim(),
                    prescription_id: values.prescription_id.trim(),
                    dispensed_by: &dispensed_by,
                    date: today(),
                })
                .map(|record| record.id.clone());
            match outcome {
                Ok(id) => {
                    pharmacy.set(Ok(next));
                    medication_tag.set(String::new());
                    form.set(DispenseForm::default());
                    feedback.set(Some((true, format!("Dispensação {id} registrada"))));
                }
                Err(err) => feedback.set(Some((false, err.to_string()))),
            }
        })
    };

    let current = match &*pharmacy {
        Ok(current) => current,
        Err(err) => return load_failed(err),
    };
    let today = today();
    let stats = current.stats(today);
    let rows = current.search(&query, non_empty(&category_tag));
    let category_options = current
        .categories()
        .into_iter()
        .map(|category| (category.to_string(), category.to_string()))
        .collect();
    let medication_options = current
        .medications
        .items()
        .iter()
        .map(|med| (med.id.clone(), format!("{} ({} {})", med.name, med.current_stock, med.unit)))
        .collect();
    html! {
        <div class="page">
            { page_header("Farmácia", "Estoque de medicamentos e dispensações") }
            <div class="stat-grid">
                { stat_card("Itens no Estoque", stats.total_items.to_string(), "blue") }
                { stat_card("Estoque Baixo", stats.low_stock.to_string(), "orange") }
                { stat_card("Vencendo em 3 meses", stats.expiring.to_string(), "purple") }
                { stat_card("Valor do Estoque", format_brl(stats.inventory_value), "green") }
            </div>
            <div class="toolbar">
                { search_box(&query, "Buscar por nome, princípio ativo ou código") }
                { select_box(&category_tag, "Todas as categorias", category_options) }
            </div>
            <section class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Medicamento"}</th>
                            <th>{"Categoria"}</th>
                            <th>{"Estoque"}</th>
                            <th>{"Validade"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if rows.is_empty() {
                                empty_row(5, "Nenhum medicamento encontrado")
                            } else {
                                html! {
                                    for rows.iter().map(|med| {
                                        let status = med.stock_status();
                                        html! {
                                            <tr>
                                                <td>
                                                    <strong>{ med.name.clone() }</strong>
                                                    <span class="muted block">{ format!("{} • {}", med.id, med.generic_name) }</span>
                                                </td>
                                                <td>{ med.category.clone() }</td>
                                                <td>
                                                    { format!("{} {}", med.current_stock, med.unit) }
                                                    <div class="meter">
                                                        <div class="meter-fill" style={format!("width: {}%", med.stock_percent())}></div>
                                                    </div>
                                                </td>
                                                <td>
                                                    { format_date(med.expiry_date) }
                                                    { if med.expires_within_three_months(today) { badge("Vencendo", "high") } else { Html::default() } }
                                                </td>
                                                <td>{ badge(status.label(), status.level()) }</td>
                                            </tr>
                                        }
                                    })
                                }
                            }
                        }
                    </tbody>
                </table>
            </section>
            <section class="card">
                <header class="card-header">
                    <h2>{"Dispensar Medicamento"}</h2>
                    <p>{ format!("Responsável: {}", props.identity.name) }</p>
                </header>
                <div class="form-grid">
                    { select_box(&medication_tag, "Selecione o medicamento", medication_options) }
                    { form_input(&form, "Quantidade", &form.quantity, |form, value| form.quantity = value) }
                    { form_input(&form, "Paciente", &form.patient_name, |form, value| form.patient_name = value) }
                    { form_input(&form, "Prescrição", &form.prescription_id, |form, value| form.prescription_id = value) }
                </div>
                {
                    (*feedback).clone().map(|(ok, message)| html! {
                        <p class="notice" data-level={if ok { "moderate" } else { "critical" }}>{ message }</p>
                    }).unwrap_or_default()
                }
                <button type="button" class="button primary" onclick={on_dispense}>{"Dispensar"}</button>
            </section>
            <section class="card">
                <header class="card-header">
                    <h2>{"Dispensações Recentes"}</h2>
                </header>
                <ul class="list">
                    {
                        for current.dispensations.items().iter().rev().map(|disp| html! {
                            <li class="list-row">
                                <div>
                                    <strong>{ format!("{} • {} un.", disp.medication, disp.quantity) }</strong>
                                    <span class="muted">{ format!("{} • {}", disp.patient_name, disp.dispensed_by) }</span>
                                </div>
                                <span class="pill">{ format_date(disp.date) }</span>
                            </li>
                        })
                    }
                </ul>
            </section>
        </div>
    }
}

fn visit_level(status: VisitStatus) -> &'static str {
    match status {
        VisitStatus::Scheduled => "info",
        VisitStatus::InProgress => "high",
        VisitStatus::Completed => "moderate",
        VisitStatus::Cancelled => "critical",
    }
}

fn priority_level(priority: VisitPriority) -> &'static str {
    match priority {
        VisitPriority::Normal => "low",
        VisitPriority::High => "high",
        VisitPriority::Urgent => "critical",
    }
}

#[function_component(HomeCareView)]
pub fn home_care_view() -> Html {
    let visits = use_state(load_home_care_visits);
    let query = use_state(String::new);
    let status_tag = use_state(String::new);

    let repo = match &*visits {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let status = pick(&VisitStatus::ALL, &status_tag, VisitStatus::as_str);
    let rows = filter_visits(repo, &query, status);

    html! {
        <div class="page">
            { page_header("Home Care", "Atendimento domiciliar e visitas agendadas") }
            <div class="stat-grid">
                {
                    for VisitStatus::ALL.into_iter().zip(["blue", "orange", "green", "purple"]).map(|(status, tone)| {
                        stat_card(status.label(), count_visits(repo, status).to_string(), tone)
                    })
                }
            </div>
            <div class="toolbar">
                { search_box(&query, "Buscar por paciente, profissional ou serviço") }
                { select_box(&status_tag, "Todos os status", enum_options(&VisitStatus::ALL, VisitStatus::as_str, VisitStatus::label)) }
            </div>
            {
                if rows.is_empty() {
                    html! { <div class="card empty">{"Nenhuma visita encontrada"}</div> }
                } else {
                    html! {
                        for rows.iter().map(|visit| html! {
                            <section class="card">
                                <header class="card-header">
                                    <h2>{ format!("{} • {}", visit.patient_name, visit.service_type) }</h2>
                                    <p>{ visit.address.clone() }</p>
                                </header>
                                <div class="row-start">
                                    { badge(visit.status.label(), visit_level(visit.status)) }
                                    { badge(visit.priority.label(), priority_level(visit.priority)) }
                                    <span class="pill">{ format!("{} {}", format_date(visit.date), visit.time) }</span>
                                    <span class="muted">{ visit.professional_name.clone() }</span>
                                </div>
                                {
                                    visit.vital_signs.as_ref().map(|vitals| html! {
                                        <dl class="facts">
                                            <dt>{"Pressão Arterial"}</dt>
                                            <dd>{ vitals.blood_pressure.clone() }</dd>
                                            <dt>{"Frequência Cardíaca"}</dt>
                                            <dd>{ vitals.heart_rate.clone() }</dd>
                                            <dt>{"Temperatura"}</dt>
                                            <dd>{ vitals.temperature.clone() }</dd>
                                            <dt>{"Saturação"}</dt>
                                            <dd>{ vitals.oxygen_saturation.clone() }</dd>
                                        </dl>
                                    }).unwrap_or_default()
                                }
                                {
                                    for visit.procedures.iter().map(|procedure| html! {
                                        <span class="chip">{ procedure.clone() }</span>
                                    })
                                }
                                { visit.observations.clone().map(|text| html! { <p class="muted">{ text }</p> }).unwrap_or_default() }
                            </section>
                        })
                    }
                }
            }
        </div>
    }
}

fn invoice_level(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Paid => "moderate",
        InvoiceStatus::Pending => "high",
        InvoiceStatus::Overdue => "critical",
        InvoiceStatus::Cancelled => "info",
    }
}

#[function_component(BillingView)]
pub fn billing_view() -> Html {
    let invoices = use_state(load_invoices);
    let query = use_state(String::new);
    let status_tag = use_state(String::new);

    let repo = match &*invoices {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let stats = billing_stats(repo, today());
    let status = pick(&InvoiceStatus::ALL, &status_tag, InvoiceStatus::as_str);
    let rows = filter_invoices(repo, &query, status);

    html! {
        <div class="page">
            { page_header("Faturamento", "Faturas, pagamentos e receitas") }
            <div class="stat-grid">
                { stat_card("Receita Total", format_brl(stats.total_revenue), "green") }
                { stat_card("Receita do Mês", format_brl(stats.monthly_revenue), "blue") }
                { stat_card(&format!("Pendente ({})", stats.pending_invoices), format_brl(stats.pending_revenue), "orange") }
                { stat_card(&format!("Vencido ({})", stats.overdue_invoices), format_brl(stats.overdue_revenue), "purple") }
            </div>
            <div class="toolbar">
                { search_box(&query, "Buscar por paciente ou número da fatura") }
                { select_box(&status_tag, "Todos os status", enum_options(&InvoiceStatus::ALL, InvoiceStatus::as_str, InvoiceStatus::label)) }
            </div>
            <section class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Fatura"}</th>
                            <th>{"Paciente"}</th>
                            <th>{"Emissão"}</th>
                            <th>{"Vencimento"}</th>
                            <th>{"Valor"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if rows.is_empty() {
                                empty_row(6, "Nenhuma fatura encontrada")
                            } else {
                                html! {
                                    for rows.iter().map(|invoice| html! {
                                        <tr>
                                            <td class="mono">{ invoice.id.clone() }</td>
                                            <td>
                                                { invoice.patient_name.clone() }
                                                {
                                                    for invoice.services.iter().map(|line| html! {
                                                        <span class="muted block">
                                                            { format!("{} × {} = {}", line.quantity, line.description, format_brl(line.total)) }
                                                        </span>
                                                    })
                                                }
                                            </td>
                                            <td>{ format_date(invoice.date) }</td>
                                            <td>{ format_date(invoice.due_date) }</td>
                                            <td>{ format_brl(invoice.amount) }</td>
                                            <td>
                                                { badge(invoice.status.label(), invoice_level(invoice.status)) }
                                                { invoice.payment_method.clone().map(|method| html! { <span class="muted block">{ method }</span> }).unwrap_or_default() }
                                            </td>
                                        </tr>
                                    })
                                }
                            }
                        }
                    </tbody>
                </table>
            </section>
        </div>
    }
}
