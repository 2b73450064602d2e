use vidaplus_fixtures::appointments::{
    count_by_status, filter_appointments, load_appointments, schedule_for, Appointment,
    AppointmentKind, AppointmentStatus,
};
use vidaplus_fixtures::matches_query;
use vidaplus_fixtures::patients::{load_patients, search_patients, Patient};
use vidaplus_fixtures::professionals::{load_professionals, search_professionals};
use vidaplus_fixtures::records::{
    load_medical_records, prescription_lines, records_for_patient, MedicalRecord,
};
use yew::prelude::*;

use super::{
    badge, empty_row, enum_options, format_date, load_failed, page_header, pick, search_box,
    select_box, stat_card, today, IdentityProps,
};

fn appointment_level(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Agendado => "info",
        AppointmentStatus::Confirmado => "moderate",
        AppointmentStatus::EmAndamento => "high",
        AppointmentStatus::Concluido => "low",
        AppointmentStatus::Cancelado => "critical",
    }
}

fn appointment_row(apt: &Appointment) -> Html {
    html! {
        <tr>
            <td>{ format_date(apt.date) }{" "}{ apt.time.clone() }</td>
            <td>{ apt.patient_name.clone() }</td>
            <td>{ apt.professional_name.clone() }</td>
            <td>{ apt.specialty.clone() }</td>
            <td>{ apt.kind.label() }</td>
            <td>{ badge(apt.status.label(), appointment_level(apt.status)) }</td>
        </tr>
    }
}

#[function_component(PatientsView)]
pub fn patients_view() -> Html {
    let patients = use_state(load_patients);
    let records = use_state(load_medical_records);
    let query = use_state(String::new);
    let selected = use_state(|| None::<String>);

    let repo = match &*patients {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let today = today();
    let rows = search_patients(repo, &query);
    let detail = (*selected)
        .as_deref()
        .and_then(|id| repo.get(id))
        .map(|patient| {
            let history = match &*records {
                Ok(records) => records_for_patient(records, &patient.id),
                Err(_) => Vec::new(),
            };
            patient_detail(patient, &history)
        })
        .unwrap_or_default();

    html! {
        <div class="page">
            { page_header("Gestão de Pacientes", "Cadastro e acompanhamento de pacientes") }
            <div class="toolbar">
                { search_box(&query, "Buscar por nome, e-mail ou CPF") }
            </div>
            <section class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Nome"}</th>
                            <th>{"CPF"}</th>
                            <th>{"Idade"}</th>
                            <th>{"Telefone"}</th>
                            <th>{"Tipo Sanguíneo"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if rows.is_empty() {
                                empty_row(5, "Nenhum paciente encontrado")
                            } else {
                                html! {
                                    for rows.iter().map(|patient| {
                                        let id = patient.id.clone();
                                        let selected = selected.clone();
                                        let onclick = Callback::from(move |_| selected.set(Some(id.clone())));
                                        html! {
                                            <tr class="clickable" onclick={onclick}>
                                                <td>{ patient.name.clone() }</td>
                                                <td>{ patient.cpf.clone() }</td>
                                                <td>{ format!("{} anos", patient.age_on(today)) }</td>
                                                <td>{ patient.phone.clone() }</td>
                                                <td>{ patient.blood_type.clone().unwrap_or_else(|| "-".to_string()) }</td>
                                            </tr>
                                        }
                                    })
                                }
                            }
                        }
                    </tbody>
                </table>
            </section>
            { detail }
        </div>
    }
}

fn patient_detail(patient: &Patient, history: &[&MedicalRecord]) -> Html {
    html! {
        <section class="card">
            <header class="card-header">
                <h2>{ patient.name.clone() }</h2>
                <p>{ format!("{} • {}", patient.gender.label(), patient.email) }</p>
            </header>
            <dl class="facts">
                <dt>{"Endereço"}</dt>
                <dd>{ patient.address.clone() }</dd>
                <dt>{"Alergias"}</dt>
                <dd>{ join_or_dash(&patient.allergies) }</dd>
                <dt>{"Condições Crônicas"}</dt>
                <dd>{ join_or_dash(&patient.chronic_conditions) }</dd>
                <dt>{"Contato de Emergência"}</dt>
                <dd>
                    { format!(
                        "{} ({}) {}",
                        patient.emergency_contact.name,
                        patient.emergency_contact.relationship,
                        patient.emergency_contact.phone
                    ) }
                </dd>
            </dl>
            <h3>{"Histórico de Prontuários"}</h3>
            <ul class="list">
                {
                    if history.is_empty() {
                        html! { <li class="empty">{"Nenhum prontuário registrado"}</li> }
                    } else {
                        html! {
                            for history.iter().map(|record| html! {
                                <li class="list-row">
                                    <div>
                                        <strong>{ record.diagnosis.clone() }</strong>
                                        <span class="muted">{ record.professional_name.clone() }</span>
                                    </div>
                                    <span class="pill">{ format_date(record.date) }</span>
                                </li>
                            })
                        }
                    }
                }
            </ul>
        </section>
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

#[function_component(ProfessionalsView)]
pub fn professionals_view() -> Html {
    let professionals = use_state(load_professionals);
    let query = use_state(String::new);

    let repo = match &*professionals {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let cards = search_professionals(repo, &query);

    html! {
        <div class="page">
            { page_header("Profissionais de Saúde", "Equipe médica e escalas de trabalho") }
            <div class="toolbar">
                { search_box(&query, "Buscar por nome ou especialidade") }
            </div>
            <div class="card-grid">
                {
                    for cards.iter().map(|prof| html! {
                        <section class="card">
                            <header class="card-header">
                                <h2>{ prof.name.clone() }</h2>
                                <p>{ format!("{} • {}", prof.specialty, prof.crm) }</p>
                            </header>
                            <p class="muted">{ format!("{} • {}", prof.email, prof.phone) }</p>
                            <ul class="list compact">
                                {
                                    for prof.work_schedule.iter().map(|shift| html! {
                                        <li class="list-row">
                                            <span>{ shift.day_label() }</span>
                                            <span class="pill">{ format!("{} - {}", shift.start_time, shift.end_time) }</span>
                                        </li>
                                    })
                                }
                            </ul>
                        </section>
                    })
                }
            </div>
        </div>
    }
}

#[function_component(AppointmentsView)]
pub fn appointments_view() -> Html {
    let appointments = use_state(load_appointments);
    let query = use_state(String::new);
    let status_tag = use_state(String::new);

    let repo = match &*appointments {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let status = pick(&AppointmentStatus::ALL, &status_tag, AppointmentStatus::as_str);
    let rows = filter_appointments(repo, &query, status);

    html! {
        <div class="page">
            { page_header("Agendamentos", "Gerencie consultas, exames e teleconsultas") }
            <div class="stat-grid">
                {
                    for [
                        (AppointmentStatus::Agendado, "blue"),
                        (AppointmentStatus::Confirmado, "green"),
                        (AppointmentStatus::EmAndamento, "orange"),
                        (AppointmentStatus::Concluido, "purple"),
                    ]
                    .into_iter()
                    .map(|(status, tone)| stat_card(status.label(), count_by_status(repo, status).to_string(), tone))
                }
            </div>
            <div class="toolbar">
                { search_box(&query, "Buscar por paciente, profissional ou especialidade") }
                { select_box(
                    &status_tag,
                    "Todos os status",
                    enum_options(&AppointmentStatus::ALL, AppointmentStatus::as_str, AppointmentStatus::label),
                ) }
            </div>
            <section class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Data"}</th>
                            <th>{"Paciente"}</th>
                            <th>{"Profissional"}</th>
                            <th>{"Especialidade"}</th>
                            <th>{"Tipo"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if rows.is_empty() {
                                empty_row(6, "Nenhum agendamento encontrado")
                            } else {
                                html! { for rows.into_iter().map(appointment_row) }
                            }
                        }
                    </tbody>
                </table>
            </section>
        </div>
    }
}

/// Lịch của chính bác sĩ đang đăng nhập, khớp theo tên.
#[function_component(ScheduleView)]
pub fn schedule_view(props: &IdentityProps) -> Html {
    let appointments = use_state(load_appointments);

    let repo = match &*appointments {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let agenda = schedule_for(repo, &props.identity.name);
    let confirmed = agenda
        .iter()
        .filter(|apt| apt.status == AppointmentStatus::Confirmado)
        .count();
    let remote = agenda
        .iter()
        .filter(|apt| apt.kind == AppointmentKind::Teleconsulta)
        .count();

    html! {
        <div class="page">
            { page_header("Minha Agenda", "Consultas e compromissos do dia") }
            <div class="stat-grid">
                { stat_card("Consultas", agenda.len().to_string(), "blue") }
                { stat_card("Confirmadas", confirmed.to_string(), "green") }
                { stat_card("Teleconsultas", remote.to_string(), "purple") }
            </div>
            <section class="card">
                <ul class="list">
                    {
                        if agenda.is_empty() {
                            html! { <li class="empty">{"Nenhuma consulta agendada"}</li> }
                        } else {
                            html! {
                                for agenda.iter().map(|apt| html! {
                                    <li class="list-row">
                                        <div>
                                            <strong>{ apt.patient_name.clone() }</strong>
                                            <span class="muted">
                                                { format!("{} • {}", apt.kind.label(), apt.location.clone().unwrap_or_else(|| "Online".to_string())) }
                                            </span>
                                        </div>
                                        <div class="row-end">
                                            <span class="pill">{ format!("{} {}", format_date(apt.date), apt.time) }</span>
                                            { badge(apt.status.label(), appointment_level(apt.status)) }
                                        </div>
                                    </li>
                                })
                            }
                        }
                    }
                </ul>
            </section>
        </div>
    }
}

#[derive(Clone, Copy, Default, PartialEq)]
struct CallControls {
    in_call: bool,
    mic_muted: bool,
    camera_off: bool,
    sharing_screen: bool,
}

#[function_component(TelemedicineView)]
pub fn telemedicine_view(props: &IdentityProps) -> Html {
    let appointments = use_state(load_appointments);
    let controls = use_state(CallControls::default);

    let toggle = |apply: fn(&mut CallControls)| {
        let controls = controls.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *controls;
            apply(&mut next);
            controls.set(next);
        })
    };

    let repo = match &*appointments {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let sessions = repo.filter(|apt| apt.kind == AppointmentKind::Teleconsulta);
    let state = *controls;

    let room = if state.in_call {
        html! {
            <section class="card call-room">
                <header class="card-header">
                    <h2>{"Teleconsulta em andamento"}</h2>
                    <p>{ props.identity.name.clone() }</p>
                </header>
                <div class="call-video" data-off={state.camera_off.to_string()}>
                    { if state.camera_off { "Câmera desligada" } else if state.sharing_screen { "Compartilhando tela" } else { "Vídeo ativo" } }
                </div>
                <div class="call-controls">
                    <button type="button" class="button outline" onclick={toggle(|c| c.mic_muted = !c.mic_muted)}>
                        { if state.mic_muted { "Ativar microfone" } else { "Silenciar microfone" } }
                    </button>
                    <button type="button" class="button outline" onclick={toggle(|c| c.camera_off = !c.camera_off)}>
                        { if state.camera_off { "Ligar câmera" } else { "Desligar câmera" } }
                    </button>
                    <button type="button" class="button outline" onclick={toggle(|c| c.sharing_screen = !c.sharing_screen)}>
                        { if state.sharing_screen { "Parar compartilhamento" } else { "Compartilhar tela" } }
                    </button>
                    <button type="button" class="button danger" onclick={toggle(|c| *c = CallControls::default())}>
                        {"Encerrar"}
                    </button>
                </div>
            </section>
        }
    } else {
        Html::default()
    };

    html! {
        <div class="page">
            { page_header("Telemedicina", "Consultas e atendimentos online") }
            { room }
            <section class="card">
                <header class="card-header">
                    <h2>{"Próximas Teleconsultas"}</h2>
                    <p>{"Atendimentos online agendados"}</p>
                </header>
                <ul class="list">
                    {
                        if sessions.is_empty() {
                            html! { <li class="empty">{"Nenhuma teleconsulta agendada"}</li> }
                        } else {
                            html! {
                                for sessions.iter().map(|apt| html! {
                                    <li class="list-row">
                                        <div>
                                            <strong>{ format!("{} • {}", apt.professional_name, apt.specialty) }</strong>
                                            <span class="muted">{ apt.patient_name.clone() }</span>
                                        </div>
                                        <div class="row-end">
                                            <span class="pill">{ format!("{} {}", format_date(apt.date), apt.time) }</span>
                                            <button
                                                type="button"
                                                class="button primary"
                                                disabled={state.in_call}
                                                onclick={toggle(|c| c.in_call = true)}
                                            >
                                                {"Entrar na Sala"}
                                            </button>
                                        </div>
                                    </li>
                                })
                            }
                        }
                    }
                </ul>
            </section>
        </div>
    }
}

#[function_component(MedicalRecordsView)]
pub fn medical_records_view() -> Html {
    let records = use_state(load_medical_records);
    let patients = use_state(load_patients);
    let query = use_state(String::new);

    let repo = match &*records {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let patient_name = |id: &str| -> String {
        match &*patients {
            Ok(patients) => patients
                .get(id)
                .map(|patient| patient.name.clone())
                .unwrap_or_default(),
            Err(_) => String::new(),
        }
    };
    let rows: Vec<(&MedicalRecord, String)> = repo
        .items()
        .iter()
        .map(|record| (record, patient_name(&record.patient_id)))
        .filter(|(record, name)| {
            matches_query(
                &query,
                &[
                    name.as_str(),
                    record.diagnosis.as_str(),
                    record.professional_name.as_str(),
                ],
            )
        })
        .collect();

    html! {
        <div class="page">
            { page_header("Prontuários Médicos", "Histórico e registros clínicos") }
            <div class="toolbar">
                { search_box(&query, "Buscar por paciente, diagnóstico ou profissional") }
            </div>
            {
                if rows.is_empty() {
                    html! { <div class="card empty">{"Nenhum prontuário encontrado"}</div> }
                } else {
                    html! {
                        for rows.iter().map(|(record, name)| html! {
                            <section class="card">
                                <header class="card-header">
                                    <h2>{ name.clone() }</h2>
                                    <p>{ format!("{} • {}", format_date(record.date), record.professional_name) }</p>
                                </header>
                                <dl class="facts">
                                    <dt>{"Queixa Principal"}</dt>
                                    <dd>{ record.complaints.clone() }</dd>
                                    <dt>{"Diagnóstico"}</dt>
                                    <dd>{ record.diagnosis.clone() }</dd>
                                    <dt>{"Tratamento"}</dt>
                                    <dd>{ record.treatment.clone() }</dd>
                                    <dt>{"Exames"}</dt>
                                    <dd>
                                        {
                                            for record.exams.iter().map(|exam| html! {
                                                <span class="chip">{ format!("{} ({})", exam.exam_type, exam.status.label()) }</span>
                                            })
                                        }
                                    </dd>
                                </dl>
                                { record.notes.clone().map(|notes| html! { <p class="muted">{ notes }</p> }).unwrap_or_default() }
                            </section>
                        })
                    }
                }
            }
        </div>
    }
}

#[function_component(PrescriptionsView)]
pub fn prescriptions_view() -> Html {
    let records = use_state(load_medical_records);
    let query = use_state(String::new);

    let repo = match &*records {
        Ok(repo) => repo,
        Err(err) => return load_failed(err),
    };
    let lines: Vec<_> = prescription_lines(repo)
        .into_iter()
        .filter(|line| {
            matches_query(
                &query,
                &[
                    line.prescription.medication.as_str(),
                    line.record.professional_name.as_str(),
                    line.record.diagnosis.as_str(),
                ],
            )
        })
        .collect();

    html! {
        <div class="page">
            { page_header("Prescrições", "Receitas emitidas nos atendimentos") }
            <div class="toolbar">
                { search_box(&query, "Buscar por medicamento, profissional ou diagnóstico") }
            </div>
            <p class="muted">{ format!("{} prescrição(ões) encontrada(s)", lines.len()) }</p>
            <section class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Medicamento"}</th>
                            <th>{"Posologia"}</th>
                            <th>{"Duração"}</th>
                            <th>{"Profissional"}</th>
                            <th>{"Data"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if lines.is_empty() {
                                empty_row(5, "Nenhuma prescrição encontrada")
                            } else {
                                html! {
                                    for lines.iter().map(|line| html! {
                                        <tr>
                                            <td>
                                                <strong>{ line.prescription.medication.clone() }</strong>
                                                {
                                                    line.prescription.instructions.clone()
                                                        .map(|text| html! { <span class="muted block">{ text }</span> })
                                                        .unwrap_or_default()
                                                }
                                            </td>
                                            <td>{ format!("{} • {}", line.prescription.dosage, line.prescription.frequency) }</td>
                                            <td>{ line.prescription.duration.clone() }</td>
                                            <td>{ line.record.professional_name.clone() }</td>
                                            <td>{ format_date(line.record.date) }</td>
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
