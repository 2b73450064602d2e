use vidaplus_core::menu::{allows, resolve_menu};
use vidaplus_core::{Role, ViewId};
use vidaplus_fixtures::help::{load_faq, search_faq};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::events::InputEvent;
use yew::prelude::*;
use yew::TargetCast;

use super::{badge, load_failed, page_header, search_box, IdentityProps};

/// Phiên bản hiển thị trong màn hình "Sobre o Sistema".
const SYSTEM_VERSION: &str = "1.0.0 (Build 2024.12)";

/// Thông điệp phản hồi sau khi bấm lưu/gửi: `(thành công, nội dung)`.
type Feedback = Option<(bool, String)>;

fn feedback_notice(feedback: &Feedback) -> Html {
    feedback
        .clone()
        .map(|(ok, message)| {
            html! {
                <p class="notice" data-level={if ok { "moderate" } else { "critical" }}>{ message }</p>
            }
        })
        .unwrap_or_default()
}

fn toggle_row<T: Clone + 'static>(
    state: &UseStateHandle<T>,
    label: &'static str,
    checked: bool,
    field: fn(&mut T) -> &mut bool,
) -> Html {
    let onchange = {
        let state = state.clone();
        Callback::from(move |_: Event| {
            let mut next = (*state).clone();
            let flag = field(&mut next);
            *flag = !*flag;
            state.set(next);
        })
    };
    html! {
        <label class="toggle-row">
            <span>{ label }</span>
            <input type="checkbox" checked={checked} onchange={onchange} />
        </label>
    }
}

#[derive(Clone, PartialEq)]
struct NotificationPrefs {
    email: bool,
    sms: bool,
    appointment_reminders: bool,
    system_updates: bool,
    marketing: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            sms: true,
            appointment_reminders: true,
            system_updates: true,
            marketing: false,
        }
    }
}

#[function_component(ProfileView)]
pub fn profile_view(props: &IdentityProps) -> Html {
    let identity = &props.identity;
    let prefs = use_state(NotificationPrefs::default);
    let feedback = use_state(Feedback::default);

    let on_save = {
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| {
            feedback.set(Some((true, "Preferências de notificação atualizadas".to_string())));
        })
    };

    html! {
        <div class="page">
            { page_header("Meu Perfil", "Gerencie suas informações pessoais e preferências") }
            <section class="card profile-card">
                <span class="avatar large" aria-hidden="true">{ identity.initials() }</span>
                <div>
                    <h2>{ identity.name.clone() }</h2>
                    <p class="muted">{ identity.role.display_name() }</p>
                    { badge("Conta Ativa", "moderate") }
                </div>
            </section>
            <div class="card-grid">
                <section class="card">
                    <header class="card-header">
                        <h2>{"Informações Pessoais"}</h2>
                    </header>
                    <dl class="facts">
                        <dt>{"Nome Completo"}</dt>
                        <dd>{ identity.name.clone() }</dd>
                        <dt>{"E-mail"}</dt>
                        <dd>{ identity.email.clone() }</dd>
                        <dt>{"CPF"}</dt>
                        <dd>{ identity.cpf.clone() }</dd>
                        <dt>{"Telefone"}</dt>
                        <dd>{ identity.phone.clone() }</dd>
                    </dl>
                </section>
                {
                    if identity.role == Role::Professional {
                        html! {
                            <section class="card">
                                <header class="card-header">
                                    <h2>{"Informações Profissionais"}</h2>
                                </header>
                                <dl class="facts">
                                    <dt>{"Especialidade"}</dt>
                                    <dd>{ identity.specialty.clone().unwrap_or_else(|| "-".to_string()) }</dd>
                                    <dt>{"CRM"}</dt>
                                    <dd>{ identity.crm.clone().unwrap_or_else(|| "-".to_string()) }</dd>
                                </dl>
                            </section>
                        }
                    } else {
                        Html::default()
                    }
                }
                <section class="card">
                    <header class="card-header">
                        <h2>{"Preferências de Notificação"}</h2>
                    </header>
                    { toggle_row(&prefs, "Notificações por E-mail", prefs.email, |p| &mut p.email) }
                    { toggle_row(&prefs, "Notificações por SMS", prefs.sms, |p| &mut p.sms) }
                    { toggle_row(&prefs, "Lembretes de Consultas", prefs.appointment_reminders, |p| &mut p.appointment_reminders) }
                    { toggle_row(&prefs, "Atualizações do Sistema", prefs.system_updates, |p| &mut p.system_updates) }
                    { toggle_row(&prefs, "E-mails de Marketing", prefs.marketing, |p| &mut p.marketing) }
                    { feedback_notice(&feedback) }
                    <button type="button" class="button primary" onclick={on_save}>{"Salvar Alterações"}</button>
                </section>
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct SystemSettings {
    email_notifications: bool,
    sms_notifications: bool,
    appointment_reminders: bool,
    system_alerts: bool,
    mfa: bool,
    telemedicine_enabled: bool,
    lab_integration: bool,
    pharmacy_integration: bool,
    home_care_enabled: bool,
    compact_mode: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: true,
            appointment_reminders: true,
            system_alerts: true,
            mfa: true,
            telemedicine_enabled: true,
            lab_integration: true,
            pharmacy_integration: true,
            home_care_enabled: true,
            compact_mode: false,
        }
    }
}

fn save_button(feedback: &UseStateHandle<Feedback>, section: &'static str) -> Html {
    let onclick = {
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| {
            feedback.set(Some((true, format!("Configurações de {section} salvas com sucesso!"))));
        })
    };
    html! {
        <button type="button" class="button primary" onclick={onclick}>{"Salvar"}</button>
    }
}

#[function_component(SettingsView)]
pub fn settings_view() -> Html {
    let settings = use_state(SystemSettings::default);
    let feedback = use_state(Feedback::default);

    html! {
        <div class="page">
            { page_header("Configurações do Sistema", "Parâmetros gerais, integrações e segurança") }
            { feedback_notice(&feedback) }
            <div class="card-grid">
                <section class="card">
                    <header class="card-header">
                        <h2>{"Configurações Gerais"}</h2>
                    </header>
                    <dl class="facts">
                        <dt>{"Nome do Sistema"}</dt>
                        <dd>{"VidaPlus - SGHSS"}</dd>
                        <dt>{"Idioma"}</dt>
                        <dd>{"Português (Brasil)"}</dd>
                        <dt>{"Fuso Horário"}</dt>
                        <dd>{"Brasília (GMT-3)"}</dd>
                        <dt>{"Formato de Data"}</dt>
                        <dd>{"DD/MM/YYYY"}</dd>
                        <dt>{"Moeda"}</dt>
                        <dd>{"Real (R$)"}</dd>
                    </dl>
                </section>
                <section class="card">
                    <header class="card-header">
                        <h2>{"Notificações"}</h2>
                    </header>
                    { toggle_row(&settings, "Notificações por E-mail", settings.email_notifications, |s| &mut s.email_notifications) }
                    { toggle_row(&settings, "Notificações por SMS", settings.sms_notifications, |s| &mut s.sms_notifications) }
                    { toggle_row(&settings, "Lembretes de Consultas", settings.appointment_reminders, |s| &mut s.appointment_reminders) }
                    { toggle_row(&settings, "Alertas do Sistema", settings.system_alerts, |s| &mut s.system_alerts) }
                    { save_button(&feedback, "notificações") }
                </section>
                <section class="card">
                    <header class="card-header">
                        <h2>{"Segurança"}</h2>
                    </header>
                    <dl class="facts">
                        <dt>{"Tempo de Sessão"}</dt>
                        <dd>{"30 minutos"}</dd>
                        <dt>{"Expiração de Senha"}</dt>
                        <dd>{"90 dias"}</dd>
                    </dl>
                    { toggle_row(&settings, "Autenticação em Dois Fatores", settings.mfa, |s| &mut s.mfa) }
                    { save_button(&feedback, "segurança") }
                </section>
                <section class="card">
                    <header class="card-header">
                        <h2>{"Integrações"}</h2>
                    </header>
                    { toggle_row(&settings, "Telemedicina", settings.telemedicine_enabled, |s| &mut s.telemedicine_enabled) }
                    { toggle_row(&settings, "Integração com Laboratório", settings.lab_integration, |s| &mut s.lab_integration) }
                    { toggle_row(&settings, "Integração com Farmácia", settings.pharmacy_integration, |s| &mut s.pharmacy_integration) }
                    { toggle_row(&settings, "Home Care", settings.home_care_enabled, |s| &mut s.home_care_enabled) }
                    { save_button(&feedback, "integrações") }
                </section>
                <section class="card">
                    <header class="card-header">
                        <h2>{"Aparência"}</h2>
                    </header>
                    { toggle_row(&settings, "Modo Compacto", settings.compact_mode, |s| &mut s.compact_mode) }
                    { save_button(&feedback, "aparência") }
                </section>
            </div>
        </div>
    }
}

#[function_component(HelpView)]
pub fn help_view() -> Html {
    let faq = use_state(load_faq);
    let query = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let feedback = use_state(Feedback::default);

    let on_subject = {
        let subject = subject.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            subject.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            message.set(input.value());
        })
    };
    let on_submit = {
        let subject = subject.clone();
        let message = message.clone();
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| {
            if subject.trim().is_empty() || message.trim().is_empty() {
                feedback.set(Some((false, "Preencha todos os campos obrigatórios".to_string())));
                return;
            }
            subject.set(String::new());
            message.set(String::new());
            feedback.set(Some((
                true,
                "Ticket de suporte criado com sucesso! Você receberá uma resposta em até 24 horas."
                    .to_string(),
            )));
        })
    };

    let categories = match &*faq {
        Ok(categories) => search_faq(categories, &query),
        Err(err) => return load_failed(err),
    };

    html! {
        <div class="page">
            { page_header("Central de Ajuda", "Tire suas dúvidas ou fale com o suporte") }
            <div class="toolbar">
                { search_box(&query, "Buscar nas perguntas frequentes") }
            </div>
            <div class="card-grid wide">
                <section class="card">
                    <header class="card-header">
                        <h2>{"Perguntas Frequentes"}</h2>
                    </header>
                    {
                        if categories.is_empty() {
                            html! { <p class="empty">{"Nenhuma pergunta encontrada"}</p> }
                        } else {
                            html! {
                                for categories.into_iter().map(|category| html! {
                                    <div class="faq-group">
                                        <h3>{ category.category }</h3>
                                        {
                                            for category.questions.into_iter().map(|item| html! {
                                                <details class="faq-item">
                                                    <summary>{ item.question }</summary>
                                                    <p>{ item.answer }</p>
                                                </details>
                                            })
                                        }
                                    </div>
                                })
                            }
                        }
                    }
                </section>
                <section class="card">
                    <header class="card-header">
                        <h2>{"Abrir Ticket de Suporte"}</h2>
                        <p>{"Nossa equipe responde em até 24 horas"}</p>
                    </header>
                    <div class="form-grid single">
                        <label>
                            <span>{"Assunto *"}</span>
                            <input type="text" value={(*subject).clone()} oninput={on_subject} />
                        </label>
                        <label>
                            <span>{"Mensagem *"}</span>
                            <textarea rows="5" value={(*message).clone()} oninput={on_message} />
                        </label>
                    </div>
                    { feedback_notice(&feedback) }
                    <button type="button" class="button primary" onclick={on_submit}>{"Enviar Ticket"}</button>
                    <ul class="list compact">
                        <li class="list-row"><span>{"Telefone"}</span><strong>{"0800 123 4567"}</strong></li>
                        <li class="list-row"><span>{"E-mail"}</span><strong>{"suporte@vidaplus.com.br"}</strong></li>
                    </ul>
                </section>
            </div>
        </div>
    }
}

fn info_list(title: &'static str, items: &[&'static str]) -> Html {
    html! {
        <section class="card">
            <header class="card-header">
                <h2>{ title }</h2>
            </header>
            <ul class="list compact">
                { for items.iter().map(|item| html! { <li class="list-row">{ *item }</li> }) }
            </ul>
        </section>
    }
}

#[function_component(SystemInfoView)]
pub fn system_info_view() -> Html {
    html! {
        <div class="page">
            { page_header("Sobre o Sistema", "Sistema VidaPlus - SGHSS") }
            <div class="stat-grid">
                <div class="stat-card" data-tone="blue">
                    <span class="stat-title">{"Versão"}</span>
                    <strong class="stat-value">{ SYSTEM_VERSION }</strong>
                </div>
                <div class="stat-card" data-tone="green">
                    <span class="stat-title">{"Alto Desempenho"}</span>
                    <strong class="stat-value">{"99.5% de disponibilidade"}</strong>
                </div>
                <div class="stat-card" data-tone="purple">
                    <span class="stat-title">{"Segurança Garantida"}</span>
                    <strong class="stat-value">{"Conforme LGPD"}</strong>
                </div>
                <div class="stat-card" data-tone="orange">
                    <span class="stat-title">{"Multi-unidade"}</span>
                    <strong class="stat-value">{"Escalável"}</strong>
                </div>
            </div>
            <div class="card-grid">
                { info_list("Módulos Principais", &[
                    "Dashboard Analítico",
                    "Gestão de Pacientes",
                    "Agendamento Inteligente",
                    "Prontuário Eletrônico",
                    "Telemedicina",
                ]) }
                { info_list("Módulos Administrativos", &[
                    "Laboratório Clínico",
                    "Farmácia e Estoque",
                    "Home Care",
                    "Gestão de Leitos",
                    "Faturamento",
                ]) }
                { info_list("Segurança", &[
                    "Criptografia",
                    "Autenticação",
                    "Auditoria",
                    "Monitoramento",
                ]) }
                { info_list("Conformidade Regulatória", &[
                    "LGPD - Lei Geral de Proteção de Dados",
                    "Consentimento explícito para tratamento de dados",
                    "Direito ao acesso, correção e exclusão de dados",
                    "Portabilidade de dados pessoais",
                    "Auditoria completa de acessos",
                ]) }
            </div>
        </div>
    }
}

/// Nhãn của màn hình lấy từ menu đầu tiên chứa nó.
fn view_label(view: ViewId) -> Option<&'static str> {
    Role::ALL.into_iter().find_map(|role| {
        resolve_menu(role)
            .into_iter()
            .find(|entry| entry.view == view)
            .map(|entry| entry.label)
    })
}

#[function_component(PrototypesView)]
pub fn prototypes_view() -> Html {
    html! {
        <div class="page">
            { page_header("Protótipos do Sistema VidaPlus", "Todas as telas implementadas e os perfis com acesso") }
            <div class="stat-grid">
                <div class="stat-card" data-tone="blue">
                    <span class="stat-title">{"Telas Totais"}</span>
                    <strong class="stat-value">{ ViewId::ALL.len() }</strong>
                </div>
                <div class="stat-card" data-tone="green">
                    <span class="stat-title">{"Perfis"}</span>
                    <strong class="stat-value">{ Role::ALL.len() }</strong>
                </div>
            </div>
            <section class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Tela"}</th>
                            <th>{"Identificador"}</th>
                            <th>{"Perfis"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for ViewId::ALL.into_iter().map(|view| html! {
                                <tr>
                                    <td>{ view_label(view).unwrap_or("-") }</td>
                                    <td class="mono">{ view.as_str() }</td>
                                    <td>
                                        {
                                            for Role::ALL
                                                .into_iter()
                                                .filter(|role| allows(*role, view))
                                                .map(|role| html! { <span class="chip">{ role.display_name() }</span> })
                                        }
                                    </td>
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </section>
        </div>
    }
}
