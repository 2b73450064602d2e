#![cfg(target_arch = "wasm32")]

use crate::storage::LocalStore;
use crate::{styles, views};
use vidaplus_core::{
    authenticate, demo_accounts, quick_login, tour_steps, DashboardSummary, Identity, MenuEntry,
    MenuIcon, NavigationOutcome, Screen, Shell, ShellConfig, ShellError, TourCursor, ViewId,
};
use wasm_bindgen::JsValue;
use web_sys::{console, HtmlInputElement};
use yew::events::{InputEvent, SubmitEvent};
use yew::prelude::*;
use yew::TargetCast;

type AppShell = Shell<LocalStore>;

fn report(err: &ShellError) {
    console::error_1(&JsValue::from_str(&err.to_string()));
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ShellConfig,
}

/// Gốc ứng dụng. `Shell` nằm trong một `RefCell` của hook; mỗi chuyển trạng thái
/// xong thì ép render lại.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    use_effect_with((), |_| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            if let Err(err) = styles::ensure_styles(&document) {
                console::error_1(&err);
            }
        }
        || ()
    });

    let config = props.config.clone();
    let shell = use_mut_ref(move || AppShell::launch(LocalStore::open(), config));
    let redraw = use_force_update();

    let on_login = {
        let shell = shell.clone();
        let redraw = redraw.clone();
        Callback::from(move |identity: Identity| {
            if let Err(err) = shell.borrow_mut().on_login(identity) {
                report(&err);
            }
            redraw.force_update();
        })
    };

    let on_complete_tour = {
        let shell = shell.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            if let Err(err) = shell.borrow_mut().complete_tour() {
                report(&err);
            }
            redraw.force_update();
        })
    };

    let on_skip_tour = {
        let shell = shell.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            if let Err(err) = shell.borrow_mut().skip_tour() {
                report(&err);
            }
            redraw.force_update();
        })
    };

    let on_navigate = {
        let shell = shell.clone();
        let redraw = redraw.clone();
        Callback::from(move |view: ViewId| {
            let outcome = shell.borrow_mut().on_navigate(view);
            if let NavigationOutcome::Refused(view) = outcome {
                console::warn_1(&JsValue::from_str(&format!(
                    "Màn hình {view} không thuộc menu hiện tại"
                )));
            }
            redraw.force_update();
        })
    };

    let on_logout = {
        let shell = shell.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            if let Err(err) = shell.borrow_mut().on_logout() {
                report(&err);
            }
            redraw.force_update();
        })
    };

    let state = shell.borrow();
    let body = match state.screen() {
        Screen::Login => html! { <LoginView on_login={on_login} /> },
        Screen::Tour(identity) => html! {
            <TourView
                first_name={identity.first_name().to_string()}
                on_complete={on_complete_tour}
                on_skip={on_skip_tour}
            />
        },
        Screen::View { identity, view } => html! {
            <div class="app-layout">
                <Sidebar
                    identity={identity.clone()}
                    menu={state.menu()}
                    active={view}
                    on_navigate={on_navigate}
                    on_logout={on_logout}
                />
                <main class="app-main" key={view.as_str()}>
                    { views::render(view, identity) }
                </main>
            </div>
        },
    };
    body
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<Identity>,
}

#[function_component(LoginView)]
fn login_view(props: &LoginProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match authenticate(&email, &password) {
                Ok(identity) => {
                    error.set(None);
                    on_login.emit(identity);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <div class="login-page">
            <div class="login-card">
                <header class="login-brand">
                    <span class="brand-mark">{"♥"}</span>
                    <h1>{"VidaPlus"}</h1>
                    <p>{"Sistema de Gestão Hospitalar"}</p>
                </header>
                <form class="login-form" onsubmit={on_submit}>
                    <h2>{"Entrar no Sistema"}</h2>
                    <label>
                        <span>{"E-mail"}</span>
                        <input
                            type="email"
                            placeholder="seu@email.com"
                            value={(*email).clone()}
                            oninput={on_email}
                            required=true
                        />
                    </label>
                    <label>
                        <span>{"Senha"}</span>
                        <input
                            type="password"
                            placeholder="••••••••"
                            value={(*password).clone()}
                            oninput={on_password}
                            required=true
                        />
                    </label>
                    {
                        if let Some(message) = (*error).clone() {
                            html! { <p class="login-error" role="alert">{ message }</p> }
                        } else {
                            Html::default()
                        }
                    }
                    <button type="submit" class="button primary">{"Entrar"}</button>
                </form>
                <div class="login-demo">
                    <span class="login-divider">{"Ou acesso rápido (demo)"}</span>
                    {
                        for demo_accounts().into_iter().map(|account| {
                            let on_login = props.on_login.clone();
                            let role = account.role;
                            let onclick = Callback::from(move |_| on_login.emit(quick_login(role)));
                            html! {
                                <button type="button" class="button outline" onclick={onclick}>
                                    { format!("Entrar como {}", role.display_name()) }
                                </button>
                            }
                        })
                    }
                </div>
            </div>
            <p class="login-footnote">{"Sistema em conformidade com LGPD • Dados criptografados"}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TourProps {
    pub first_name: String,
    pub on_complete: Callback<()>,
    pub on_skip: Callback<()>,
}

#[function_component(TourView)]
fn tour_view(props: &TourProps) -> Html {
    let steps = tour_steps();
    let cursor = use_state(|| TourCursor::new(steps.len()));

    let on_next = {
        let cursor = cursor.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| {
            let mut next = *cursor;
            if next.next() {
                cursor.set(next);
            } else {
                on_complete.emit(());
            }
        })
    };

    let on_previous = {
        let cursor = cursor.clone();
        Callback::from(move |_| {
            let mut previous = *cursor;
            previous.previous();
            cursor.set(previous);
        })
    };

    let on_skip = {
        let on_skip = props.on_skip.clone();
        Callback::from(move |_| on_skip.emit(()))
    };

    let Some(step) = steps.get(cursor.index()) else {
        return Html::default();
    };
    let next_label = if cursor.is_last() { "Começar" } else { "Próximo" };

    html! {
        <div class="tour-overlay">
            <section class="tour-card" aria-live="polite">
                <header class="tour-header">
                    <span class="tour-eyebrow">{ format!("Olá, {}", props.first_name) }</span>
                    <button type="button" class="link-button" onclick={on_skip}>{"Pular tour"}</button>
                </header>
                <div class="tour-progress">
                    <div class="tour-progress-bar" style={format!("width: {}%", cursor.progress_percent())}></div>
                </div>
                <h2>{ step.title }</h2>
                <p class="tour-description">{ step.description }</p>
                <ul class="tour-highlights">
                    { for step.highlights.iter().map(|text| html! { <li>{ *text }</li> }) }
                </ul>
                <footer class="tour-footer">
                    <span class="tour-counter">{ format!("{} de {}", cursor.index() + 1, cursor.total()) }</span>
                    <div class="tour-actions">
                        <button
                            type="button"
                            class="button outline"
                            onclick={on_previous}
                            disabled={cursor.is_first()}
                        >
                            {"Anterior"}
                        </button>
                        <button type="button" class="button primary" onclick={on_next}>{ next_label }</button>
                    </div>
                </footer>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub identity: Identity,
    pub menu: Vec<MenuEntry>,
    pub active: ViewId,
    pub on_navigate: Callback<ViewId>,
    pub on_logout: Callback<()>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <aside class="sidebar">
            <header class="sidebar-brand">
                <span class="brand-mark">{"♥"}</span>
                <div>
                    <strong>{"VidaPlus"}</strong>
                    <span>{"SGHSS"}</span>
                </div>
            </header>
            <nav class="sidebar-menu">
                {
                    for props.menu.iter().map(|entry| {
                        let view = entry.view;
                        let on_navigate = props.on_navigate.clone();
                        let onclick = Callback::from(move |_| on_navigate.emit(view));
                        html! {
                            <button
                                type="button"
                                class={classes!("menu-item", (view == props.active).then_some("is-active"))}
                                onclick={onclick}
                            >
                                <span class="menu-icon" aria-hidden="true">{ icon_glyph(entry.icon) }</span>
                                <span>{ entry.label }</span>
                            </button>
                        }
                    })
                }
            </nav>
            <footer class="sidebar-user">
                <span class="avatar">{ props.identity.initials() }</span>
                <div class="sidebar-user-text">
                    <strong>{ props.identity.name.clone() }</strong>
                    <span>{ props.identity.role.display_name() }</span>
                </div>
                <button type="button" class="button outline" onclick={on_logout}>{"Sair"}</button>
            </footer>
        </aside>
    }
}

fn icon_glyph(icon: MenuIcon) -> &'static str {
    match icon {
        MenuIcon::BarChart => "📊",
        MenuIcon::Bell => "🔔",
        MenuIcon::Calendar => "📅",
        MenuIcon::FileText => "📄",
        MenuIcon::Stethoscope => "🩺",
        MenuIcon::Video => "🎥",
        MenuIcon::UserCircle => "👤",
        MenuIcon::HelpCircle => "❓",
        MenuIcon::Users => "👥",
        MenuIcon::TestTube => "🧪",
        MenuIcon::Home => "🏠",
        MenuIcon::Pill => "💊",
        MenuIcon::BedDouble => "🛏",
        MenuIcon::DollarSign => "💲",
        MenuIcon::Shield => "🛡",
        MenuIcon::Settings => "⚙",
        MenuIcon::Info => "ℹ",
        MenuIcon::Layout => "🗂",
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub identity: Identity,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardProps) -> Html {
    let summary = DashboardSummary::for_identity(&props.identity);

    html! {
        <div class="page">
            <header class="page-header">
                <h1>{ summary.greeting.clone() }</h1>
                <p>{ summary.subtitle }</p>
            </header>
            <div class="stat-grid">
                {
                    for summary.stats.iter().map(|card| html! {
                        <div class="stat-card" data-tone={card.tone}>
                            <span class="stat-title">{ card.title }</span>
                            <strong class="stat-value">{ card.value }</strong>
                        </div>
                    })
                }
            </div>
            <section class="card">
                <header class="card-header">
                    <h2>{ summary.agenda_title }</h2>
                    <p>{ summary.agenda_description }</p>
                </header>
                <ul class="list">
                    {
                        for summary.upcoming.iter().map(|item| html! {
                            <li class="list-row">
                                <div>
                                    <strong>{ item.title }</strong>
                                    <span class="muted">{ item.detail }</span>
                                </div>
                                <span class="pill">{ item.time }</span>
                            </li>
                        })
                    }
                </ul>
            </section>
        </div>
    }
}
