#![allow(non_snake_case)]

use crate::app::AppState;
use crate::site::Page;
use crate::types::Theme;
use crate::ui::notice::NoticeBanner;
use crate::ui::pages::{ContactPage, HomePage, LandingPage, LoginPage, RegisterPage, UsersPage};
use crate::ui::style::STYLE;
use crate::view;
use dioxus::prelude::*;

#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let page = *app_state.page.read();
    let theme = *app_state.theme.read();

    let root_class = match theme {
        Theme::Dark => "app dark-mode",
        Theme::Light => "app",
    };

    rsx! {
        style { "{STYLE}" }
        div {
            class: "{root_class}",

            NavBar {}
            NoticeBanner {}

            main {
                class: "content",
                match page {
                    Page::Landing => rsx! { LandingPage {} },
                    Page::Login => rsx! { LoginPage {} },
                    Page::Register => rsx! { RegisterPage {} },
                    Page::Home => rsx! { HomePage {} },
                    Page::Users => rsx! { UsersPage {} },
                    Page::Contact => rsx! { ContactPage {} },
                }
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    let app_state = use_context::<AppState>();
    let nav = view::nav(&app_state.session.read());
    let theme = *app_state.theme.read();

    let app_state_logout = app_state.clone();
    let app_state_day = app_state.clone();
    let app_state_night = app_state.clone();

    rsx! {
        nav {
            class: "navbar",

            span { class: "brand", "Tragos" }

            div {
                class: "nav-links",
                NavLink { target: Page::Landing }
                NavLink { target: Page::Home }
                NavLink { target: Page::Users }
                NavLink { target: Page::Contact }
                if nav.show_login {
                    NavLink { target: Page::Login }
                }
                if nav.show_register {
                    NavLink { target: Page::Register }
                }
                if nav.show_logout {
                    button {
                        class: "nav-link",
                        onclick: move |_| app_state_logout.logout(),
                        "Cerrar sesión"
                    }
                }
            }

            div {
                class: "theme-toggle",
                button {
                    class: if theme == Theme::Light { "btn-theme active" } else { "btn-theme" },
                    title: "Día",
                    onclick: move |_| app_state_day.set_theme(Theme::Light),
                    "☀"
                }
                button {
                    class: if theme == Theme::Dark { "btn-theme active" } else { "btn-theme" },
                    title: "Noche",
                    onclick: move |_| app_state_night.set_theme(Theme::Dark),
                    "☾"
                }
            }
        }
    }
}

#[component]
fn NavLink(target: Page) -> Element {
    let app_state = use_context::<AppState>();
    let active = *app_state.page.read() == target;
    let label = target.title();

    rsx! {
        button {
            class: if active { "nav-link active" } else { "nav-link" },
            onclick: move |_| app_state.navigate(target),
            "{label}"
        }
    }
}
