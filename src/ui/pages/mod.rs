#![allow(non_snake_case)]

mod auth;
mod contact;
mod home;
mod landing;
mod users;

pub use auth::{LoginPage, RegisterPage};
pub use contact::ContactPage;
pub use home::HomePage;
pub use landing::LandingPage;
pub use users::UsersPage;

use crate::app::AppState;
use crate::site::Page;
use crate::view::{self, Welcome};
use dioxus::prelude::*;

/// Labelled input bound to a string signal.
#[component]
fn TextField(label: &'static str, kind: &'static str, value: Signal<String>) -> Element {
    let mut value = value;
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                class: "field-input",
                r#type: "{kind}",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

/// Welcome banner for the current session.
#[component]
fn WelcomeBanner() -> Element {
    let app_state = use_context::<AppState>();
    // Re-pull when the session changes
    let _ = app_state.session.read();
    let welcome = view::welcome(app_state.site.display_name());

    match welcome {
        Welcome::Greeting { name } => rsx! {
            div {
                class: "alert alert-success",
                "Bienvenido(a), "
                strong { "{name}" }
                ". Disfruta compartiendo tus creaciones."
            }
        },
        Welcome::Invitation => {
            let app_state_login = app_state.clone();
            let app_state_register = app_state.clone();
            rsx! {
                div {
                    class: "alert alert-info",
                    "Bienvenido(a). "
                    button { class: "link", onclick: move |_| app_state_login.navigate(Page::Login), "Inicia sesión" }
                    " o "
                    button { class: "link", onclick: move |_| app_state_register.navigate(Page::Register), "Regístrate" }
                    " para comentar."
                }
            }
        }
    }
}
