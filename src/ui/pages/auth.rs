use crate::app::AppState;
use crate::notice::Notice;
use crate::site::{Page, Registration};
use crate::ui::pages::TextField;
use dioxus::prelude::*;
use std::time::Duration;

#[component]
pub fn LoginPage() -> Element {
    let app_state = use_context::<AppState>();
    let email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move |_: MouseEvent| {
        let (entered_email, entered_password) = (email(), password());
        match app_state.site.login(&entered_email, &entered_password) {
            Ok(user) => {
                app_state.sync_session();
                app_state.notify(Notice::success(format!("Bienvenido(a) {}", user.name)));
                app_state.navigate_after(Page::Home, Duration::from_millis(700));
            }
            Err(e) => {
                password.set(String::new());
                app_state.report(&e);
            }
        }
    };

    rsx! {
        section {
            class: "page auth",
            h1 { "Iniciar sesión" }
            div {
                class: "card form",
                TextField { label: "Correo", kind: "email", value: email }
                TextField { label: "Contraseña", kind: "password", value: password }
                button { class: "btn btn-primary", onclick: submit, "Ingresar" }
            }
        }
    }
}

#[component]
pub fn RegisterPage() -> Element {
    let app_state = use_context::<AppState>();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let phone = use_signal(String::new);
    let age = use_signal(String::new);
    let password = use_signal(String::new);

    let submit = move |_: MouseEvent| {
        let form = Registration {
            name: name(),
            email: email(),
            phone: phone(),
            age: age(),
            password: password(),
        };
        match app_state.site.register(&form) {
            Ok(user) => {
                app_state.sync_session();
                app_state.refresh();
                app_state.notify(Notice::success(format!(
                    "¡Registro exitoso! Bienvenido(a) {}",
                    user.name
                )));
                app_state.navigate_after(Page::Home, Duration::from_millis(900));
            }
            Err(e) => app_state.report(&e),
        }
    };

    rsx! {
        section {
            class: "page auth",
            h1 { "Registro" }
            div {
                class: "card form",
                TextField { label: "Nombre", kind: "text", value: name }
                TextField { label: "Correo", kind: "email", value: email }
                TextField { label: "Teléfono", kind: "tel", value: phone }
                TextField { label: "Edad", kind: "number", value: age }
                TextField { label: "Contraseña", kind: "password", value: password }
                button { class: "btn btn-primary", onclick: submit, "Crear cuenta" }
            }
        }
    }
}
