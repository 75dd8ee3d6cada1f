use crate::app::AppState;
use crate::notice::Notice;
use crate::site::ContactForm;
use crate::ui::pages::TextField;
use dioxus::prelude::*;

#[component]
pub fn ContactPage() -> Element {
    let app_state = use_context::<AppState>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let submit = move |_: MouseEvent| {
        let form = ContactForm {
            name: name(),
            email: email(),
            message: message(),
        };
        match app_state.site.submit_contact(&form) {
            Ok(_) => {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                app_state.notify(Notice::success(
                    "Gracias por tu mensaje, te responderemos pronto.",
                ));
            }
            Err(e) => app_state.report(&e),
        }
    };

    rsx! {
        section {
            class: "page contact",
            h1 { "Contacto" }
            div {
                class: "card form",
                TextField { label: "Nombre", kind: "text", value: name }
                TextField { label: "Correo", kind: "email", value: email }
                label {
                    class: "field",
                    span { class: "field-label", "Mensaje" }
                    textarea {
                        class: "field-input",
                        rows: "5",
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                }
                button { class: "btn btn-primary", onclick: submit, "Enviar" }
            }
        }
    }
}
