use crate::app::AppState;
use crate::view::{self, UserList};
use dioxus::prelude::*;

/// Registered users, in registration order.
#[component]
pub fn UsersPage() -> Element {
    let app_state = use_context::<AppState>();
    let _ = app_state.revision.read();
    let list = view::user_list(&app_state.site.users());

    rsx! {
        section {
            class: "page users",
            h1 { "Usuarios registrados" }
            match list {
                UserList::Empty { message } => rsx! { p { class: "muted", "{message}" } },
                UserList::Rows(rows) => rsx! {
                    for row in rows {
                        div {
                            key: "{row.email}",
                            class: "card usuario",
                            h3 { "{row.name}" }
                            p { span { class: "muted", "Email: " } "{row.email}" }
                            p {
                                span { class: "muted", "Tel: " }
                                "{row.phone} • "
                                span { class: "muted", "Edad: " }
                                "{row.age}"
                            }
                        }
                    }
                },
            }
        }
    }
}
