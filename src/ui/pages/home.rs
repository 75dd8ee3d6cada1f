use crate::app::AppState;
use crate::notice::Notice;
use crate::site::{GuardedAction, Page, ReviewForm, SiteError};
use crate::ui::pages::{TextField, WelcomeBanner};
use crate::view::{self, ReviewCard};
use dioxus::prelude::*;
use std::time::Duration;

/// Review feed with the publish form on top.
#[component]
pub fn HomePage() -> Element {
    let app_state = use_context::<AppState>();
    // Full rebuild from the store whenever anything was written
    let _ = app_state.revision.read();
    let cards = view::review_cards(&app_state.site.reviews());

    rsx! {
        section {
            class: "page home",

            WelcomeBanner {}
            PublishForm {}

            h2 { "Reseñas" }
            if cards.is_empty() {
                p { class: "muted", "Aún no hay reseñas." }
            }
            for card in cards {
                ReviewCardView { key: "{card.id}", card: card }
            }
        }
    }
}

#[component]
fn PublishForm() -> Element {
    let app_state = use_context::<AppState>();
    let mut drink_name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut photo = use_signal(String::new);
    let mut publishing = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        if publishing() {
            return;
        }
        let form = ReviewForm {
            drink_name: drink_name(),
            description: description(),
            photo: photo(),
        };
        let app_state = app_state.clone();
        publishing.set(true);
        spawn(async move {
            match app_state.site.publish_review(&form).await {
                Ok(_) => {
                    drink_name.set(String::new());
                    description.set(String::new());
                    photo.set(String::new());
                    app_state.refresh();
                    app_state.notify(Notice::success("Reseña publicada"));
                }
                Err(e @ SiteError::LoginRequired(GuardedAction::PublishReview)) => {
                    app_state.report(&e);
                    app_state.navigate_after(Page::Login, Duration::from_millis(900));
                }
                Err(e) => app_state.report(&e),
            }
            publishing.set(false);
        });
    };

    rsx! {
        div {
            class: "card form",
            h2 { "Publicar reseña" }
            TextField { label: "Nombre del trago", kind: "text", value: drink_name }
            label {
                class: "field",
                span { class: "field-label", "Descripción" }
                textarea {
                    class: "field-input",
                    rows: "3",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            TextField { label: "Foto (URL o ruta de archivo, opcional)", kind: "text", value: photo }
            button {
                class: "btn btn-primary",
                disabled: publishing(),
                onclick: submit,
                if publishing() { "Publicando..." } else { "Publicar" }
            }
        }
    }
}

#[component]
fn ReviewCardView(card: ReviewCard) -> Element {
    let app_state = use_context::<AppState>();
    let mut comment = use_signal(String::new);

    let storage_index = card.storage_index;
    let display_index = card.display_index;
    let app_state_comment = app_state.clone();
    let app_state_delete = app_state.clone();

    rsx! {
        article {
            class: "card resena",

            img {
                class: "resena-img",
                src: "{card.photo}",
                alt: "{card.drink_name}",
            }

            div {
                class: "resena-body",
                h3 { "{card.drink_name}" }
                div {
                    class: "meta",
                    "por "
                    strong { "{card.author}" }
                    " · {card.created_at}"
                }
                p { "{card.description}" }

                div {
                    class: "comentarios",
                    for (i, line) in card.comments.iter().enumerate() {
                        p {
                            key: "{i}",
                            class: "comentario",
                            strong { "{line.author}: " }
                            "{line.text}"
                        }
                    }
                }

                div {
                    class: "actions",
                    input {
                        class: "field-input",
                        r#type: "text",
                        placeholder: "Escribe tu comentario",
                        value: "{comment}",
                        oninput: move |evt| comment.set(evt.value()),
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            let text = comment();
                            match app_state_comment.site.add_comment(storage_index, &text) {
                                Ok(_) => {
                                    comment.set(String::new());
                                    app_state_comment.refresh();
                                    app_state_comment.notify(Notice::success("Comentario agregado"));
                                }
                                Err(e) => app_state_comment.report(&e),
                            }
                        },
                        "Comentar"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| match app_state_delete.site.delete_review(display_index) {
                            Ok(_) => {
                                app_state_delete.refresh();
                                app_state_delete.notify(Notice::info("Reseña eliminada"));
                            }
                            Err(e) => app_state_delete.report(&e),
                        },
                        "Eliminar"
                    }
                }
            }
        }
    }
}
