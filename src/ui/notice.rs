use crate::app::AppState;
use dioxus::prelude::*;

/// The current notice, if any, pinned to the top of the window.
#[component]
pub fn NoticeBanner() -> Element {
    let app_state = use_context::<AppState>();
    let Some(notice) = app_state.notice.read().clone() else {
        return rsx! { div {} };
    };

    let class = format!("alert alert-fixed {}", notice.kind.class());
    let message = notice.message;

    rsx! {
        div {
            class: "{class}",
            role: "status",
            "{message}"
        }
    }
}
