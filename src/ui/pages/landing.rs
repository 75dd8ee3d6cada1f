use crate::app::AppState;
use crate::drink::{drink_of_the_day, CocktailDbClient, Drink};
use crate::ui::pages::WelcomeBanner;
use dioxus::prelude::*;

#[component]
pub fn LandingPage() -> Element {
    let app_state = use_context::<AppState>();
    let settings = app_state.settings;

    // Fetched once per visit; failures come back as the fallback drink
    let drink = use_resource(move || {
        let settings = settings.read().clone();
        async move {
            match CocktailDbClient::from_settings(&settings) {
                Ok(client) => drink_of_the_day(&client).await,
                Err(e) => {
                    tracing::warn!("Could not build drink client: {}", e);
                    Drink::fallback()
                }
            }
        }
    });
    let current = drink.read().clone();

    rsx! {
        section {
            class: "page landing",

            h1 { "Tragos" }
            p { class: "lead", "Reseñas de cócteles hechas por la comunidad." }

            WelcomeBanner {}

            div {
                class: "card drink-of-the-day",
                h2 { "Bebida del día" }
                match current {
                    Some(drink) => rsx! { DrinkCard { drink: drink } },
                    None => rsx! { p { class: "muted", "Cargando..." } },
                }
            }
        }
    }
}

#[component]
fn DrinkCard(drink: Drink) -> Element {
    rsx! {
        div {
            h3 { "{drink.name}" }
            img {
                class: "drink-img",
                src: "{drink.thumbnail}",
                alt: "{drink.name}",
            }
            p {
                strong { "Instrucciones: " }
                "{drink.instructions}"
            }
        }
    }
}
