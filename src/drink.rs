//! Drink of the day
//!
//! Fetches a random drink from a public cocktail API. Any failure falls back
//! to a fixed local drink; there are no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::storage::settings::AppSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub name: String,
    pub thumbnail: String,
    pub instructions: String,
}

impl Drink {
    /// Shown whenever the remote fetch fails.
    pub fn fallback() -> Self {
        Self {
            name: "Cold Brew de Avellana".to_string(),
            thumbnail: "images/coldbrew.jpg".to_string(),
            instructions: "Mezcla café frío, leche de avena y jarabe de avellana. Sirve con hielo."
                .to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DrinkError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status: {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Response contained no drinks")]
    Empty,
}

#[async_trait]
pub trait DrinkSource: Send + Sync {
    async fn random_drink(&self) -> Result<Drink, DrinkError>;
}

#[derive(Debug, Deserialize)]
struct RandomResponse {
    drinks: Option<Vec<ApiDrink>>,
}

#[derive(Debug, Deserialize)]
struct ApiDrink {
    #[serde(rename = "strDrink")]
    name: String,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
}

/// Decode a `random.php` response body.
pub fn parse_random_response(body: &str) -> Result<Drink, DrinkError> {
    let response: RandomResponse = serde_json::from_str(body)?;
    let drink = response
        .drinks
        .and_then(|drinks| drinks.into_iter().next())
        .ok_or(DrinkError::Empty)?;

    Ok(Drink {
        name: drink.name,
        thumbnail: drink.thumbnail.unwrap_or_default(),
        instructions: drink.instructions.unwrap_or_default(),
    })
}

/// Client for TheCocktailDB's random drink endpoint.
#[derive(Debug, Clone)]
pub struct CocktailDbClient {
    client: reqwest::Client,
    url: String,
}

impl CocktailDbClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DrinkError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tragos/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_settings(settings: &AppSettings) -> Result<Self, DrinkError> {
        Self::new(
            settings.drink_api_url.clone(),
            Duration::from_secs(settings.drink_timeout_secs),
        )
    }
}

#[async_trait]
impl DrinkSource for CocktailDbClient {
    async fn random_drink(&self) -> Result<Drink, DrinkError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(DrinkError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        parse_random_response(&body)
    }
}

/// The drink to show: the remote one, or the fallback on any error.
pub async fn drink_of_the_day(source: &dyn DrinkSource) -> Drink {
    match source.random_drink().await {
        Ok(drink) => {
            tracing::info!("Drink of the day: {}", drink.name);
            drink
        }
        Err(e) => {
            tracing::warn!("Drink of the day unavailable, using fallback: {}", e);
            Drink::fallback()
        }
    }
}
