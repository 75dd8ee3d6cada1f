//! Contact form messages

use serde::{Deserialize, Serialize};

/// A message left through the contact form. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "fecha")]
    pub sent_at: String,
}
