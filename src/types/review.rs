//! Review and comment records

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A drink review. Comments are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Nil for records written before ids existed; see [`Review::normalize`]
    #[serde(default)]
    pub id: Uuid,
    #[serde(rename = "nombreTrago")]
    pub drink_name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Image URL, relative asset path or `data:` URI
    #[serde(rename = "foto")]
    pub photo: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "fecha")]
    pub created_at: String,
    #[serde(rename = "comentarios", default, deserialize_with = "null_as_empty")]
    pub comments: Vec<Comment>,
}

/// A comment on a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "fecha")]
    pub created_at: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Comment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Comment>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Review {
    pub fn new(
        drink_name: impl Into<String>,
        description: impl Into<String>,
        photo: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            drink_name: drink_name.into(),
            description: description.into(),
            photo: photo.into(),
            author: author.into(),
            created_at: super::timestamp_now(),
            comments: Vec::new(),
        }
    }

    /// Bring an older record up to the current schema.
    ///
    /// Returns true if the record changed and should be written back.
    pub fn normalize(&mut self) -> bool {
        if self.id.is_nil() {
            self.id = Uuid::new_v4();
            return true;
        }
        false
    }
}

impl Comment {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            created_at: super::timestamp_now(),
        }
    }
}
