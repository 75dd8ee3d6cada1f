//! User records

use serde::{Deserialize, Serialize};

/// A registered user. Email is the unique key, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "nombre")]
    pub name: String,
    /// Stored lowercased
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "edad")]
    pub age: u32,
    /// Credential string produced by the configured hasher
    pub password: String,
}

impl User {
    /// Case-insensitive email match.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_uses_stored_field_names() {
        let user = User {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "555".into(),
            age: 20,
            password: "hash".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["nombre"], "Ana");
        assert_eq!(json["telefono"], "555");
        assert_eq!(json["edad"], 20);
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_has_email_ignores_case() {
        let user = User {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "555".into(),
            age: 20,
            password: "hash".into(),
        };
        assert!(user.has_email("ANA@X.com"));
        assert!(user.has_email(" ana@x.com "));
        assert!(!user.has_email("bob@x.com"));
    }
}
