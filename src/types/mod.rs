//! Shared type definitions
//!
//! Records persisted in the store and small value types shared by the
//! site logic, the views and the UI.

pub mod contact;
pub mod review;
pub mod theme;
pub mod user;

pub use contact::ContactMessage;
pub use review::{Comment, Review};
pub use theme::Theme;
pub use user::User;

/// Current time as an RFC 3339 string, the format every record timestamp uses.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Human-readable local time for a stored timestamp.
///
/// Older profiles stored free-form locale strings; those are shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&chrono::Local)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_now_is_rfc3339() {
        let ts = timestamp_now();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_format_timestamp_keeps_legacy_strings() {
        assert_eq!(format_timestamp("3/10/2025, 14:22:05"), "3/10/2025, 14:22:05");
        let formatted = format_timestamp("2025-10-03T14:22:05+00:00");
        assert!(formatted.contains("2025"));
        assert!(formatted.contains('/'));
    }
}
