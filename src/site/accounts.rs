//! Registration, login and the session slot

use once_cell::sync::Lazy;
use regex::Regex;

use crate::site::{Site, SiteError};
use crate::storage::{Collection, CURRENT_USER_KEY};
use crate::types::User;

/// Minimum age to register.
pub const MINIMUM_AGE: i64 = 18;

/// Display name for a session whose user can't be found.
pub const FALLBACK_DISPLAY_NAME: &str = "Usuario";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Raw registration form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// As typed; parsed during validation
    pub age: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated { email: String },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated { email } => Some(email),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Leading integer of an age field: optional sign, then digits, anything
/// after them ignored. `None` when no digits lead.
pub fn parse_age(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

impl Site {
    /// Validate and store a new user, then log them in.
    pub fn register(&self, form: &Registration) -> Result<User, SiteError> {
        let name = form.name.trim();
        let email = form.email.trim().to_lowercase();
        let phone = form.phone.trim();
        let age = parse_age(&form.age).unwrap_or(0);
        let password = form.password.as_str();

        if name.is_empty() || email.is_empty() || phone.is_empty() || age == 0 || password.is_empty() {
            return Err(SiteError::MissingFields);
        }
        if !is_valid_email(&email) {
            return Err(SiteError::InvalidEmail);
        }
        if age < MINIMUM_AGE {
            return Err(SiteError::Underage(age));
        }

        let mut users: Vec<User> = self.store.load(Collection::Users);
        if users.iter().any(|u| u.has_email(&email)) {
            return Err(SiteError::DuplicateEmail(email));
        }

        let user = User {
            name: name.to_string(),
            email: email.clone(),
            phone: phone.to_string(),
            age: u32::try_from(age).unwrap_or(u32::MAX),
            password: self.hasher.hash(password)?,
        };
        users.push(user.clone());
        self.store.save(Collection::Users, &users)?;
        self.start_session(&email)?;

        tracing::info!("Registered user {}", email);
        Ok(user)
    }

    /// Check credentials and open a session. On failure the session slot is
    /// left as it was.
    pub fn login(&self, email: &str, password: &str) -> Result<User, SiteError> {
        let email = email.trim().to_lowercase();
        let user = self
            .find_user(&email)
            .filter(|u| self.hasher.verify(password, &u.password))
            .ok_or(SiteError::InvalidCredentials)?;

        self.start_session(&user.email)?;
        tracing::info!("User {} logged in", user.email);
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), SiteError> {
        self.store.remove_raw(CURRENT_USER_KEY)?;
        tracing::info!("Session closed");
        Ok(())
    }

    pub fn session(&self) -> SessionState {
        match self.store.get_raw(CURRENT_USER_KEY) {
            Some(email) if !email.trim().is_empty() => SessionState::Authenticated { email },
            _ => SessionState::Anonymous,
        }
    }

    /// The logged-in user, if the session points at an existing one.
    pub fn current_user(&self) -> Option<User> {
        let email = self.store.get_raw(CURRENT_USER_KEY)?;
        self.find_user(&email)
    }

    /// Name to attribute actions to: the session user's name, the fallback
    /// for a stale session, `None` when logged out.
    pub fn display_name(&self) -> Option<String> {
        match self.session() {
            SessionState::Anonymous => None,
            SessionState::Authenticated { .. } => Some(
                self.current_user()
                    .map(|u| u.name)
                    .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string()),
            ),
        }
    }

    /// Case-insensitive lookup; first match wins.
    pub fn find_user(&self, email: &str) -> Option<User> {
        self.users().into_iter().find(|u| u.has_email(email))
    }

    /// All users in registration order.
    pub fn users(&self) -> Vec<User> {
        self.store.load(Collection::Users)
    }

    fn start_session(&self, email: &str) -> Result<(), SiteError> {
        self.store.set_raw(CURRENT_USER_KEY, email)?;
        Ok(())
    }
}
