//! Site logic
//!
//! Accounts, reviews, comments, contact messages and the theme preference,
//! all read from and written to the record store. Every operation re-reads
//! the collection it touches and writes it back whole.

pub mod accounts;
pub mod contact;
pub mod credentials;
pub mod gate;
pub mod reviews;

pub use accounts::{Registration, SessionState};
pub use contact::ContactForm;
pub use credentials::{Argon2Hasher, CredentialHasher};
pub use gate::{GateDecision, Page};
pub use reviews::ReviewForm;

use crate::notice::Notice;
use crate::photo::PhotoError;
use crate::storage::{FileBackend, RecordStore, StorageError, THEME_KEY};
use crate::types::Theme;
use std::sync::Arc;
use thiserror::Error;

/// What a login requirement was protecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    PublishReview,
    Comment,
}

/// Errors surfaced by site operations. None of them leave the store modified.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("missing required registration fields")]
    MissingFields,
    #[error("missing required contact fields")]
    MissingContactFields,
    #[error("missing drink name or description")]
    MissingReviewFields,
    #[error("malformed email address")]
    InvalidEmail,
    #[error("user is under age ({0})")]
    Underage(i64),
    #[error("an account already exists for {0}")]
    DuplicateEmail(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("login required")]
    LoginRequired(GuardedAction),
    #[error("comment text is empty")]
    EmptyComment,
    #[error("no review at position {0}")]
    ReviewNotFound(usize),
    #[error("credential hashing failed")]
    CredentialHash,
    #[error("photo error: {0}")]
    Photo(#[from] PhotoError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SiteError {
    /// The banner shown to the user for this error.
    pub fn notice(&self) -> Notice {
        match self {
            SiteError::MissingFields => Notice::warning("Completa todos los campos."),
            SiteError::MissingContactFields => {
                Notice::warning("Completa todos los campos del contacto.")
            }
            SiteError::MissingReviewFields => {
                Notice::warning("Completa el nombre y la descripción.")
            }
            SiteError::InvalidEmail => Notice::warning("Correo inválido."),
            SiteError::Underage(_) => Notice::warning("Debes ser mayor de 18 años."),
            SiteError::DuplicateEmail(_) => {
                Notice::danger("Ya existe una cuenta con ese correo.")
            }
            SiteError::InvalidCredentials => Notice::danger("Credenciales incorrectas."),
            SiteError::LoginRequired(GuardedAction::PublishReview) => {
                Notice::warning("Debes iniciar sesión para publicar una reseña.")
            }
            SiteError::LoginRequired(GuardedAction::Comment) => {
                Notice::warning("Debes iniciar sesión para comentar.")
            }
            SiteError::EmptyComment => Notice::warning("Escribe tu comentario."),
            SiteError::ReviewNotFound(_) => Notice::danger("Esa reseña ya no existe."),
            SiteError::CredentialHash => {
                Notice::danger("No se pudo crear la cuenta. Intenta de nuevo.")
            }
            SiteError::Photo(_) => Notice::warning("No se pudo leer la foto."),
            SiteError::Storage(_) => Notice::danger("No se pudo guardar. Intenta de nuevo."),
        }
    }
}

/// The site: a record store plus the credential hasher.
#[derive(Clone)]
pub struct Site {
    store: RecordStore,
    hasher: Arc<dyn CredentialHasher>,
}

impl Site {
    pub fn new(store: RecordStore, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { store, hasher }
    }

    /// Open the profile in the platform data directory.
    ///
    /// Falls back to an in-memory store when no data directory exists, so
    /// the app still runs (without persistence).
    pub fn open() -> Self {
        let store = match FileBackend::in_data_dir() {
            Ok(backend) => {
                tracing::info!("Using profile at {}", backend.root().display());
                RecordStore::new(Arc::new(backend))
            }
            Err(e) => {
                tracing::warn!("No profile directory ({}), data will not persist", e);
                RecordStore::in_memory()
            }
        };
        Self::new(store, Arc::new(Argon2Hasher))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Stored theme, light when absent or unrecognised.
    pub fn theme(&self) -> Theme {
        self.store
            .get_raw(THEME_KEY)
            .map(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), SiteError> {
        self.store.set_raw(THEME_KEY, theme.as_str())?;
        tracing::debug!("Theme set to {}", theme);
        Ok(())
    }

    /// Resolve the stored theme at startup and write the applied value
    /// back, so the slot always holds `"light"` or `"dark"`.
    pub fn apply_stored_theme(&self) -> Theme {
        let theme = self.theme();
        if let Err(e) = self.set_theme(theme) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
        theme
    }
}

#[cfg(test)]
pub(crate) fn test_site() -> Site {
    Site::new(
        RecordStore::in_memory(),
        Arc::new(credentials::testing::TestHasher),
    )
}
