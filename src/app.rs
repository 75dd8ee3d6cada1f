//! Root Dioxus application component
//!
//! This module contains the main App component and the state shared by
//! every page.

use crate::notice::Notice;
use crate::site::{GateDecision, Page, SessionState, Site, SiteError};
use crate::storage::settings::{load_settings, AppSettings};
use crate::types::Theme;
use crate::ui::Layout;
use dioxus::prelude::*;
use std::time::Duration;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub site: Site,
    pub settings: Signal<AppSettings>,
    pub page: Signal<Page>,
    /// Mirror of the stored session slot
    pub session: Signal<SessionState>,
    pub theme: Signal<Theme>,
    pub notice: Signal<Option<Notice>>,
    /// Bumped after every store write; views read it to re-pull their data
    pub revision: Signal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let site = Site::open();
        if let Err(e) = site.seed_reviews() {
            tracing::error!("Failed to seed reviews: {}", e);
        }
        if let Err(e) = site.normalize_reviews() {
            tracing::error!("Failed to normalize reviews: {}", e);
        }
        let theme = site.apply_stored_theme();
        tracing::info!("AppState initialized");

        Self {
            session: Signal::new(site.session()),
            theme: Signal::new(theme),
            site,
            settings: Signal::new(settings),
            page: Signal::new(Page::Landing),
            notice: Signal::new(None),
            revision: Signal::new(0),
        }
    }

    /// Show a notice and clear it once its timeout passes, unless a newer
    /// notice replaced it in the meantime.
    pub fn notify(&self, notice: Notice) {
        let default = Duration::from_millis(self.settings.peek().notice_timeout_ms);
        let timeout = notice.duration_or(default);
        let id = notice.id;
        let mut slot = self.notice;
        slot.set(Some(notice));
        spawn(async move {
            tokio::time::sleep(timeout).await;
            let still_showing = matches!(&*slot.peek(), Some(current) if current.id == id);
            if still_showing {
                slot.set(None);
            }
        });
    }

    /// Log a failed operation and show its notice.
    pub fn report(&self, error: &SiteError) {
        match error {
            SiteError::Storage(_) | SiteError::CredentialHash => {
                tracing::error!("Operation failed: {}", error)
            }
            _ => tracing::debug!("Rejected input: {}", error),
        }
        self.notify(error.notice());
    }

    pub fn navigate(&self, page: Page) {
        let mut current = self.page;
        current.set(page);
    }

    /// Navigate after a delay, e.g. once a notice has had time to show.
    pub fn navigate_after(&self, page: Page, delay: Duration) {
        let mut current = self.page;
        spawn(async move {
            tokio::time::sleep(delay).await;
            current.set(page);
        });
    }

    /// Close the session and return to the landing page.
    ///
    /// The page moves before the session does, so the gate never sees an
    /// anonymous session on a private page.
    pub fn logout(&self) {
        if let Err(e) = self.site.logout() {
            self.report(&e);
            return;
        }
        self.navigate(crate::site::gate::AFTER_LOGOUT);
        self.sync_session();
        self.notify(
            Notice::info("Sesión cerrada. Redirigiendo al inicio...")
                .with_timeout(Duration::from_millis(1000)),
        );
    }

    /// Re-read the session slot after login, registration or logout.
    pub fn sync_session(&self) {
        let mut session = self.session;
        session.set(self.site.session());
    }

    /// Signal every view to rebuild from the store.
    pub fn refresh(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }

    pub fn set_theme(&self, theme: Theme) {
        if let Err(e) = self.site.set_theme(theme) {
            tracing::error!("Failed to save theme: {}", e);
        }
        let mut current = self.theme;
        current.set(theme);
    }

    /// Apply the session gate to the current page.
    fn enforce_gate(&self) {
        let page = *self.page.read();
        let session = self.session.read().clone();
        if let GateDecision::Redirect { to, after, notice } = crate::site::gate::check(page, &session) {
            tracing::debug!("Gate redirect {:?} -> {:?}", page, to);
            if let Some(notice) = notice {
                self.notify(notice);
            }
            let mut current = self.page;
            spawn(async move {
                tokio::time::sleep(after).await;
                // The user may have navigated elsewhere while waiting
                if *current.peek() == page {
                    current.set(to);
                }
            });
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    use_effect(move || app_state.enforce_gate());

    rsx! {
        Layout {}
    }
}
