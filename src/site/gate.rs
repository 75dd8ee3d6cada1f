//! Session gate
//!
//! Decides whether a page may render for the current session or should
//! redirect. This is navigation behaviour, not access control.

use std::time::Duration;

use crate::notice::Notice;
use crate::site::SessionState;

/// Delay before sending an anonymous visitor to the login page, long
/// enough for the warning to show.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(700);
/// Delay before sending a logged-in user away from login/registration.
pub const HOME_REDIRECT_DELAY: Duration = Duration::from_millis(400);

/// Where a logout leaves the user.
pub const AFTER_LOGOUT: Page = Page::Landing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    Register,
    Home,
    Users,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Landing,
        Page::Home,
        Page::Users,
        Page::Contact,
        Page::Login,
        Page::Register,
    ];

    /// Pages visible without a session.
    pub fn is_public(self) -> bool {
        matches!(self, Page::Landing | Page::Login | Page::Register)
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Landing => "Inicio",
            Page::Login => "Iniciar sesión",
            Page::Register => "Registro",
            Page::Home => "Reseñas",
            Page::Users => "Usuarios",
            Page::Contact => "Contacto",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Allow,
    Redirect {
        to: Page,
        after: Duration,
        notice: Option<Notice>,
    },
}

pub fn check(page: Page, session: &SessionState) -> GateDecision {
    match session {
        SessionState::Anonymous if !page.is_public() => GateDecision::Redirect {
            to: Page::Login,
            after: LOGIN_REDIRECT_DELAY,
            notice: Some(
                Notice::warning("Por favor inicia sesión para continuar.")
                    .with_timeout(Duration::from_millis(1200)),
            ),
        },
        SessionState::Authenticated { .. } if matches!(page, Page::Login | Page::Register) => {
            GateDecision::Redirect {
                to: Page::Home,
                after: HOME_REDIRECT_DELAY,
                notice: None,
            }
        }
        _ => GateDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticated() -> SessionState {
        SessionState::Authenticated { email: "ana@x.com".into() }
    }

    #[test]
    fn test_anonymous_public_pages_allowed() {
        for page in [Page::Landing, Page::Login, Page::Register] {
            assert_eq!(check(page, &SessionState::Anonymous), GateDecision::Allow);
        }
    }

    #[test]
    fn test_anonymous_private_pages_redirect_to_login() {
        for page in [Page::Home, Page::Users, Page::Contact] {
            match check(page, &SessionState::Anonymous) {
                GateDecision::Redirect { to, after, notice } => {
                    assert_eq!(to, Page::Login);
                    assert_eq!(after, LOGIN_REDIRECT_DELAY);
                    assert!(notice.is_some());
                }
                GateDecision::Allow => panic!("{:?} should redirect", page),
            }
        }
    }

    #[test]
    fn test_authenticated_leaves_login_and_register() {
        for page in [Page::Login, Page::Register] {
            match check(page, &authenticated()) {
                GateDecision::Redirect { to, after, notice } => {
                    assert_eq!(to, Page::Home);
                    assert_eq!(after, HOME_REDIRECT_DELAY);
                    assert!(notice.is_none());
                }
                GateDecision::Allow => panic!("{:?} should redirect", page),
            }
        }
    }

    #[test]
    fn test_logout_never_raises_the_login_warning() {
        // States the gate observes when logging out from each page: the
        // page moves first, then the session
        for from in [Page::Landing, Page::Home, Page::Users, Page::Contact] {
            let observed = [
                (from, authenticated()),
                (AFTER_LOGOUT, authenticated()),
                (AFTER_LOGOUT, SessionState::Anonymous),
            ];
            for (page, session) in &observed {
                assert_eq!(check(*page, session), GateDecision::Allow, "from {:?}", from);
            }
        }

        // Flipping the session first would have warned on a private page
        assert!(matches!(
            check(Page::Home, &SessionState::Anonymous),
            GateDecision::Redirect { notice: Some(_), .. }
        ));
    }

    #[test]
    fn test_authenticated_everything_else_allowed() {
        for page in [Page::Landing, Page::Home, Page::Users, Page::Contact] {
            assert_eq!(check(page, &authenticated()), GateDecision::Allow);
        }
    }
}
