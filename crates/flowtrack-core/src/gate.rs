//! Access gate for protected pages
//!
//! Every page runs the gate on load. Public pages always render; anything
//! else needs a valid session or the visitor is sent to the login page.
//! New pages are protected by default because the allow-list names the
//! public ones.

use crate::session::SessionStore;

/// Pages reachable without a session
pub const PUBLIC_PAGES: &[&str] = &["index", "login", "signup"];

/// Page the gate redirects to when access is denied
pub const LOGIN_PAGE: &str = "login";

/// Resolve a raw location (path or file name) to a page name.
///
/// Takes the last path segment, drops an `.html` suffix, and treats an
/// empty location as the landing page.
pub fn page_name(location: &str) -> &str {
    let last = location.rsplit('/').next().unwrap_or(location);
    let name = last.strip_suffix(".html").unwrap_or(last);
    if name.is_empty() {
        "index"
    } else {
        name
    }
}

/// Whether `page` requires an authenticated session
pub fn is_protected_page(page: &str) -> bool {
    !PUBLIC_PAGES.contains(&page_name(page))
}

/// Navigation collaborator the gate drives on denial.
///
/// The app navigates between pages; tests record the target instead.
pub trait PageRouter {
    /// Go to `page`
    fn navigate(&mut self, page: &str);
}

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The page may render
    Granted,
    /// The caller must send the visitor to the login page
    RedirectToLogin,
}

/// The check run on every page load
#[derive(Clone, Copy)]
pub struct AccessGate<'a> {
    session: SessionStore<'a>,
}

impl<'a> AccessGate<'a> {
    /// Create a gate over the given session store
    #[must_use]
    pub const fn new(session: SessionStore<'a>) -> Self {
        Self { session }
    }

    /// Decide whether `page` may render for the current session. Pure;
    /// never navigates.
    pub fn check(&self, page: &str) -> GateDecision {
        if !is_protected_page(page) || self.session.is_authenticated() {
            GateDecision::Granted
        } else {
            GateDecision::RedirectToLogin
        }
    }

    /// Guard a protected surface.
    ///
    /// Returns true and does nothing else when a valid session exists;
    /// otherwise navigates the router to the login page and returns false.
    pub fn require_auth(&self, router: &mut dyn PageRouter) -> bool {
        if self.session.is_authenticated() {
            return true;
        }
        tracing::info!("Auth check failed; redirecting to {LOGIN_PAGE}");
        router.navigate(LOGIN_PAGE);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KvStore, USER_KEY};

    #[derive(Default)]
    struct RecordingRouter {
        visited: Vec<String>,
    }

    impl PageRouter for RecordingRouter {
        fn navigate(&mut self, page: &str) {
            self.visited.push(page.to_string());
        }
    }

    fn store_with_session() -> KvStore {
        let store = KvStore::in_memory();
        SessionStore::new(&store)
            .sign_up("Ann", "ann@x.com", "hunter2")
            .unwrap();
        store
    }

    #[test]
    fn test_page_name_handles_paths_and_suffixes() {
        assert_eq!(page_name("tasks.html"), "tasks");
        assert_eq!(page_name("/app/notes.html"), "notes");
        assert_eq!(page_name("stats"), "stats");
        assert_eq!(page_name(""), "index");
        assert_eq!(page_name("/"), "index");
    }

    #[test]
    fn test_public_pages_are_not_protected() {
        assert!(!is_protected_page("index"));
        assert!(!is_protected_page("login.html"));
        assert!(!is_protected_page("/signup.html"));
    }

    #[test]
    fn test_unknown_pages_are_protected_by_default() {
        assert!(is_protected_page("tasks"));
        assert!(is_protected_page("notes.html"));
        assert!(is_protected_page("anything-new"));
    }

    #[test]
    fn test_check_grants_public_page_without_session() {
        let store = KvStore::in_memory();
        let gate = AccessGate::new(SessionStore::new(&store));
        assert_eq!(gate.check("login"), GateDecision::Granted);
    }

    #[test]
    fn test_check_redirects_protected_page_without_session() {
        let store = KvStore::in_memory();
        let gate = AccessGate::new(SessionStore::new(&store));
        assert_eq!(gate.check("tasks"), GateDecision::RedirectToLogin);
    }

    #[test]
    fn test_check_grants_protected_page_with_session() {
        let store = store_with_session();
        let gate = AccessGate::new(SessionStore::new(&store));
        assert_eq!(gate.check("tasks"), GateDecision::Granted);
    }

    #[test]
    fn test_require_auth_navigates_to_login_when_denied() {
        let store = KvStore::in_memory();
        let gate = AccessGate::new(SessionStore::new(&store));
        let mut router = RecordingRouter::default();

        assert!(!gate.require_auth(&mut router));
        assert_eq!(router.visited, vec![LOGIN_PAGE.to_string()]);
    }

    #[test]
    fn test_require_auth_is_side_effect_free_when_granted() {
        let store = store_with_session();
        let gate = AccessGate::new(SessionStore::new(&store));
        let mut router = RecordingRouter::default();

        assert!(gate.require_auth(&mut router));
        assert!(router.visited.is_empty());
    }

    #[test]
    fn test_corrupted_profile_denies_access() {
        let store = KvStore::in_memory();
        store.backend().write(USER_KEY, "][");
        let gate = AccessGate::new(SessionStore::new(&store));
        let mut router = RecordingRouter::default();

        assert!(!gate.require_auth(&mut router));
        assert_eq!(router.visited, vec![LOGIN_PAGE.to_string()]);
    }
}
