//! Session store: the single current-user profile and its transitions
//!
//! FlowTrack is a single-user app: "logged in" means a valid profile sits
//! under the session keys, and "logged out" means it does not. There is no
//! expiry; a session lasts until explicit logout or the storage is cleared
//! externally. Transitions: no profile → `sign_up` → authenticated; stale
//! profile → `log_in` → authenticated; authenticated → `log_out` → gone.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::models::UserProfile;
use crate::storage::{KvStore, LEGACY_USER_KEY, USER_KEY};
use crate::util::{emails_match, normalize_email, normalize_required};

/// Store for the current user's profile.
///
/// The profile lives under the canonical key and is mirrored to a
/// deprecated alias on every save; reads fall back to the alias so
/// profiles written by older builds still count. Logout clears both.
#[derive(Clone, Copy)]
pub struct SessionStore<'a> {
    store: &'a KvStore,
}

impl<'a> SessionStore<'a> {
    /// Create a session store over the given key-value store
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// The stored profile, if one parses.
    ///
    /// Checks the canonical key first, then the deprecated alias. Both
    /// share the adapter's corruption policy: bad bytes read as absence.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.store
            .get(USER_KEY)
            .or_else(|| self.store.get(LEGACY_USER_KEY))
    }

    /// Whether any profile record exists at all.
    ///
    /// Drives the login/signup shortcut ("account detected"); unlike
    /// [`Self::is_authenticated`] this does not look at the email.
    pub fn has_account(&self) -> bool {
        self.current_user().is_some()
    }

    /// Whether a valid session exists: a profile parses and carries a
    /// non-empty email. The stored `is_authenticated` flag is not
    /// consulted; presence of a well-formed profile is the session.
    pub fn is_authenticated(&self) -> bool {
        self.current_user()
            .is_some_and(|profile| !profile.email.is_empty())
    }

    /// Create the account and start a session.
    ///
    /// The name is trimmed and the email normalized (trimmed, lowercased)
    /// before storage; the password is kept exactly as typed. Signup with
    /// the email of the existing account is a conflict; an existing
    /// account under a *different* email is overwritten, since the store
    /// only ever holds one profile.
    pub fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<UserProfile> {
        let name = normalize_required(name).ok_or(Error::MissingFields)?;
        let email = normalize_required(email)
            .map(|email| normalize_email(&email))
            .ok_or(Error::MissingFields)?;
        if normalize_required(password).is_none() {
            return Err(Error::MissingFields);
        }

        if let Some(existing) = self.current_user() {
            if emails_match(&existing.email, &email) {
                return Err(Error::EmailConflict(email));
            }
            tracing::warn!("Replacing existing account {} on signup", existing.email);
        }

        let profile = UserProfile::new(name, email, password);
        self.save(&profile);
        tracing::info!("Created account for {}", profile.email);
        Ok(profile)
    }

    /// Validate credentials against the stored profile and refresh the
    /// session.
    ///
    /// The email compares case-insensitively after trimming; the password
    /// must match exactly. Any mismatch (or no stored profile) leaves
    /// storage untouched. Success refreshes `last_active` and preserves
    /// `join_date`.
    pub fn log_in(&self, email: &str, password: &str) -> Result<UserProfile> {
        if normalize_required(email).is_none() || password.is_empty() {
            return Err(Error::MissingFields);
        }

        let Some(mut profile) = self.current_user() else {
            return Err(Error::InvalidCredentials);
        };
        if !emails_match(&profile.email, email) || profile.password != password {
            return Err(Error::InvalidCredentials);
        }

        profile.last_active = Utc::now();
        profile.is_authenticated = true;
        self.save(&profile);
        tracing::info!("Logged in {}", profile.email);
        Ok(profile)
    }

    /// Overwrite the profile's name and email.
    ///
    /// Both are trimmed; the email is stored as typed (no lowercasing)
    /// and no uniqueness re-check happens; there is only one account.
    /// Refreshes `last_active`.
    pub fn update_profile(&self, name: &str, email: &str) -> Result<UserProfile> {
        let name = normalize_required(name).ok_or(Error::MissingFields)?;
        let email = normalize_required(email).ok_or(Error::MissingFields)?;

        let Some(mut profile) = self.current_user() else {
            return Err(Error::NotFound("profile".to_string()));
        };

        profile.name = name;
        profile.email = email;
        profile.last_active = Utc::now();
        self.save(&profile);
        Ok(profile)
    }

    /// End the session by removing the profile record entirely, from the
    /// canonical key and the deprecated alias alike.
    pub fn log_out(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(LEGACY_USER_KEY);
        tracing::info!("Logged out");
    }

    /// Persist the profile under the canonical key and mirror it to the
    /// deprecated alias so older builds stay consistent.
    fn save(&self, profile: &UserProfile) {
        self.store.set(USER_KEY, profile);
        self.store.set(LEGACY_USER_KEY, profile);
    }
}
