//! User profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme preference stored on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

/// The single local account, stored whole under the session keys
///
/// `password` is a plaintext placeholder: real credential storage is out of
/// scope for a single-user local profile, and the field exists so the login
/// check has something to compare. The `Debug` impl redacts it so it never
/// reaches logs.
///
/// `name`, `email`, and `password` are required when parsing; a stored
/// profile missing any of them fails deserialization and is treated as
/// absent by the storage adapter. The remaining fields default so profiles
/// written by older versions still load.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name (trimmed)
    pub name: String,
    /// Account email; signup stores it lowercased, comparisons ignore case
    pub email: String,
    /// Plaintext password placeholder
    pub password: String,
    /// Account creation time
    #[serde(default = "Utc::now")]
    pub join_date: DateTime<Utc>,
    /// Updated on every signup, login, and profile edit
    #[serde(default = "Utc::now")]
    pub last_active: DateTime<Utc>,
    /// Set on signup and login; the gate checks profile presence, not this
    #[serde(default)]
    pub is_authenticated: bool,
    /// Theme preference
    #[serde(default)]
    pub theme: Theme,
}

impl UserProfile {
    /// Create a fresh profile at signup time
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            join_date: now,
            last_active: now,
            is_authenticated: true,
            theme: Theme::default(),
        }
    }
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UserProfile")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("join_date", &self.join_date)
            .field("last_active", &self.last_active)
            .field("is_authenticated", &self.is_authenticated)
            .field("theme", &self.theme)
            .finish()
    }
}
