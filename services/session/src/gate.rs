//! The authorization gate
//!
//! Sections are a closed set matched exhaustively; the gate returns a typed
//! error so callers can surface a login prompt instead of silently denying.

use serde::{Deserialize, Serialize};
use std::fmt;
use types::errors::AuthError;
use types::user::User;

/// A navigable section of the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Public landing page, no session required
    Home,
    /// Browsing and ordering, any active session
    Buy,
    /// Creating listings, any active session
    Sell,
    /// Moderation, admin role required
    Admin,
}

impl Section {
    /// Whether the given (possibly absent) user may enter this section
    pub fn allows(&self, user: Option<&User>) -> bool {
        match self {
            Section::Home => true,
            Section::Buy | Section::Sell => user.is_some(),
            Section::Admin => user.map(User::is_admin).unwrap_or(false),
        }
    }

    /// Gate check with a typed failure
    ///
    /// `NotAuthenticated` when no session is active and one is required;
    /// `NotAuthorized` when a session is active but lacks the role.
    pub fn require(&self, user: Option<&User>) -> Result<(), AuthError> {
        match self {
            Section::Home => Ok(()),
            Section::Buy | Section::Sell => match user {
                Some(_) => Ok(()),
                None => Err(AuthError::NotAuthenticated {
                    section: self.to_string(),
                }),
            },
            Section::Admin => match user {
                Some(u) if u.is_admin() => Ok(()),
                Some(_) => Err(AuthError::NotAuthorized {
                    section: self.to_string(),
                }),
                None => Err(AuthError::NotAuthenticated {
                    section: self.to_string(),
                }),
            },
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Home => "home",
            Section::Buy => "buy",
            Section::Sell => "sell",
            Section::Admin => "admin",
        };
        write!(f, "{name}")
    }
}
