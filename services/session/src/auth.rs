//! Session and authentication
//!
//! The session owns the active identity and its durable slot. Credential
//! lookup goes against the ledger's user collection; passwords are opaque
//! strings compared by equality, exact and case-sensitive.

use crate::gate::Section;
use crate::slot::{SessionSlot, SlotError};
use ledger::Ledger;
use thiserror::Error;
use types::errors::AuthError;
use types::user::{RegisterProfile, User};

/// Session-layer error: either a user-facing auth rejection or a slot
/// persistence failure.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Session slot error: {0}")]
    Slot(#[from] SlotError),
}

/// The currently authenticated identity and its restore slot
pub struct Session {
    slot: SessionSlot,
    active: Option<User>,
}

impl Session {
    /// Open a session, restoring the persisted identity if one exists
    ///
    /// A reload therefore resumes the previous login without
    /// re-authenticating.
    pub fn restore(slot: SessionSlot) -> Result<Self, SlotError> {
        let active = slot.load()?;
        if let Some(user) = &active {
            tracing::info!(user_id = %user.id, "session restored from slot");
        }
        Ok(Self { slot, active })
    }

    /// The active user, if any
    pub fn active_user(&self) -> Option<&User> {
        self.active.as_ref()
    }

    /// Authenticate by exact email+password match
    ///
    /// On success the matched identity becomes the active session and is
    /// persisted. On `InvalidCredentials` the active session is unchanged.
    pub fn authenticate(
        &mut self,
        ledger: &Ledger,
        email: &str,
        password: &str,
    ) -> Result<User, SessionError> {
        let user = ledger
            .find_by_credentials(email, password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;

        self.slot.save(&user)?;
        tracing::info!(user_id = %user.id, "login");
        self.active = Some(user.clone());
        Ok(user)
    }

    /// Register a new user and immediately log them in
    ///
    /// The ledger assigns the fresh id; the new identity becomes the
    /// active session and is persisted. Email uniqueness is intentionally
    /// not checked (matching registration's current contract).
    pub fn register(
        &mut self,
        ledger: &mut Ledger,
        profile: RegisterProfile,
    ) -> Result<User, SessionError> {
        let user = ledger.register_user(profile).clone();
        self.slot.save(&user)?;
        tracing::info!(user_id = %user.id, "registered and logged in");
        self.active = Some(user.clone());
        Ok(user)
    }

    /// Clear the active session and its persisted slot
    pub fn logout(&mut self) -> Result<(), SlotError> {
        if let Some(user) = self.active.take() {
            tracing::info!(user_id = %user.id, "logout");
        }
        self.slot.clear()
    }

    /// Gate check for a section against the active user
    pub fn require(&self, section: Section) -> Result<(), AuthError> {
        section.require(self.active_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::user::Role;

    fn open_session(dir: &tempfile::TempDir) -> Session {
        Session::restore(SessionSlot::new(dir.path().join("current-user.json"))).unwrap()
    }

    fn profile(email: &str, role: Role) -> RegisterProfile {
        RegisterProfile {
            email: email.to_string(),
            password: "secret".to_string(),
            name: "Someone".to_string(),
            role,
            phone: None,
            address: None,
        }
    }

    #[test]
    fn test_authenticate_exact_match_only() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::seed();
        let mut session = open_session(&dir);

        let user = session
            .authenticate(&ledger, "admin@example.com", "admin123")
            .unwrap();
        assert!(user.is_admin());
        assert_eq!(session.active_user().unwrap().id, user.id);
    }

    #[test]
    fn test_wrong_password_leaves_session_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::seed();
        let mut session = open_session(&dir);

        session
            .authenticate(&ledger, "user@example.com", "user123")
            .unwrap();
        let before = session.active_user().unwrap().id;

        let err = session
            .authenticate(&ledger, "admin@example.com", "wrong")
            .unwrap_err();
        assert!(matches!(err, SessionError::Auth(AuthError::InvalidCredentials)));
        assert_eq!(session.active_user().unwrap().id, before);
    }

    #[test]
    fn test_register_auto_logs_in() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = Ledger::new();
        let mut session = open_session(&dir);

        let user = session
            .register(&mut ledger, profile("new@example.com", Role::User))
            .unwrap();
        assert_eq!(session.active_user().unwrap().id, user.id);
        assert_eq!(ledger.user_count(), 1);

        // The fresh id is also fresh relative to every existing user
        let second = session
            .register(&mut ledger, profile("other@example.com", Role::User))
            .unwrap();
        assert_ne!(second.id, user.id);
    }

    #[test]
    fn test_restore_resumes_login() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::seed();

        let user_id = {
            let mut session = open_session(&dir);
            session
                .authenticate(&ledger, "user@example.com", "user123")
                .unwrap()
                .id
        };

        let restored = open_session(&dir);
        assert_eq!(restored.active_user().unwrap().id, user_id);
    }

    #[test]
    fn test_logout_clears_slot() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::seed();
        let mut session = open_session(&dir);

        session
            .authenticate(&ledger, "user@example.com", "user123")
            .unwrap();
        session.logout().unwrap();
        assert!(session.active_user().is_none());

        let restored = open_session(&dir);
        assert!(restored.active_user().is_none());
    }

    #[test]
    fn test_session_gate_wiring() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::seed();
        let mut session = open_session(&dir);

        assert!(session.require(Section::Home).is_ok());
        assert!(session.require(Section::Buy).is_err());
        assert!(session.require(Section::Admin).is_err());

        session
            .authenticate(&ledger, "user@example.com", "user123")
            .unwrap();
        assert!(session.require(Section::Buy).is_ok());
        assert!(session.require(Section::Sell).is_ok());
        assert!(matches!(
            session.require(Section::Admin),
            Err(AuthError::NotAuthorized { .. })
        ));

        session.logout().unwrap();
        session
            .authenticate(&ledger, "admin@example.com", "admin123")
            .unwrap();
        assert!(session.require(Section::Admin).is_ok());
    }
}
