//! The session slot
//!
//! A single durable key-value slot holding the serialized active user, or
//! nothing. Overwritten wholesale on login/register, cleared on logout; no
//! schema versioning. An absent file means no session.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use types::user::User;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// File-backed single-value store for the active session user
pub struct SessionSlot {
    path: PathBuf,
}

impl SessionSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persist the user, replacing any previous value
    ///
    /// Atomic write: write to a tmp file, fsync, rename. A crash mid-save
    /// leaves either the old value or the new one, never a torn file.
    pub fn save(&self, user: &User) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(user)
            .map_err(|e| SlotError::Serialization(e.to_string()))?;

        let tmp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&data)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Load the persisted user, if any
    pub fn load(&self) -> Result<Option<User>, SlotError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let user = serde_json::from_slice(&data)
            .map_err(|e| SlotError::Serialization(e.to_string()))?;
        Ok(Some(user))
    }

    /// Remove the persisted value; clearing an empty slot is a no-op
    pub fn clear(&self) -> Result<(), SlotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::UserId;
    use types::user::Role;

    fn user() -> User {
        User {
            id: UserId::new(),
            email: "user@example.com".to_string(),
            password: "user123".to_string(),
            name: "John Doe".to_string(),
            role: Role::User,
            phone: Some("+1-234-567-8900".to_string()),
            address: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SessionSlot::new(dir.path().join("current-user.json"));

        let u = user();
        slot.save(&u).unwrap();
        assert_eq!(slot.load().unwrap(), Some(u));
    }

    #[test]
    fn test_load_absent_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SessionSlot::new(dir.path().join("nothing-here.json"));
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SessionSlot::new(dir.path().join("current-user.json"));

        let first = user();
        let mut second = user();
        second.name = "Jane Doe".to_string();

        slot.save(&first).unwrap();
        slot.save(&second).unwrap();
        assert_eq!(slot.load().unwrap().unwrap().name, "Jane Doe");
    }

    #[test]
    fn test_clear_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SessionSlot::new(dir.path().join("current-user.json"));

        slot.save(&user()).unwrap();
        slot.clear().unwrap();
        assert!(slot.load().unwrap().is_none());

        // Clearing again is a no-op
        slot.clear().unwrap();
    }

    #[test]
    fn test_corrupt_slot_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("current-user.json");
        fs::write(&path, b"not json at all").unwrap();

        let slot = SessionSlot::new(path);
        assert!(matches!(slot.load(), Err(SlotError::Serialization(_))));
    }
}
