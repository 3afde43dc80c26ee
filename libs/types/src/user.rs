//! User identity types

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, closed set
///
/// Exhaustively matched at the authorization gate; adding a role is a
/// breaking change by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular marketplace member (can buy and sell)
    User,
    /// Moderator with access to the admin section
    Admin,
}

/// User identity record
///
/// The id is immutable; profile fields are mutable in principle but no
/// current operation edits them. Users are never destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Opaque credential, compared by equality only
    pub password: String,
    pub name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Registration input: a User minus the ledger-assigned id and timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterProfile {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl RegisterProfile {
    /// Materialize a User with a fresh unique id
    pub fn into_user(self, timestamp: DateTime<Utc>) -> User {
        User {
            id: UserId::new(),
            email: self.email,
            password: self.password,
            name: self.name,
            role: self.role,
            phone: self.phone,
            address: self.address,
            created_at: timestamp,
        }
    }
}
