//! Session layer for the marketplace ledger
//!
//! Resolves "who is acting": authentication against the ledger's user
//! collection, role-gated access to sections, and a single durable slot
//! that restores the active identity across restarts.

mod auth;
mod gate;
mod slot;

pub use auth::{Session, SessionError};
pub use gate::Section;
pub use slot::{SessionSlot, SlotError};
