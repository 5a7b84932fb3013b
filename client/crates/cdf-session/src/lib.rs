//! Session/token management for the CDF dashboard client.
//!
//! The bearer token lives in a [`SessionStore`]; everything else (identity,
//! role, auth header) is recomputed from it on every call.

pub mod error;
pub mod file_store;
pub mod identity;
pub mod memory_store;
pub mod section;
pub mod session_manager;
pub mod session_store;

pub use error::{Result as SessionResult, SessionError};
pub use file_store::FileSessionStore;
pub use identity::{DecodedIdentity, decode_token, try_decode_token};
pub use memory_store::MemorySessionStore;
pub use section::Section;
pub use session_manager::SessionManager;
pub use session_store::SessionStore;

/// Role string that unlocks every dashboard section.
pub const ROLE_ADMIN: &str = "admin";

#[cfg(test)]
mod tests;
