use crate::{SessionResult, SessionStore};

use std::sync::{Mutex, MutexGuard};

/// In-process token store. Used by tests and one-shot runs that must not
/// touch disk.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        // A poisoned lock still holds a plain Option; keep using it.
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> SessionResult<Option<String>> {
        Ok(self.slot().clone())
    }

    fn set(&self, token: &str) -> SessionResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
