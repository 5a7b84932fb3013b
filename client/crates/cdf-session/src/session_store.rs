use crate::SessionResult;

/// Persistent home of the bearer token.
///
/// Implementations hold exactly one value. `get` must not cache: a token
/// written by another process is expected to be visible on the next call.
pub trait SessionStore: Send + Sync {
    /// Read the stored token. `Ok(None)` when nothing is stored.
    fn get(&self) -> SessionResult<Option<String>>;

    /// Replace the stored token.
    fn set(&self, token: &str) -> SessionResult<()>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> SessionResult<()>;
}
