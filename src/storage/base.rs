use crate::Result;

/// String-keyed persistence port the store mirrors its state into.
///
/// Values are JSON documents; the port itself treats them as opaque
/// strings. Implementations must make a completed `set` immediately
/// visible to subsequent `get` calls, including from a fresh handle
/// over the same backing data.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Create or replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry stored under `key`.
    /// Removing an absent key is a successful no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}
