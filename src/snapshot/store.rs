//! SnapshotStore - Abstract string-keyed slot storage.

use super::SnapshotError;

/// Abstract durable key-value slot scoped to the client session.
///
/// Implementations hold opaque string payloads; the session layer decides
/// what goes in them. There is no versioning or migration scheme: a payload
/// an implementation hands back is returned verbatim, and the reader deals
/// with anything it cannot parse.
pub trait SnapshotStore: Send + Sync {
    /// Read the payload stored under `key`. Returns None if the slot is empty.
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    /// Write `value` under `key`, replacing any previous payload.
    fn write(&self, key: &str, value: &str) -> Result<(), SnapshotError>;

    /// Delete the slot under `key`. Returns true if it held a payload.
    fn remove(&self, key: &str) -> Result<bool, SnapshotError>;
}
