//! LocalStorage access.
//!
//! Thin wrapper over `web_sys::Storage`. Availability is never assumed:
//! every call degrades to "absent" when the window or the storage area is
//! missing (private browsing, embedded contexts).

/// Static interface to the browser's localStorage area.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Reads a stored string. `None` when the key is absent or storage is
    /// unavailable.
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Stores a value. Returns whether the write went through.
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// Removes a key. Returns whether the removal went through.
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
