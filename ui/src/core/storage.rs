//! Persistence of the visitor's language choice.
//!
//! The browser build keeps a single string in `window.localStorage`; tests and
//! non-browser hosts use [`MemoryStore`]. Storage is best-effort everywhere:
//! private-browsing modes, disabled storage and quota errors must never break
//! the page, so [`load_preference`] collapses every failure to `None`.

use std::cell::RefCell;

use crate::error::StorageError;

/// Default local storage key for the preferred language.
pub const PREFERENCE_KEY: &str = "preferredLanguage";

pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Reads the stored preference, treating errors and empty values as absent.
pub fn load_preference(store: &dyn PreferenceStore) -> Option<String> {
    match store.load() {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(err) => {
            tracing::debug!(%err, "preference read failed; assuming none");
            None
        }
    }
}

/// In-process store. A disabled store fails every call like a browser with
/// storage switched off.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value<T: Into<String>>(value: T) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
            disabled: false,
        }
    }

    pub fn disabled() -> Self {
        Self {
            value: RefCell::new(None),
            disabled: true,
        }
    }

    /// Raw stored value, bypassing the disabled flag.
    pub fn peek(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// `window.localStorage` under a fixed key. The storage handle is looked up
/// on every call; browsers may revoke it while the page is open.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn new<T: Into<String>>(key: T) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(load_preference(&store), None);
        store.save("zh").unwrap();
        assert_eq!(load_preference(&store).as_deref(), Some("zh"));
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::with_value("zh");
        store.save("en").unwrap();
        assert_eq!(store.peek().as_deref(), Some("en"));
    }

    #[test]
    fn empty_value_is_no_preference() {
        let store = MemoryStore::with_value("");
        assert_eq!(load_preference(&store), None);
    }

    #[test]
    fn disabled_store_degrades_to_none() {
        let store = MemoryStore::disabled();
        assert_eq!(store.save("zh"), Err(StorageError::Unavailable));
        assert_eq!(load_preference(&store), None);
    }
}
