//! `window.localStorage` implementation of [`KeyValueStore`]

use crate::core::storage::{KeyValueStore, StorageError};

/// Handle to the browser's local storage.
/// Every call fails with [`StorageError::Unavailable`] when there is none
/// (private mode, disabled storage, or a non-browser build).
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    #[cfg(feature = "csr")]
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                leptos::logging::warn!("localStorage unavailable, favorites will not persist");
            }
            Self { storage }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self {}
        }
    }

    #[cfg(feature = "csr")]
    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::WriteFailed(format!("{e:?}")))
    }
}

#[cfg(not(feature = "csr"))]
impl KeyValueStore for LocalStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
