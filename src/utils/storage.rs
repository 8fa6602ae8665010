use crate::booking::error::SinkError;
use web_sys::window;

/// String key/value store with the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SinkError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), SinkError>;
    fn remove_item(&self, key: &str) -> Result<(), SinkError>;
}

/// The page's `localStorage`, looked up on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage, SinkError> {
        match window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Ok(storage),
            _ => Err(SinkError::StorageUnavailable),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SinkError> {
        Self::local()?
            .get_item(key)
            .map_err(|_| SinkError::StorageUnavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SinkError> {
        Self::local()?
            .set_item(key, value)
            .map_err(|e| SinkError::StorageWrite(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), SinkError> {
        Self::local()?
            .remove_item(key)
            .map_err(|e| SinkError::StorageWrite(format!("{:?}", e)))
    }
}
