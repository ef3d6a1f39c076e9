use web_sys::{window, Storage};

use super::error::{describe_js, ConsentError};

/// Durable key-value storage the consent store writes through.
pub trait ConsentStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ConsentError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ConsentError>;
    fn remove_item(&mut self, key: &str) -> Result<(), ConsentError>;
}

/// `window.localStorage`. Looked up on every call, so a context where storage
/// is blocked surfaces as `StorageUnavailable` instead of failing at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage(&self) -> Result<Storage, ConsentError> {
        let window = window()
            .ok_or_else(|| ConsentError::StorageUnavailable("no window".to_string()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(ConsentError::StorageUnavailable(
                "localStorage is not available".to_string(),
            )),
            Err(e) => Err(ConsentError::StorageUnavailable(describe_js(&e))),
        }
    }
}

impl ConsentStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ConsentError> {
        self.local_storage()?
            .get_item(key)
            .map_err(|e| ConsentError::Storage(describe_js(&e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ConsentError> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|e| ConsentError::Storage(describe_js(&e)))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ConsentError> {
        self.local_storage()?
            .remove_item(key)
            .map_err(|e| ConsentError::Storage(describe_js(&e)))
    }
}
