use web_sys::Storage;
use zenith_core::StorageError;
use zenith_core::storage::KeyValueStore;

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[derive(Debug, Clone, Copy, Default)]
/// `window.localStorage`. В приватном режиме читается как пустое.
pub(crate) struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: format!("{err:?}"),
            })
    }
}
