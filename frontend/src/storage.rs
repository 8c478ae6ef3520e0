//! Key-value persistence: browser local storage, or memory in tests.

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every failure (no window, storage disabled, quota)
/// is logged and treated as a missing value.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window().map(|window| window.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            _ => {
                tracing::warn!("local storage is not available");
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("could not write {key:?} to local storage");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!("could not remove {key:?} from local storage");
            }
        }
    }
}
