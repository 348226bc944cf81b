//! Browser-backed session store.

use gloo_storage::{LocalStorage, Storage};
use shared::SessionStore;
use wasm_bindgen::JsValue;

/// [`SessionStore`] over `window.localStorage`.
///
/// Values are stored as raw strings, not JSON, so the keys stay readable
/// from the devtools and compatible with earlier builds of the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

fn describe(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{error:?}"))
}

impl SessionStore for BrowserSessionStore {
    fn load(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(error) => {
                log::warn!("failed to read {key}: {}", describe(&error));
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Err(error) = LocalStorage::raw().set_item(key, value) {
            log::warn!("failed to write {key}: {}", describe(&error));
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(error) = LocalStorage::raw().remove_item(key) {
            log::warn!("failed to remove {key}: {}", describe(&error));
        }
    }
}
