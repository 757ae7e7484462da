//! `window.localStorage` as a [`StateStore`].

use canvas::error::BoardError;
use canvas::store::StateStore;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

use crate::error::AppError;

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open the window's local storage.
    pub fn open(window: &Window) -> Result<Self, AppError> {
        let storage = window
            .local_storage()?
            .ok_or(AppError::NoBrowser("localStorage"))?;
        Ok(Self { storage })
    }
}

fn storage_error(err: JsValue) -> BoardError {
    BoardError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl StateStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoardError> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BoardError> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), BoardError> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}
