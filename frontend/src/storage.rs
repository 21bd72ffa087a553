use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use thiserror::Error;
use web_sys::{window, Storage};
use yew::prelude::*;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser rejected write to `{key}`")]
    WriteRejected { key: String },
}

/// Synchronous string key-value storage, the shape of `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct BrowserStorage {
    inner: Storage,
}

impl BrowserStorage {
    pub fn local() -> Option<Self> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|inner| Self { inner })
    }

    pub fn session() -> Option<Self> {
        window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
            .map(|inner| Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected { key: key.to_string() })
    }
}

/// Per-tab storage used when the browser refuses access (private mode,
/// disabled cookies) and by tests.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The two stores every page works against, shared through a Yew context.
#[derive(Clone)]
pub struct Stores {
    pub local: Rc<dyn KeyValueStore>,
    pub session: Rc<dyn KeyValueStore>,
}

impl Stores {
    pub fn from_browser() -> Self {
        let local: Rc<dyn KeyValueStore> = match BrowserStorage::local() {
            Some(storage) => Rc::new(storage),
            None => {
                warn!("localStorage unavailable, falling back to in-memory storage");
                Rc::new(MemoryStore::new())
            }
        };
        let session: Rc<dyn KeyValueStore> = match BrowserStorage::session() {
            Some(storage) => Rc::new(storage),
            None => {
                warn!("sessionStorage unavailable, falling back to in-memory storage");
                Rc::new(MemoryStore::new())
            }
        };
        Self { local, session }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            local: Rc::new(MemoryStore::new()),
            session: Rc::new(MemoryStore::new()),
        }
    }
}

impl PartialEq for Stores {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.local, &other.local) && Rc::ptr_eq(&self.session, &other.session)
    }
}

#[hook]
pub fn use_stores() -> Stores {
    use_context::<Stores>().unwrap_or_else(Stores::from_browser)
}

/// Writes `value`, logging instead of failing. Storage writes never block the funnel.
pub fn write_or_warn(store: &dyn KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        warn!("{}", e);
    }
}
