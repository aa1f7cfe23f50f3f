//! Per-browser preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two entries at most: theme and flavor. Writes are fire-and-forget; a
//! failed write is logged and the page keeps working with what it applied.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::consts::{FLAVOR_COOKIE, THEME_COOKIE};
use crate::state::preference::Choice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Theme,
    Flavor,
}

impl PreferenceKey {
    /// Cookie name, also used as the `localStorage` key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Theme => THEME_COOKIE,
            Self::Flavor => FLAVOR_COOKIE,
        }
    }
}

pub trait PreferenceStore {
    fn get(&self, key: PreferenceKey) -> Option<String>;
    fn set(&self, key: PreferenceKey, value: &str);
}

/// Read `key` as a `T`, treating unrecognized values as absent.
pub fn stored<T: Choice>(store: &dyn PreferenceStore, key: PreferenceKey) -> Option<T> {
    let raw = store.get(key)?;
    let parsed = T::parse(&raw);
    if parsed.is_none() {
        log::debug!("ignoring stored {} `{raw}`", T::GROUP);
    }
    parsed
}

/// Session-only store. Backs tests and pages without usable browser storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<PreferenceKey, String>>,
    writes: RefCell<Vec<(PreferenceKey, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: PreferenceKey, value: &str) -> Self {
        self.values.borrow_mut().insert(key, value.to_owned());
        self
    }

    /// Every `set` call so far, in order.
    pub fn writes(&self) -> Vec<(PreferenceKey, String)> {
        self.writes.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        self.values.borrow().get(&key).cloned()
    }

    fn set(&self, key: PreferenceKey, value: &str) {
        self.values.borrow_mut().insert(key, value.to_owned());
        self.writes.borrow_mut().push((key, value.to_owned()));
    }
}

#[cfg(feature = "csr")]
pub use browser::{CookieStore, LocalStore, open_store};

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;

    use super::{MemoryStore, PreferenceKey, PreferenceStore};
    use crate::consts::COOKIE_EXPIRY_DAYS;
    use crate::state::page::StorageBackend;
    use crate::util::cookie::{days_to_ms, format_cookie, read_cookie};

    /// Cookie jar of the current document.
    pub struct CookieStore {
        document: web_sys::HtmlDocument,
    }

    impl CookieStore {
        pub fn new(document: &web_sys::Document) -> Option<Self> {
            let document = document.clone().dyn_into::<web_sys::HtmlDocument>().ok()?;
            Some(Self { document })
        }
    }

    impl PreferenceStore for CookieStore {
        fn get(&self, key: PreferenceKey) -> Option<String> {
            let jar = self.document.cookie().ok()?;
            read_cookie(&jar, key.name())
        }

        fn set(&self, key: PreferenceKey, value: &str) {
            let expires = js_sys::Date::new_0();
            expires.set_time(js_sys::Date::now() + days_to_ms(COOKIE_EXPIRY_DAYS));
            let expires = String::from(expires.to_utc_string());
            if let Err(err) = self.document.set_cookie(&format_cookie(key.name(), value, &expires)) {
                log::warn!("failed to write cookie {}: {err:?}", key.name());
            }
        }
    }

    /// `window.localStorage`.
    pub struct LocalStore {
        storage: web_sys::Storage,
    }

    impl LocalStore {
        pub fn new() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            Some(Self { storage })
        }
    }

    impl PreferenceStore for LocalStore {
        fn get(&self, key: PreferenceKey) -> Option<String> {
            self.storage.get_item(key.name()).ok().flatten()
        }

        fn set(&self, key: PreferenceKey, value: &str) {
            if let Err(err) = self.storage.set_item(key.name(), value) {
                log::warn!("failed to write localStorage {}: {err:?}", key.name());
            }
        }
    }

    /// Open the configured backend, falling back to memory when unavailable.
    pub fn open_store(backend: StorageBackend, document: &web_sys::Document) -> Rc<dyn PreferenceStore> {
        let opened: Option<Rc<dyn PreferenceStore>> = match backend {
            StorageBackend::Cookie => CookieStore::new(document).map(|s| Rc::new(s) as Rc<dyn PreferenceStore>),
            StorageBackend::LocalStorage => LocalStore::new().map(|s| Rc::new(s) as Rc<dyn PreferenceStore>),
        };
        opened.unwrap_or_else(|| {
            log::warn!("{backend:?} preference store unavailable; choices last for this page only");
            Rc::new(MemoryStore::new())
        })
    }
}
