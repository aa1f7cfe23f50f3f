//! Preference resolution: which theme and flavor are active.
//!
//! DESIGN
//! ======
//! Precedence, highest first:
//! 1. static flavor fixed by the page (flavor only)
//! 2. recognized stored choice (flavor only while its selector is enabled)
//! 3. page default
//! 4. `auto` / `none`
//!
//! The system dark-mode signal never picks the theme here; it resolves `auto`
//! into an effective scheme at application time.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::state::page::PageConfig;
use crate::state::preference::{Flavor, Theme};
use crate::util::store::{PreferenceKey, PreferenceStore, stored};

pub fn resolve_theme(config: &PageConfig, store: &dyn PreferenceStore) -> Theme {
    stored(store, PreferenceKey::Theme).unwrap_or(config.default_theme)
}

pub fn resolve_flavor(config: &PageConfig, store: &dyn PreferenceStore) -> Flavor {
    if let Some(fixed) = config.static_flavor {
        return fixed;
    }
    if config.flavor_selector {
        if let Some(flavor) = stored(store, PreferenceKey::Flavor) {
            return flavor;
        }
    }
    config.default_flavor
}
