//! Page-supplied configuration read from the root element.
//!
//! The static site generator writes these markers into `<html>`; they are
//! read once at startup and never written back.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::consts::{
    ATTR_DEFAULT_FLAVOR, ATTR_FLAVOR_SELECTOR, ATTR_PREFERENCE_STORE, ATTR_STATIC_FLAVOR, ATTR_THEME_SELECTOR,
};
use crate::state::preference::{Choice, Flavor, Theme};
use crate::util::presenter::DocumentPresenter;

/// Where preferences survive across page loads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Cookie,
    LocalStorage,
}

impl StorageBackend {
    fn from_attribute(raw: Option<&str>) -> Self {
        match raw {
            Some("local-storage") => Self::LocalStorage,
            _ => Self::Cookie,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub theme_selector: bool,
    pub flavor_selector: bool,
    /// `Some` when the page fixes the flavor. An unrecognized value pins `none`.
    pub static_flavor: Option<Flavor>,
    pub default_flavor: Flavor,
    pub default_theme: Theme,
    pub storage: StorageBackend,
}

impl PageConfig {
    /// Snapshot the root element's configuration markers.
    ///
    /// Must run before the first theme is applied: the default theme is
    /// carried by the same classes that application rewrites.
    pub fn from_document(document: &dyn DocumentPresenter) -> Self {
        let static_flavor = document
            .has_root_attribute(ATTR_STATIC_FLAVOR)
            .then(|| flavor_or_none(document.root_attribute(ATTR_STATIC_FLAVOR).as_deref()));

        Self {
            theme_selector: document.has_root_attribute(ATTR_THEME_SELECTOR),
            flavor_selector: document.has_root_attribute(ATTR_FLAVOR_SELECTOR),
            static_flavor,
            default_flavor: flavor_or_none(document.root_attribute(ATTR_DEFAULT_FLAVOR).as_deref()),
            default_theme: default_theme(document),
            storage: StorageBackend::from_attribute(document.root_attribute(ATTR_PREFERENCE_STORE).as_deref()),
        }
    }

    pub fn has_static_flavor(&self) -> bool {
        self.static_flavor.is_some()
    }

    /// Whether any settings UI should be offered at all.
    pub fn any_selector(&self) -> bool {
        self.theme_selector || self.flavor_selector
    }
}

fn flavor_or_none(raw: Option<&str>) -> Flavor {
    raw.and_then(Flavor::parse).unwrap_or_default()
}

fn default_theme(document: &dyn DocumentPresenter) -> Theme {
    [Theme::Light, Theme::Dark]
        .into_iter()
        .find(|theme| theme.class_name().is_some_and(|class| document.root_has_class(&class)))
        .unwrap_or_default()
}
