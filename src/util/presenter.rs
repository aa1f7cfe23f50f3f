//! Document surface the controller writes to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser implementation lives in `util::dom`; tests use an in-memory
//! fake. Only the primitives touch the page; the theme and flavor class
//! rules are shared provided methods.

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;

use crate::consts::ATTR_THEME;
use crate::state::preference::{Choice, Flavor, Theme};

pub trait DocumentPresenter {
    fn has_root_attribute(&self, name: &str) -> bool;
    fn root_attribute(&self, name: &str) -> Option<String>;
    fn set_root_attribute(&self, name: &str, value: &str);
    fn remove_root_attribute(&self, name: &str);

    fn root_has_class(&self, class: &str) -> bool;
    fn add_root_class(&self, class: &str);
    fn remove_root_class(&self, class: &str);

    /// Mark the radio in `group` whose value is `value`, clearing the rest.
    /// A missing group is not an error.
    fn check_radio(&self, group: &str, value: &str);

    /// Set an ARIA attribute on the settings toggle, if it exists.
    fn set_toggle_aria(&self, name: &str, value: &str);

    /// Current state of the system dark-mode signal.
    fn prefers_dark(&self) -> bool;

    /// Replace the explicit theme marker. `auto` leaves none.
    fn apply_theme_classes(&self, theme: Theme) {
        for class in Theme::ALL.iter().filter_map(|t| t.class_name()) {
            self.remove_root_class(&class);
        }
        match theme.class_name() {
            Some(class) => {
                self.add_root_class(&class);
                self.set_root_attribute(ATTR_THEME, theme.as_str());
            }
            None => self.remove_root_attribute(ATTR_THEME),
        }
    }

    /// Replace the flavor class. `none` leaves none.
    fn apply_flavor_classes(&self, flavor: Flavor) {
        for class in Flavor::ALL.iter().filter_map(|f| f.class_name()) {
            self.remove_root_class(&class);
        }
        if let Some(class) = flavor.class_name() {
            self.add_root_class(&class);
        }
    }
}
