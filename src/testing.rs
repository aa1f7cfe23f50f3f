//! In-memory stand-ins for the browser, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use crate::util::diagram::{DiagramConfig, DiagramRenderer};
use crate::util::presenter::DocumentPresenter;

#[derive(Default)]
pub struct FakeDocument {
    classes: RefCell<BTreeSet<String>>,
    attributes: RefCell<BTreeMap<String, String>>,
    radios: RefCell<BTreeMap<String, Vec<(String, bool)>>>,
    aria: RefCell<BTreeMap<String, String>>,
    dark: Cell<bool>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(self, class: &str) -> Self {
        self.classes.borrow_mut().insert(class.to_owned());
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        self
    }

    /// Pretend the settings menu rendered a radio group.
    pub fn with_radios(self, group: &str, values: &[&str]) -> Self {
        let inputs = values.iter().map(|v| ((*v).to_owned(), false)).collect();
        self.radios.borrow_mut().insert(group.to_owned(), inputs);
        self
    }

    pub fn with_system_dark(self, dark: bool) -> Self {
        self.dark.set(dark);
        self
    }

    pub fn set_system_dark(&self, dark: bool) {
        self.dark.set(dark);
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    /// Values of the checked radios in `group`.
    pub fn checked(&self, group: &str) -> Vec<String> {
        self.radios
            .borrow()
            .get(group)
            .map(|inputs| inputs.iter().filter(|(_, on)| *on).map(|(v, _)| v.clone()).collect())
            .unwrap_or_default()
    }

    pub fn aria(&self, name: &str) -> Option<String> {
        self.aria.borrow().get(name).cloned()
    }

    /// Everything observable, for before/after comparisons.
    pub fn snapshot(&self) -> (Vec<String>, BTreeMap<String, String>, BTreeMap<String, Vec<(String, bool)>>) {
        (self.classes(), self.attributes.borrow().clone(), self.radios.borrow().clone())
    }
}

impl DocumentPresenter for FakeDocument {
    fn has_root_attribute(&self, name: &str) -> bool {
        self.attributes.borrow().contains_key(name)
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn remove_root_attribute(&self, name: &str) {
        self.attributes.borrow_mut().remove(name);
    }

    fn root_has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_root_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn remove_root_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn check_radio(&self, group: &str, value: &str) {
        if let Some(inputs) = self.radios.borrow_mut().get_mut(group) {
            for (input, on) in inputs.iter_mut() {
                *on = input == value;
            }
        }
    }

    fn set_toggle_aria(&self, name: &str, value: &str) {
        self.aria.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }
}

/// Records every render request.
pub struct FakeDiagrams {
    present: bool,
    renders: RefCell<Vec<DiagramConfig>>,
}

impl FakeDiagrams {
    pub fn present() -> Self {
        Self { present: true, renders: RefCell::new(Vec::new()) }
    }

    pub fn absent() -> Self {
        Self { present: false, renders: RefCell::new(Vec::new()) }
    }

    pub fn renders(&self) -> Vec<DiagramConfig> {
        self.renders.borrow().clone()
    }
}

impl DiagramRenderer for FakeDiagrams {
    fn has_diagrams(&self) -> bool {
        self.present
    }

    fn render(&self, config: &DiagramConfig) {
        self.renders.borrow_mut().push(*config);
    }
}
