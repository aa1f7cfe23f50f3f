//! Browser bindings for the document surface and page events.
//!
//! Requires a browser environment. Missing elements are skipped; failed DOM
//! calls are logged and otherwise ignored.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::settings_menu::open_after_click;
use crate::consts::{DARK_SCHEME_QUERY, MENU_TOGGLE_SELECTOR};
use crate::services::controller::PreferenceController;
use crate::util::presenter::DocumentPresenter;

fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{op} failed: {err:?}");
    }
}

/// `window.matchMedia(query)`, if the browser supports it.
pub fn media_query(window: &web_sys::Window, query: &str) -> Option<web_sys::MediaQueryList> {
    window.match_media(query).ok().flatten()
}

/// `<html>` of the current page.
pub struct DomPresenter {
    window: web_sys::Window,
    document: web_sys::Document,
    root: web_sys::Element,
}

impl DomPresenter {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let root = document.document_element()?;
        Some(Self { window, document, root })
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl DocumentPresenter for DomPresenter {
    fn has_root_attribute(&self, name: &str) -> bool {
        self.root.has_attribute(name)
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        report("set root attribute", self.root.set_attribute(name, value));
    }

    fn remove_root_attribute(&self, name: &str) {
        report("remove root attribute", self.root.remove_attribute(name));
    }

    fn root_has_class(&self, class: &str) -> bool {
        self.root.class_list().contains(class)
    }

    fn add_root_class(&self, class: &str) {
        report("add root class", self.root.class_list().add_1(class));
    }

    fn remove_root_class(&self, class: &str) {
        report("remove root class", self.root.class_list().remove_1(class));
    }

    fn check_radio(&self, group: &str, value: &str) {
        let Ok(inputs) = self.document.query_selector_all(&format!("input[name=\"{group}\"]")) else {
            return;
        };
        for index in 0..inputs.length() {
            if let Some(input) = inputs.item(index).and_then(|n| n.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                input.set_checked(input.value() == value);
            }
        }
    }

    fn set_toggle_aria(&self, name: &str, value: &str) {
        if let Ok(Some(toggle)) = self.document.query_selector(MENU_TOGGLE_SELECTOR) {
            report("set toggle aria", toggle.set_attribute(name, value));
        }
    }

    fn prefers_dark(&self) -> bool {
        media_query(&self.window, DARK_SCHEME_QUERY).is_some_and(|query| query.matches())
    }
}

/// Run `f` once the DOM is parsed, immediately if that already happened.
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    report(
        "DOMContentLoaded listener",
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()),
    );
}

/// Forward system dark-mode changes to the controller for the page lifetime.
pub fn watch_color_scheme(controller: Rc<PreferenceController>) {
    let Some(query) = web_sys::window().and_then(|w| media_query(&w, DARK_SCHEME_QUERY)) else {
        log::debug!("no color-scheme media query support");
        return;
    };
    let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |event: web_sys::MediaQueryListEvent| {
        if let Some(effective) = controller.on_system_change(event.matches()) {
            log::debug!("system scheme changed; effective theme now {effective:?}");
        }
    });
    report(
        "color-scheme listener",
        query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()),
    );
    on_change.forget();
}

/// Close the settings dropdown when a click lands outside `menu`.
///
/// Listens on the document so clicks anywhere on the page are seen.
pub fn close_on_outside_click(menu: web_sys::Element, open: RwSignal<bool>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| menu.contains(Some(&node)));
        let current = open.get_untracked();
        let next = open_after_click(current, inside);
        if next != current {
            open.set(next);
        }
    });
    report(
        "outside-click listener",
        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()),
    );
    on_click.forget();
}
