//! Header settings menu: gear toggle plus a dropdown of radio groups.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted into the page's `<header>` after the controller has applied the
//! initial preferences. Radio changes go straight to the controller; the
//! dropdown closes on any click outside the menu.

#[cfg(test)]
#[path = "settings_menu_test.rs"]
mod settings_menu_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::radio_group::RadioGroup;
use crate::consts::MENU_TOGGLE_LABEL;
use crate::services::controller::PreferenceController;
use crate::state::page::PageConfig;
use crate::state::preference::{Flavor, Resolved, Theme};

const GEAR_PATH: &str = "M12 15.5A3.5 3.5 0 0 1 8.5 12 3.5 3.5 0 0 1 12 8.5a3.5 3.5 0 0 1 3.5 3.5 3.5 3.5 0 0 1-3.5 3.5zm0-2A1.5 1.5 0 0 0 13.5 12 1.5 1.5 0 0 0 12 10.5 1.5 1.5 0 0 0 10.5 12 1.5 1.5 0 0 0 12 13.5zM19.43 12.97l.71.71a1 1 0 0 1 0 1.41l-1.83 1.83a1 1 0 0 1-1.41 0l-.71-.71a7.05 7.05 0 0 1-1.24.71l-.11 1a1 1 0 0 1-1 .88h-2.59a1 1 0 0 1-1-.88l-.11-1a7.05 7.05 0 0 1-1.24-.71l-.71.71a1 1 0 0 1-1.41 0L4.96 15.1a1 1 0 0 1 0-1.41l.71-.71a7.05 7.05 0 0 1-.71-1.24l-1-.11a1 1 0 0 1-.88-1V8.04a1 1 0 0 1 .88-1l1-.11a7.05 7.05 0 0 1 .71-1.24l-.71-.71a1 1 0 0 1 0-1.41L6.87 1.94a1 1 0 0 1 1.41 0l.71.71a7.05 7.05 0 0 1 1.24-.71l.11-1a1 1 0 0 1 1-.88h2.59a1 1 0 0 1 1 .88l.11 1a7.05 7.05 0 0 1 1.24.71l.71-.71a1 1 0 0 1 1.41 0l1.83 1.83a1 1 0 0 1 0 1.41l-.71.71a7.05 7.05 0 0 1 .71 1.24l1 .11a1 1 0 0 1 .88 1v2.59a1 1 0 0 1-.88 1l-1 .11a7.05 7.05 0 0 1-.71 1.24z";

/// Radio groups the menu offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSection {
    Theme,
    Flavor,
}

impl MenuSection {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Theme => "Theme Mode",
            Self::Flavor => "Theme Flavor",
        }
    }
}

/// Dropdown state after the gear toggle is clicked.
pub fn toggled(open: bool) -> bool {
    !open
}

/// Dropdown state after a click anywhere on the page. Only clicks outside
/// the menu close it.
pub fn open_after_click(open: bool, inside_menu: bool) -> bool {
    open && inside_menu
}

/// Radio handler for the theme group.
pub fn theme_picker(controller: Rc<PreferenceController>) -> impl Fn(Theme) + Clone + 'static {
    move |value| controller.apply_theme(value)
}

/// Radio handler for the flavor group.
pub fn flavor_picker(controller: Rc<PreferenceController>) -> impl Fn(Flavor) + Clone + 'static {
    move |value| controller.apply_flavor(value)
}

/// Sections to render for `config`, in display order. Empty means no menu.
pub fn menu_sections(config: &PageConfig) -> Vec<MenuSection> {
    let mut sections = Vec::new();
    if config.theme_selector {
        sections.push(MenuSection::Theme);
    }
    if config.flavor_selector && !config.has_static_flavor() {
        sections.push(MenuSection::Flavor);
    }
    sections
}

#[component]
pub fn SettingsMenu(controller: Rc<PreferenceController>, initial: Resolved) -> impl IntoView {
    let sections = menu_sections(controller.config());
    let open = RwSignal::new(false);
    let theme = RwSignal::new(initial.theme);
    let flavor = RwSignal::new(initial.flavor);
    let menu_ref = NodeRef::<leptos::html::Div>::new();

    let aria = Rc::clone(&controller);
    Effect::new(move || aria.set_menu_open(open.get()));

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(menu) = menu_ref.get() {
            crate::util::dom::close_on_outside_click(menu.into(), open);
        }
    });

    let groups = sections
        .into_iter()
        .map(|section| match section {
            MenuSection::Theme => view! {
                <RadioGroup
                    heading={section.heading()}
                    selected=theme
                    on_pick=theme_picker(Rc::clone(&controller))
                />
            }
            .into_any(),
            MenuSection::Flavor => view! {
                <RadioGroup
                    heading={section.heading()}
                    selected=flavor
                    on_pick=flavor_picker(Rc::clone(&controller))
                />
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="config-menu" node_ref=menu_ref>
            <button
                class="theme-toggle"
                aria-label=MENU_TOGGLE_LABEL
                aria-haspopup="true"
                on:click=move |_| open.update(|o| *o = toggled(*o))
            >
                <svg class="gear-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24">
                    <path d=GEAR_PATH></path>
                </svg>
            </button>
            <div class="theme-dropdown" class:active=move || open.get()>
                <div class="theme-options">{groups}</div>
            </div>
        </div>
    }
}

/// Append the settings menu to `header` for the rest of the page lifetime.
#[cfg(feature = "csr")]
pub fn mount(header: web_sys::HtmlElement, controller: Rc<PreferenceController>, initial: Resolved) {
    if menu_sections(controller.config()).is_empty() {
        log::debug!("no selectors enabled; settings menu skipped");
        return;
    }
    leptos::mount::mount_to(header, move || view! { <SettingsMenu controller=controller initial=initial/> }).forget();
}
