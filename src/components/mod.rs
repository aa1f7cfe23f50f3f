//! Leptos views injected into the static page.

pub mod radio_group;
pub mod settings_menu;
