//! # theme-switcher
//!
//! Theme and flavor switching for statically generated sites, compiled to
//! WebAssembly and loaded as a page script.
//!
//! On page ready the crate resolves the active color scheme and visual
//! flavor, applies them to `<html>`, persists them in a cookie (or
//! `localStorage`), mounts a small Leptos settings menu into the header and
//! keeps Mermaid diagrams in step with the effective scheme.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Theme/flavor enums and the page configuration snapshot |
//! | [`services`] | Preference resolution and the controller that applies it |
//! | [`util`] | Store, document and diagram seams plus their browser bindings |
//! | [`components`] | Settings menu views |
//! | [`consts`] | Attribute names, cookie settings, media queries, timings |
//!
//! Browser bindings compile only with the `csr` feature; everything else
//! builds and tests natively.

pub mod components;
pub mod consts;
pub mod services;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
mod boot;

#[cfg(test)]
mod testing;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"theme-switcher: logger already installed".into());
    }
    // Diagram and footnote work is spawned during page-ready wiring, before
    // any view is mounted.
    if let Err(err) = any_spawner::Executor::init_wasm_bindgen() {
        log::debug!("task executor already installed: {err:?}");
    }
    util::dom::on_ready(boot::run);
}
