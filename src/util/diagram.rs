//! Mermaid diagram re-rendering on theme changes.
//!
//! Mermaid bakes its theme in at `initialize` time and marks processed blocks
//! in place, so a theme switch restores every block's original source and
//! runs the library again with a new configuration.

#[cfg(test)]
#[path = "diagram_test.rs"]
mod diagram_test;

use serde::Serialize;

use crate::state::preference::EffectiveTheme;

/// Mermaid palette names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramPalette {
    Dark,
    Neutral,
}

/// Argument to `mermaid.initialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConfig {
    pub start_on_load: bool,
    pub theme: DiagramPalette,
}

impl DiagramConfig {
    pub fn for_theme(effective: EffectiveTheme) -> Self {
        let theme = match effective {
            EffectiveTheme::Dark => DiagramPalette::Dark,
            EffectiveTheme::Light => DiagramPalette::Neutral,
        };
        Self { start_on_load: false, theme }
    }
}

pub trait DiagramRenderer {
    /// Whether the page has anything to re-render.
    fn has_diagrams(&self) -> bool;

    /// Tear down and re-render every diagram block with `config`.
    fn render(&self, config: &DiagramConfig);
}

/// Renderer for pages without diagrams.
pub struct NoDiagrams;

/// Keep the blocks whose markup is still the authored diagram source.
///
/// Each item is `(block, already_processed, markup)`. A processed block holds
/// rendered output and cannot be restored, so it is dropped with a warning.
pub fn authored_sources<T>(blocks: impl IntoIterator<Item = (T, bool, String)>) -> Vec<(T, String)> {
    let mut skipped = 0usize;
    let kept: Vec<(T, String)> = blocks
        .into_iter()
        .filter_map(|(block, processed, markup)| {
            if processed {
                skipped += 1;
                None
            } else {
                Some((block, markup))
            }
        })
        .collect();
    if skipped > 0 {
        log::warn!(
            "{skipped} diagram block(s) were rendered before capture and will keep their theme; \
             load Mermaid with startOnLoad: false"
        );
    }
    kept
}

impl DiagramRenderer for NoDiagrams {
    fn has_diagrams(&self) -> bool {
        false
    }

    fn render(&self, _config: &DiagramConfig) {}
}

#[cfg(feature = "csr")]
pub use browser::MermaidRenderer;

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use js_sys::{Function, JSON, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{DiagramConfig, DiagramRenderer, authored_sources};
    use crate::consts::{DIAGRAM_CLASS, DIAGRAM_GLOBAL, DIAGRAM_PROCESSED_ATTR};

    struct Block {
        element: web_sys::Element,
        source: String,
    }

    /// Drives `window.mermaid` over the page's `.mermaid` blocks.
    pub struct MermaidRenderer {
        blocks: Rc<Vec<Block>>,
    }

    impl MermaidRenderer {
        /// Capture each block's source before Mermaid first touches it.
        ///
        /// `None` when the page has no restorable diagram blocks.
        pub fn capture(document: &web_sys::Document) -> Option<Self> {
            let collection = document.get_elements_by_class_name(DIAGRAM_CLASS);
            let found = (0..collection.length()).filter_map(|i| collection.item(i)).map(|element| {
                let processed = element.has_attribute(DIAGRAM_PROCESSED_ATTR);
                let markup = element.inner_html();
                (element, processed, markup)
            });
            let blocks: Vec<Block> = authored_sources(found)
                .into_iter()
                .map(|(element, source)| Block { element, source })
                .collect();
            if blocks.is_empty() {
                return None;
            }
            Some(Self { blocks: Rc::new(blocks) })
        }
    }

    impl DiagramRenderer for MermaidRenderer {
        fn has_diagrams(&self) -> bool {
            !self.blocks.is_empty()
        }

        fn render(&self, config: &DiagramConfig) {
            let blocks = Rc::clone(&self.blocks);
            let config = *config;
            leptos::task::spawn_local(async move {
                if let Err(err) = rerender(&blocks, &config).await {
                    log::warn!("diagram re-render failed: {err:?}");
                }
            });
        }
    }

    async fn rerender(blocks: &[Block], config: &DiagramConfig) -> Result<(), JsValue> {
        let Some(window) = web_sys::window() else {
            return Ok(());
        };
        let mermaid = Reflect::get(&window, &JsValue::from_str(DIAGRAM_GLOBAL))?;
        if mermaid.is_undefined() || mermaid.is_null() {
            log::debug!("diagram blocks present but no renderer loaded");
            return Ok(());
        }

        for block in blocks {
            block.element.remove_attribute(DIAGRAM_PROCESSED_ATTR)?;
            block.element.set_inner_html(&block.source);
        }

        let json = serde_json::to_string(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let options = JSON::parse(&json)?;
        method(&mermaid, "initialize")?.call1(&mermaid, &options)?;
        let outcome = method(&mermaid, "run")?.call0(&mermaid)?;
        if let Ok(promise) = outcome.dyn_into::<Promise>() {
            JsFuture::from(promise).await?;
        }
        Ok(())
    }

    fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
        Reflect::get(target, &JsValue::from_str(name))?.dyn_into::<Function>()
    }
}
