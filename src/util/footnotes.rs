//! Footnote placement next to the paragraph that cites them.
//!
//! Independent of theming; it only shares the page-ready trigger. Wide
//! viewports move each footnote in front of its citing paragraph. Narrow
//! viewports leave the DOM alone and nudge the scroll after the anchor jump.

#[cfg(test)]
#[path = "footnotes_test.rs"]
mod footnotes_test;

use std::collections::HashSet;

use crate::consts::FOOTNOTE_PARAGRAPH_PREFIX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FootnoteLayout {
    /// Footnotes stay in place; links scroll them into view.
    Inline,
    /// Footnotes move beside their citing paragraph.
    Margin,
}

impl FootnoteLayout {
    pub fn for_viewport(narrow: bool) -> Self {
        if narrow { Self::Inline } else { Self::Margin }
    }
}

/// Target id of an in-page footnote link (`#fn1` → `fn1`).
pub fn footnote_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Id given to the paragraph that cites `footnote_id`.
pub fn paragraph_anchor(footnote_id: &str) -> String {
    format!("{FOOTNOTE_PARAGRAPH_PREFIX}{footnote_id}")
}

/// Keep the first link citing each footnote, paired with the footnote id.
/// Links that do not point inside the page are dropped.
pub fn first_citations<T>(links: impl IntoIterator<Item = (T, String)>) -> Vec<(T, String)> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter_map(|(link, href)| footnote_id(&href).map(|id| (link, id.to_owned())))
        .filter(|(_, id)| seen.insert(id.clone()))
        .collect()
}

#[cfg(feature = "csr")]
pub use browser::schedule_placement;

#[cfg(feature = "csr")]
mod browser {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{FootnoteLayout, first_citations, paragraph_anchor};
    use crate::consts::{
        ATTR_FOOTNOTE_PARAGRAPH, FOOTNOTE_LINK_SELECTOR, FOOTNOTE_PLACEMENT_DELAY_MS, FOOTNOTE_SCROLL_DELAY_MS,
        NARROW_VIEWPORT_QUERY,
    };
    use crate::util::dom::media_query;

    /// Place footnotes shortly after page ready. The layout is decided once.
    pub fn schedule_placement() {
        leptos::task::spawn_local(async {
            TimeoutFuture::new(FOOTNOTE_PLACEMENT_DELAY_MS).await;
            place_footnotes();
        });
    }

    fn place_footnotes() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let narrow = media_query(&window, NARROW_VIEWPORT_QUERY).is_some_and(|query| query.matches());
        let layout = FootnoteLayout::for_viewport(narrow);

        let Ok(nodes) = document.query_selector_all(FOOTNOTE_LINK_SELECTOR) else {
            return;
        };
        let links = (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .filter_map(|link| link.get_attribute("href").map(|href| (link, href)));

        for (link, id) in first_citations(links) {
            let Some(footnote) = document.get_element_by_id(&id) else {
                continue;
            };
            match layout {
                FootnoteLayout::Inline => scroll_on_click(&link, id),
                FootnoteLayout::Margin => move_beside_paragraph(&link, &footnote, &id),
            }
        }
    }

    fn scroll_on_click(link: &web_sys::Element, id: String) {
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let id = id.clone();
            leptos::task::spawn_local(async move {
                TimeoutFuture::new(FOOTNOTE_SCROLL_DELAY_MS).await;
                let target = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(&id));
                if let Some(target) = target {
                    let options = web_sys::ScrollIntoViewOptions::new();
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    options.set_block(web_sys::ScrollLogicalPosition::Center);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            });
        });
        if let Err(err) = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::warn!("footnote link listener not installed: {err:?}");
        }
        on_click.forget();
    }

    fn move_beside_paragraph(link: &web_sys::Element, footnote: &web_sys::Element, id: &str) {
        let Ok(Some(paragraph)) = link.closest("p") else {
            return;
        };
        let Some(parent) = paragraph.parent_node() else {
            return;
        };
        let before: &web_sys::Node = &paragraph;
        if let Err(err) = parent.insert_before(footnote, Some(before)) {
            log::warn!("footnote {id} not moved: {err:?}");
            return;
        }
        let anchor = paragraph_anchor(id);
        paragraph.set_id(&anchor);
        if let Err(err) = footnote.set_attribute(ATTR_FOOTNOTE_PARAGRAPH, &anchor) {
            log::warn!("footnote {id} not linked to paragraph: {err:?}");
        }
    }
}
