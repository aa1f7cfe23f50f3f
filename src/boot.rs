//! Page-ready wiring: build the controller and attach it to the page.

use std::rc::Rc;

use wasm_bindgen::JsCast;

use crate::components::settings_menu;
use crate::services::controller::PreferenceController;
use crate::state::page::PageConfig;
use crate::util::diagram::{DiagramRenderer, MermaidRenderer, NoDiagrams};
use crate::util::dom::{self, DomPresenter};
use crate::util::footnotes;
use crate::util::presenter::DocumentPresenter;
use crate::util::store::open_store;

pub fn run() {
    let Some(presenter) = DomPresenter::new() else {
        log::warn!("no document; theme system not started");
        return;
    };
    let config = PageConfig::from_document(&presenter);
    let document = presenter.document().clone();

    let store = open_store(config.storage, &document);
    let diagrams: Rc<dyn DiagramRenderer> = match MermaidRenderer::capture(&document) {
        Some(mermaid) => Rc::new(mermaid),
        None => Rc::new(NoDiagrams),
    };
    let presenter: Rc<dyn DocumentPresenter> = Rc::new(presenter);
    let controller = Rc::new(PreferenceController::new(config, store, presenter, diagrams));

    let resolved = controller.init();

    match document.query_selector("header") {
        Ok(Some(header)) => match header.dyn_into::<web_sys::HtmlElement>() {
            Ok(header) => {
                settings_menu::mount(header, Rc::clone(&controller), resolved);
                controller.sync_indicators(resolved);
            }
            Err(_) => log::debug!("<header> is not an HTML element; settings menu skipped"),
        },
        _ => log::debug!("no <header>; settings menu skipped"),
    }

    dom::watch_color_scheme(controller);
    footnotes::schedule_placement();
}
