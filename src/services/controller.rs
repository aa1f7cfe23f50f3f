//! Preference controller: apply, persist and react.
//!
//! DESIGN
//! ======
//! The controller owns the page configuration snapshot and the three
//! collaborators (store, document, diagrams). Every entry point runs to
//! completion on the UI thread; the only deferred work is the diagram
//! re-render, which is idempotent.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use crate::services::resolver;
use crate::state::page::PageConfig;
use crate::state::preference::{Choice, EffectiveTheme, Flavor, Resolved, Theme};
use crate::util::diagram::{DiagramConfig, DiagramRenderer};
use crate::util::presenter::DocumentPresenter;
use crate::util::store::{PreferenceKey, PreferenceStore, stored};

pub struct PreferenceController {
    config: PageConfig,
    store: Rc<dyn PreferenceStore>,
    document: Rc<dyn DocumentPresenter>,
    diagrams: Rc<dyn DiagramRenderer>,
}

impl PreferenceController {
    pub fn new(
        config: PageConfig,
        store: Rc<dyn PreferenceStore>,
        document: Rc<dyn DocumentPresenter>,
        diagrams: Rc<dyn DiagramRenderer>,
    ) -> Self {
        Self { config, store, document, diagrams }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn resolve_theme(&self) -> Theme {
        resolver::resolve_theme(&self.config, self.store.as_ref())
    }

    pub fn resolve_flavor(&self) -> Flavor {
        resolver::resolve_flavor(&self.config, self.store.as_ref())
    }

    /// Resolve and apply both preferences for a freshly loaded page.
    pub fn init(&self) -> Resolved {
        let resolved = Resolved { theme: self.resolve_theme(), flavor: self.resolve_flavor() };
        self.apply_theme(resolved.theme);
        self.apply_flavor(resolved.flavor);

        log::info!(
            "theme system initialized: theme={} flavor={} theme_selector={} flavor_selector={} static_flavor={}",
            resolved.theme,
            resolved.flavor,
            self.config.theme_selector,
            self.config.flavor_selector,
            self.config.static_flavor.map_or("none", Flavor::as_str),
        );
        resolved
    }

    /// Make `theme` visible to styling and diagrams, then persist it.
    pub fn apply_theme(&self, theme: Theme) {
        self.document.apply_theme_classes(theme);
        if self.config.theme_selector {
            self.document.check_radio(Theme::GROUP, theme.as_str());
        }
        self.render_diagrams(self.effective_theme(theme));
        self.store.set(PreferenceKey::Theme, theme.as_str());
    }

    /// Make `flavor` visible to styling and persist it when the user owns it.
    ///
    /// A page-fixed flavor only refreshes the menu state; classes and the
    /// store stay untouched.
    pub fn apply_flavor(&self, flavor: Flavor) {
        if let Some(fixed) = self.config.static_flavor {
            if self.config.flavor_selector {
                self.document.check_radio(Flavor::GROUP, fixed.as_str());
            }
            return;
        }

        self.document.apply_flavor_classes(flavor);
        if self.config.flavor_selector {
            self.document.check_radio(Flavor::GROUP, flavor.as_str());
            self.store.set(PreferenceKey::Flavor, flavor.as_str());
        }
    }

    /// Bring the menu radios in line with `resolved`.
    pub fn sync_indicators(&self, resolved: Resolved) {
        if self.config.theme_selector {
            self.document.check_radio(Theme::GROUP, resolved.theme.as_str());
        }
        if self.config.flavor_selector {
            let flavor = self.config.static_flavor.unwrap_or(resolved.flavor);
            self.document.check_radio(Flavor::GROUP, flavor.as_str());
        }
    }

    pub fn effective_theme(&self, theme: Theme) -> EffectiveTheme {
        theme.effective(self.document.prefers_dark())
    }

    /// React to a system dark-mode change.
    ///
    /// Returns the new effective scheme, or `None` when the user has pinned
    /// an explicit theme. The pin is read from the store on every call.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<EffectiveTheme> {
        let pinned = stored::<Theme>(self.store.as_ref(), PreferenceKey::Theme).filter(|t| t.is_explicit());
        if let Some(theme) = pinned {
            log::debug!("system scheme changed; keeping pinned theme {theme}");
            return None;
        }

        let effective = Theme::Auto.effective(prefers_dark);
        self.render_diagrams(effective);
        Some(effective)
    }

    /// Reflect the settings dropdown state on the toggle.
    pub fn set_menu_open(&self, open: bool) {
        self.document.set_toggle_aria("aria-expanded", if open { "true" } else { "false" });
    }

    fn render_diagrams(&self, effective: EffectiveTheme) {
        if self.diagrams.has_diagrams() {
            self.diagrams.render(&DiagramConfig::for_theme(effective));
        }
    }
}
