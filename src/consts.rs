//! Names and timings shared between the page template and this crate.

// ── Root element inputs ─────────────────────────────────────────

/// Presence marker: the theme radio group is offered.
pub const ATTR_THEME_SELECTOR: &str = "data-theme-selector-enabled";

/// Presence marker: the flavor radio group is offered.
pub const ATTR_FLAVOR_SELECTOR: &str = "data-flavor-selector-enabled";

/// Presence marks a page-fixed flavor; the value names it.
pub const ATTR_STATIC_FLAVOR: &str = "data-static-flavor";

/// Author-configured fallback flavor.
pub const ATTR_DEFAULT_FLAVOR: &str = "data-default-flavor";

/// Which per-browser store holds preferences (`cookie` or `local-storage`).
pub const ATTR_PREFERENCE_STORE: &str = "data-preference-store";

// ── Root element outputs ────────────────────────────────────────

/// Explicit theme marker; absent while the theme is `auto`.
pub const ATTR_THEME: &str = "data-theme";

pub const THEME_CLASS_SUFFIX: &str = "-theme";
pub const FLAVOR_CLASS_SUFFIX: &str = "-flavor";

// ── Persistence ─────────────────────────────────────────────────

pub const THEME_COOKIE: &str = "preferred-theme";
pub const FLAVOR_COOKIE: &str = "preferred-flavor";
pub const COOKIE_EXPIRY_DAYS: u32 = 365;
pub const COOKIE_PATH: &str = "/";
pub const COOKIE_SAME_SITE: &str = "Lax";

// ── Browser signals ─────────────────────────────────────────────

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 768px)";

// ── Settings menu ───────────────────────────────────────────────

pub const MENU_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const MENU_TOGGLE_LABEL: &str = "Toggle theme settings";

// ── Diagrams ────────────────────────────────────────────────────

pub const DIAGRAM_CLASS: &str = "mermaid";
pub const DIAGRAM_GLOBAL: &str = "mermaid";
pub const DIAGRAM_PROCESSED_ATTR: &str = "data-processed";

// ── Footnotes ───────────────────────────────────────────────────

pub const FOOTNOTE_LINK_SELECTOR: &str = ".footnote-reference a";
pub const FOOTNOTE_PARAGRAPH_PREFIX: &str = "ref-para-";
pub const ATTR_FOOTNOTE_PARAGRAPH: &str = "data-ref-paragraph";

/// Delay before footnotes are placed after page ready.
pub const FOOTNOTE_PLACEMENT_DELAY_MS: u32 = 50;

/// Delay between a footnote link click and the scroll adjustment.
pub const FOOTNOTE_SCROLL_DELAY_MS: u32 = 10;
