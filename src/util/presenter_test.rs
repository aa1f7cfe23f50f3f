use super::*;
use crate::testing::FakeDocument;

// =============================================================
// apply_theme_classes
// =============================================================

#[test]
fn explicit_theme_sets_class_and_attribute() {
    let doc = FakeDocument::new();
    doc.apply_theme_classes(Theme::Dark);
    assert_eq!(doc.classes(), vec!["dark-theme"]);
    assert_eq!(doc.attribute("data-theme").as_deref(), Some("dark"));
}

#[test]
fn switching_theme_leaves_exactly_one_marker() {
    let doc = FakeDocument::new().with_class("light-theme");
    doc.apply_theme_classes(Theme::Dark);
    assert!(!doc.root_has_class("light-theme"));
    assert!(doc.root_has_class("dark-theme"));

    doc.apply_theme_classes(Theme::Light);
    assert!(doc.root_has_class("light-theme"));
    assert!(!doc.root_has_class("dark-theme"));
}

#[test]
fn auto_clears_class_and_attribute() {
    let doc = FakeDocument::new().with_class("dark-theme").with_attribute("data-theme", "dark");
    doc.apply_theme_classes(Theme::Auto);
    assert!(doc.classes().is_empty());
    assert_eq!(doc.attribute("data-theme"), None);
}

#[test]
fn theme_classes_leave_unrelated_classes_alone() {
    let doc = FakeDocument::new().with_class("no-js").with_class("deep-flavor");
    doc.apply_theme_classes(Theme::Light);
    assert_eq!(doc.classes(), vec!["deep-flavor", "light-theme", "no-js"]);
}

// =============================================================
// apply_flavor_classes
// =============================================================

#[test]
fn flavor_replaces_previous_flavor() {
    let doc = FakeDocument::new().with_class("happy-flavor").with_class("deep-headers-flavor");
    doc.apply_flavor_classes(Flavor::Monochrome);
    assert_eq!(doc.classes(), vec!["monochrome-flavor"]);
}

#[test]
fn flavor_none_clears_all_flavor_classes() {
    let doc = FakeDocument::new().with_class("happy-flavor").with_class("light-theme");
    doc.apply_flavor_classes(Flavor::None);
    assert_eq!(doc.classes(), vec!["light-theme"]);
}
