use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_auto() {
    assert_eq!(Theme::default(), Theme::Auto);
}

#[test]
fn theme_parses_known_values_only() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("auto".parse::<Theme>(), Ok(Theme::Auto));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_parse_error_names_group_and_value() {
    let err = "sepia".parse::<Theme>().unwrap_err();
    assert_eq!(err.group, "theme");
    assert_eq!(err.to_string(), "unknown theme `sepia`");
}

#[test]
fn theme_class_name_only_for_explicit_themes() {
    assert_eq!(Theme::Auto.class_name(), None);
    assert_eq!(Theme::Light.class_name().as_deref(), Some("light-theme"));
    assert_eq!(Theme::Dark.class_name().as_deref(), Some("dark-theme"));
}

#[test]
fn theme_effective_resolves_auto_against_system() {
    assert_eq!(Theme::Auto.effective(true), EffectiveTheme::Dark);
    assert_eq!(Theme::Auto.effective(false), EffectiveTheme::Light);
    assert_eq!(Theme::Light.effective(true), EffectiveTheme::Light);
    assert_eq!(Theme::Dark.effective(false), EffectiveTheme::Dark);
}

#[test]
fn theme_display_matches_wire_form() {
    for theme in Theme::ALL {
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

#[test]
fn theme_menu_order_starts_with_auto() {
    assert_eq!(Theme::ALL, &[Theme::Auto, Theme::Light, Theme::Dark]);
}

// =============================================================
// Flavor
// =============================================================

#[test]
fn flavor_default_is_none() {
    assert_eq!(Flavor::default(), Flavor::None);
}

#[test]
fn flavor_parses_hyphenated_values() {
    assert_eq!(Flavor::parse("happy-headers"), Some(Flavor::HappyHeaders));
    assert_eq!(Flavor::parse("deep-headers"), Some(Flavor::DeepHeaders));
    assert_eq!(Flavor::parse("monochrome"), Some(Flavor::Monochrome));
    assert_eq!(Flavor::parse("happy_headers"), None);
}

#[test]
fn flavor_class_names_carry_suffix() {
    assert_eq!(Flavor::None.class_name(), None);
    assert_eq!(Flavor::Monochrome.class_name().as_deref(), Some("monochrome-flavor"));
    assert_eq!(Flavor::DeepHeaders.class_name().as_deref(), Some("deep-headers-flavor"));
}

#[test]
fn flavor_string_forms_are_unique() {
    for (i, a) in Flavor::ALL.iter().enumerate() {
        for (j, b) in Flavor::ALL.iter().enumerate() {
            assert_eq!(i == j, a.as_str() == b.as_str());
        }
    }
}
