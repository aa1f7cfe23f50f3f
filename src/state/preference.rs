#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{FLAVOR_CLASS_SUFFIX, THEME_CLASS_SUFFIX};

// =============================================================================
// CHOICE
// =============================================================================

/// A closed set of string-valued options backed by one radio group.
///
/// The string form is what the page template, the store and the radio inputs
/// all agree on.
pub trait Choice: Copy + PartialEq + Send + Sync + 'static {
    /// Radio group `name` and error label.
    const GROUP: &'static str;

    /// Every member, in menu order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Human-facing label for the settings menu.
    fn label(self) -> &'static str;

    /// Look up a member by its string form. Unknown input yields `None`.
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {group} `{value}`")]
pub struct ParseChoiceError {
    pub group: &'static str,
    pub value: String,
}

fn parse_choice<T: Choice>(raw: &str) -> Result<T, ParseChoiceError> {
    T::parse(raw).ok_or_else(|| ParseChoiceError { group: T::GROUP, value: raw.to_owned() })
}

// =============================================================================
// THEME
// =============================================================================

/// Color scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Defer to `prefers-color-scheme`; no explicit marker on the document.
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    /// Root class for explicit themes; `auto` has none.
    pub fn class_name(self) -> Option<String> {
        match self {
            Self::Auto => None,
            Self::Light | Self::Dark => Some(format!("{}{THEME_CLASS_SUFFIX}", self.as_str())),
        }
    }

    /// Concrete scheme, resolving `auto` against the system signal.
    pub fn effective(self, system_prefers_dark: bool) -> EffectiveTheme {
        match self {
            Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
            Self::Auto if system_prefers_dark => EffectiveTheme::Dark,
            Self::Auto => EffectiveTheme::Light,
        }
    }

    pub fn is_explicit(self) -> bool {
        self != Self::Auto
    }
}

impl Choice for Theme {
    const GROUP: &'static str = "theme";
    const ALL: &'static [Self] = &[Self::Auto, Self::Light, Self::Dark];

    fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl FromStr for Theme {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scheme actually on screen once `auto` has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

// =============================================================================
// FLAVOR
// =============================================================================

/// Secondary visual style layered on top of the theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Flavor {
    #[default]
    None,
    HappyHeaders,
    Happy,
    DeepHeaders,
    Deep,
    Monochrome,
}

impl Flavor {
    /// Root class for this flavor; `none` has none.
    pub fn class_name(self) -> Option<String> {
        match self {
            Self::None => None,
            _ => Some(format!("{}{FLAVOR_CLASS_SUFFIX}", self.as_str())),
        }
    }
}

impl Choice for Flavor {
    const GROUP: &'static str = "flavor";
    const ALL: &'static [Self] = &[
        Self::None,
        Self::HappyHeaders,
        Self::Happy,
        Self::DeepHeaders,
        Self::Deep,
        Self::Monochrome,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::HappyHeaders => "happy-headers",
            Self::Happy => "happy",
            Self::DeepHeaders => "deep-headers",
            Self::Deep => "deep",
            Self::Monochrome => "monochrome",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::HappyHeaders => "Happy Headers",
            Self::Happy => "Happy",
            Self::DeepHeaders => "Deep Headers",
            Self::Deep => "Deep",
            Self::Monochrome => "Monochrome",
        }
    }
}

impl FromStr for Flavor {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme and flavor in effect after initialization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolved {
    pub theme: Theme,
    pub flavor: Flavor,
}
