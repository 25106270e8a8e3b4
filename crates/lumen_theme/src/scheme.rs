//! Color scheme selection and resolution

use serde::Serialize;

/// Resolved color scheme. Never `Auto`.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl_variant!(ColorScheme, axis: "color scheme", fallback: ColorScheme::Light, {
    ColorScheme::Light => "light",
    ColorScheme::Dark => "dark",
});

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn is_light(self) -> bool {
        self == ColorScheme::Light
    }
}

/// What the user (or app) selected
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeSelection {
    Light,
    Dark,
    /// Follow the host appearance
    #[default]
    Auto,
}

impl_variant!(SchemeSelection, axis: "scheme selection", fallback: SchemeSelection::Auto, {
    SchemeSelection::Light => "light",
    SchemeSelection::Dark => "dark",
    SchemeSelection::Auto => "auto",
});

impl SchemeSelection {
    /// Resolve against the host appearance.
    ///
    /// An explicit selection always wins. `Auto` follows the appearance and
    /// falls back to light when the host does not report one.
    pub fn resolve(self, appearance: Appearance) -> ColorScheme {
        match self {
            SchemeSelection::Light => ColorScheme::Light,
            SchemeSelection::Dark => ColorScheme::Dark,
            SchemeSelection::Auto => appearance.scheme_or_default(),
        }
    }

    pub fn is_auto(self) -> bool {
        self == SchemeSelection::Auto
    }
}

impl From<ColorScheme> for SchemeSelection {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => SchemeSelection::Light,
            ColorScheme::Dark => SchemeSelection::Dark,
        }
    }
}

/// Host environment color preference
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
    /// The host could not report a preference
    #[default]
    Unknown,
}

impl_variant!(Appearance, axis: "appearance", fallback: Appearance::Unknown, {
    Appearance::Light => "light",
    Appearance::Dark => "dark",
    Appearance::Unknown => "unknown",
});

impl Appearance {
    pub fn scheme(self) -> Option<ColorScheme> {
        match self {
            Appearance::Light => Some(ColorScheme::Light),
            Appearance::Dark => Some(ColorScheme::Dark),
            Appearance::Unknown => None,
        }
    }

    /// The reported scheme, or light when unknown
    pub fn scheme_or_default(self) -> ColorScheme {
        self.scheme().unwrap_or_default()
    }
}

impl From<ColorScheme> for Appearance {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Appearance::Light,
            ColorScheme::Dark => Appearance::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::Variant;

    #[test]
    fn test_explicit_selection_wins() {
        for appearance in Appearance::all() {
            assert_eq!(SchemeSelection::Light.resolve(*appearance), ColorScheme::Light);
            assert_eq!(SchemeSelection::Dark.resolve(*appearance), ColorScheme::Dark);
        }
    }

    #[test]
    fn test_auto_follows_appearance() {
        assert_eq!(SchemeSelection::Auto.resolve(Appearance::Dark), ColorScheme::Dark);
        assert_eq!(SchemeSelection::Auto.resolve(Appearance::Light), ColorScheme::Light);
        assert_eq!(SchemeSelection::Auto.resolve(Appearance::Unknown), ColorScheme::Light);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for scheme in ColorScheme::all() {
            assert_eq!(scheme.toggle().toggle(), *scheme);
            assert_ne!(scheme.toggle(), *scheme);
        }
    }

    #[test]
    fn test_lenient_selection_falls_back_to_auto() {
        assert_eq!(SchemeSelection::parse_or_fallback("system"), SchemeSelection::Auto);
        assert_eq!(SchemeSelection::parse_or_fallback("Dark"), SchemeSelection::Dark);
        assert_eq!(ColorScheme::parse_or_fallback("sepia"), ColorScheme::Light);
    }
}
