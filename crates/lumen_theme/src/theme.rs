//! Theme aggregate and light/dark bundles

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lumen_core::Color;
use serde::Serialize;

use crate::scheme::ColorScheme;
use crate::tokens::*;

static NEXT_THEME_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a constructed [`Theme`]
///
/// Two themes with equal token values still have different ids. Caches keyed
/// on the id therefore never conflate two themes.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize)]
pub struct ThemeId(u64);

impl ThemeId {
    fn next() -> Self {
        ThemeId(NEXT_THEME_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "theme#{}", self.0)
    }
}

/// An immutable, fully populated set of design tokens for one color scheme
#[derive(Debug, Serialize)]
pub struct Theme {
    #[serde(skip)]
    id: ThemeId,
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    opacity: OpacityTokens,
    components: ComponentPresets,
}

impl Theme {
    /// Start building a theme from a complete color table
    pub fn builder(
        name: impl Into<String>,
        scheme: ColorScheme,
        colors: ColorTokens,
    ) -> ThemeBuilder {
        ThemeBuilder::new(name, scheme, colors)
    }

    pub fn id(&self) -> ThemeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    /// Get a color by token key
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    pub fn text_style(&self, variant: TextVariant) -> &TextStyle {
        self.typography.get(variant)
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    pub fn opacity(&self) -> &OpacityTokens {
        &self.opacity
    }

    pub fn components(&self) -> &ComponentPresets {
        &self.components
    }

    /// A builder seeded with this theme's tokens.
    ///
    /// The built theme is a new theme with a new id.
    pub fn to_builder(&self) -> ThemeBuilder {
        ThemeBuilder {
            name: self.name.clone(),
            scheme: self.scheme,
            colors: self.colors.clone(),
            typography: self.typography.clone(),
            spacing: self.spacing.clone(),
            radii: self.radii.clone(),
            opacity: self.opacity.clone(),
        }
    }
}

/// Builder for [`Theme`]
///
/// Component presets are always derived from the final spacing, radius and
/// typography tokens in [`ThemeBuilder::build`].
#[derive(Clone, Debug)]
pub struct ThemeBuilder {
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    opacity: OpacityTokens,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>, scheme: ColorScheme, colors: ColorTokens) -> Self {
        Self {
            name: name.into(),
            scheme,
            colors,
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            opacity: OpacityTokens::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn colors(mut self, colors: ColorTokens) -> Self {
        self.colors = colors;
        self
    }

    /// Replace a single color
    pub fn color(mut self, token: ColorToken, color: Color) -> Self {
        self.colors.set(token, color);
        self
    }

    pub fn typography(mut self, typography: TypographyTokens) -> Self {
        self.typography = typography;
        self
    }

    pub fn spacing(mut self, spacing: SpacingTokens) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn radii(mut self, radii: RadiusTokens) -> Self {
        self.radii = radii;
        self
    }

    pub fn opacity(mut self, opacity: OpacityTokens) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn build(self) -> Theme {
        let components = ComponentPresets::derive(&self.spacing, &self.radii, &self.typography);
        Theme {
            id: ThemeId::next(),
            name: self.name,
            scheme: self.scheme,
            colors: self.colors,
            typography: self.typography,
            spacing: self.spacing,
            radii: self.radii,
            opacity: self.opacity,
            components,
        }
    }
}

/// A light/dark pair of themes
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    name: String,
    light: Arc<Theme>,
    dark: Arc<Theme>,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: Theme, dark: Theme) -> Self {
        Self::from_arcs(name, Arc::new(light), Arc::new(dark))
    }

    /// Bundle already shared themes (canonical instances keep their ids).
    ///
    /// Each slot must hold a theme of its own scheme.
    pub fn from_arcs(name: impl Into<String>, light: Arc<Theme>, dark: Arc<Theme>) -> Self {
        debug_assert_eq!(light.scheme(), ColorScheme::Light, "light slot: {}", light.name());
        debug_assert_eq!(dark.scheme(), ColorScheme::Dark, "dark slot: {}", dark.name());
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn light(&self) -> &Arc<Theme> {
        &self.light
    }

    pub fn dark(&self) -> &Arc<Theme> {
        &self.dark
    }

    /// Get the theme for a color scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Arc<Theme> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::lumen;

    #[test]
    fn test_ids_are_unique() {
        let a = lumen::light();
        let b = lumen::light();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn test_to_builder_derives_new_theme() {
        let base = lumen::light();
        let tinted = base
            .to_builder()
            .name("Tinted")
            .color(ColorToken::Primary, Color::from_hex(0xFF5500))
            .build();

        assert_ne!(base.id(), tinted.id());
        assert_eq!(tinted.name(), "Tinted");
        assert_eq!(tinted.color(ColorToken::Primary), Color::from_hex(0xFF5500));
        assert_eq!(tinted.color(ColorToken::Background), base.color(ColorToken::Background));
        assert_eq!(base.name(), "Lumen Light");
    }

    #[test]
    fn test_components_follow_custom_radii() {
        let theme = lumen::light()
            .to_builder()
            .radii(RadiusTokens {
                md: 3.0,
                ..RadiusTokens::default()
            })
            .build();
        assert_eq!(theme.components().button.medium.radius, 3.0);
    }

    #[test]
    fn test_serializes_tokens() {
        let json = serde_json::to_value(lumen::dark()).unwrap();
        assert_eq!(json["name"], "Lumen Dark");
        assert_eq!(json["scheme"], "dark");
        assert_eq!(json["colors"]["primary"], "#60a5fa");
        assert_eq!(json["typography"]["h1"]["font_weight"], "bold");
        assert_eq!(json["spacing"]["general"]["md"], 12.0);
        assert!(json.get("id").is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "light slot")]
    fn test_bundle_rejects_swapped_slots() {
        ThemeBundle::new("Swapped", lumen::dark(), lumen::light());
    }

    #[test]
    fn test_bundle_for_scheme() {
        let bundle = lumen::bundle();
        assert_eq!(bundle.for_scheme(ColorScheme::Light).scheme(), ColorScheme::Light);
        assert_eq!(bundle.for_scheme(ColorScheme::Dark).scheme(), ColorScheme::Dark);
        assert!(Arc::ptr_eq(bundle.for_scheme(ColorScheme::Dark), bundle.dark()));
    }
}
