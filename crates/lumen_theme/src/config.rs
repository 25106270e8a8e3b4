//! Theme configuration file handling
//!
//! ```toml
//! preset = "ocean"
//! color_scheme = "auto"
//!
//! [overrides.light]
//! primary = "#FF5500"
//!
//! [overrides.dark]
//! primary = "#FFA366"
//! on_primary = "#000"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use lumen_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::presets::ThemePreset;
use crate::provider::ThemeProvider;
use crate::scheme::{Appearance, ColorScheme, SchemeSelection};
use crate::theme::{Theme, ThemeBundle};
use crate::tokens::ColorToken;
use crate::variants::Variant;

/// Environment variable selecting the preset
pub const PRESET_ENV: &str = "LUMEN_THEME_PRESET";
/// Environment variable selecting light, dark or auto
pub const COLOR_SCHEME_ENV: &str = "LUMEN_COLOR_SCHEME";

/// Top-level theme configuration (lumen.toml)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub preset: ThemePreset,
    #[serde(default)]
    pub color_scheme: SchemeSelection,
    #[serde(default)]
    pub overrides: ColorOverrides,
}

/// Per-scheme color overrides, token name to hex color
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ColorOverrides {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub light: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dark: BTreeMap<String, String>,
}

impl ColorOverrides {
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &BTreeMap<String, String> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// Parse the overrides for one scheme
    pub fn parsed(&self, scheme: ColorScheme) -> Result<Vec<(ColorToken, Color)>> {
        self.for_scheme(scheme)
            .iter()
            .map(|(name, value)| {
                let token = ColorToken::parse(name)?;
                let color = Color::parse_hex(value).map_err(|source| ThemeError::InvalidColor {
                    token: name.clone(),
                    source,
                })?;
                Ok((token, color))
            })
            .collect()
    }
}

impl ThemeConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("loaded theme config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply `LUMEN_THEME_PRESET` and `LUMEN_COLOR_SCHEME`
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// [`ThemeConfig::apply_env`] with an explicit variable lookup.
    ///
    /// Invalid values are logged and ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PRESET_ENV) {
            match ThemePreset::parse(&value) {
                Ok(preset) => self.preset = preset,
                Err(err) => tracing::warn!("ignoring {}: {}", PRESET_ENV, err),
            }
        }
        if let Some(value) = lookup(COLOR_SCHEME_ENV) {
            match SchemeSelection::parse(&value) {
                Ok(selection) => self.color_scheme = selection,
                Err(err) => tracing::warn!("ignoring {}: {}", COLOR_SCHEME_ENV, err),
            }
        }
    }

    /// The preset bundle with overrides applied.
    ///
    /// Without overrides this is the preset's canonical bundle. A scheme with
    /// overrides gets a newly built theme (and so a new theme id).
    pub fn bundle(&self) -> Result<ThemeBundle> {
        let base = self.preset.bundle();
        if self.overrides.is_empty() {
            return Ok(base);
        }

        let light = self.apply_overrides(base.light(), ColorScheme::Light)?;
        let dark = self.apply_overrides(base.dark(), ColorScheme::Dark)?;
        Ok(ThemeBundle::from_arcs(
            format!("{} (custom)", base.name()),
            light,
            dark,
        ))
    }

    fn apply_overrides(&self, theme: &Arc<Theme>, scheme: ColorScheme) -> Result<Arc<Theme>> {
        let overrides = self.overrides.parsed(scheme)?;
        if overrides.is_empty() {
            return Ok(theme.clone());
        }

        tracing::debug!("applying {} color overrides to {}", overrides.len(), theme.name());
        let builder = overrides
            .into_iter()
            .fold(theme.to_builder(), |builder, (token, color)| {
                builder.color(token, color)
            });
        Ok(Arc::new(builder.build()))
    }

    /// A provider for this configuration
    pub fn into_provider(self, appearance: Appearance) -> Result<ThemeProvider> {
        Ok(ThemeProvider::builder()
            .bundle(self.bundle()?)
            .selection(self.color_scheme)
            .appearance(appearance)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.preset, ThemePreset::Lumen);
        assert_eq!(config.color_scheme, SchemeSelection::Auto);
    }

    #[test]
    fn test_parse_full_config() {
        let config = ThemeConfig::from_toml_str(
            r##"
            preset = "forest"
            color_scheme = "dark"

            [overrides.dark]
            primary = "#FF5500"
            "##,
        )
        .unwrap();
        assert_eq!(config.preset, ThemePreset::Forest);
        assert_eq!(config.color_scheme, SchemeSelection::Dark);
        assert_eq!(
            config.overrides.parsed(ColorScheme::Dark).unwrap(),
            vec![(ColorToken::Primary, Color::from_hex(0xFF5500))]
        );
        assert!(config.overrides.light.is_empty());
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let config = ThemeConfig::from_toml_str(
            r#"
            preset = "Ocean"
            color_scheme = "DARK"
            "#,
        )
        .unwrap();
        assert_eq!(config.preset, ThemePreset::Ocean);
        assert_eq!(config.color_scheme, SchemeSelection::Dark);
    }

    #[test]
    fn test_unknown_preset_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str(r#"preset = "solarized""#).unwrap_err();
        assert!(matches!(err, ThemeError::ConfigParse(_)));
        assert!(err.to_string().contains("solarized"), "{err}");
    }

    #[test]
    fn test_bad_override_reports_token() {
        let mut config = ThemeConfig::default();
        config
            .overrides
            .light
            .insert("primary".to_string(), "#GG0000".to_string());
        match config.bundle().unwrap_err() {
            ThemeError::InvalidColor { token, .. } => assert_eq!(token, "primary"),
            other => panic!("unexpected error: {other:?}"),
        }

        let mut config = ThemeConfig::default();
        config
            .overrides
            .dark
            .insert("sparkle".to_string(), "#000".to_string());
        assert!(matches!(
            config.bundle().unwrap_err(),
            ThemeError::UnknownVariant { .. }
        ));
    }

    #[test]
    fn test_overrides_build_new_themes() {
        let mut config = ThemeConfig::default();
        config
            .overrides
            .light
            .insert("primary".to_string(), "#FF5500".to_string());

        let base = ThemePreset::Lumen.bundle();
        let bundle = config.bundle().unwrap();
        assert_ne!(bundle.light().id(), base.light().id());
        assert_eq!(bundle.light().color(ColorToken::Primary), Color::from_hex(0xFF5500));
        // Untouched scheme keeps the canonical theme.
        assert!(Arc::ptr_eq(bundle.dark(), base.dark()));
    }

    #[test]
    fn test_apply_env() {
        let mut config = ThemeConfig::default();
        config.apply_env_with(|key| match key {
            PRESET_ENV => Some("Ocean".to_string()),
            COLOR_SCHEME_ENV => Some("bogus".to_string()),
            _ => None,
        });
        assert_eq!(config.preset, ThemePreset::Ocean);
        assert_eq!(config.color_scheme, SchemeSelection::Auto);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ThemeConfig {
            preset: ThemePreset::Ocean,
            color_scheme: SchemeSelection::Light,
            ..ThemeConfig::default()
        };
        config
            .overrides
            .dark
            .insert("background".to_string(), "#101010".to_string());

        let text = config.to_toml().unwrap();
        assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_into_provider() {
        let config = ThemeConfig {
            preset: ThemePreset::Forest,
            color_scheme: SchemeSelection::Auto,
            ..ThemeConfig::default()
        };
        let provider = config.into_provider(Appearance::Dark).unwrap();
        assert!(provider.is_dark());
        assert_eq!(provider.theme().name(), "Forest Dark");
    }
}
