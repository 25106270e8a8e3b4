//! Built-in theme presets.
//!
//! Each preset has one canonical light/dark pair per process. Non-default
//! presets are generated from a small seed palette; the `on_*` colors are
//! picked for contrast rather than hand-tuned.

use std::sync::{Arc, OnceLock};

use lumen_core::Color;
use serde::Serialize;

use crate::scheme::ColorScheme;
use crate::theme::{Theme, ThemeBundle};
use crate::themes;
use crate::tokens::*;
use crate::variants::Variant;

/// Named light/dark theme families shipped with Lumen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// Blue on slate (the default themes)
    #[default]
    Lumen,
    /// Teal on cool grays
    Ocean,
    /// Green on warm stone
    Forest,
}

impl_variant!(ThemePreset, axis: "theme preset", fallback: ThemePreset::Lumen, {
    ThemePreset::Lumen => "lumen",
    ThemePreset::Ocean => "ocean",
    ThemePreset::Forest => "forest",
});

impl ThemePreset {
    /// Lowercase key used in `lumen.toml` and `LUMEN_THEME_PRESET`
    pub fn id(self) -> &'static str {
        self.name()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemePreset::Lumen => "Lumen",
            ThemePreset::Ocean => "Ocean",
            ThemePreset::Forest => "Forest",
        }
    }

    pub fn all() -> &'static [ThemePreset] {
        <Self as Variant>::all()
    }

    /// Shared light/dark pair; repeated calls hand out the same `Arc`s
    pub fn bundle(self) -> ThemeBundle {
        static OCEAN: OnceLock<ThemeBundle> = OnceLock::new();
        static FOREST: OnceLock<ThemeBundle> = OnceLock::new();

        match self {
            ThemePreset::Lumen => themes::standard_bundle(),
            ThemePreset::Ocean => OCEAN.get_or_init(|| seeded_bundle("Ocean", &OCEAN_SEEDS)).clone(),
            ThemePreset::Forest => {
                FOREST.get_or_init(|| seeded_bundle("Forest", &FOREST_SEEDS)).clone()
            }
        }
    }
}

pub fn preset_bundle(preset: ThemePreset) -> ThemeBundle {
    preset.bundle()
}

/// The hand-picked colors a generated theme starts from
struct Seed {
    paper: Color,
    ink: Color,
    ink_soft: Color,
    raised: Color,
    accent: Color,
    accent_alt: Color,
    rule: Color,
    danger: Color,
}

/// Status hues shared by every generated preset, as `[light, dark]`
const STATUS_SUCCESS: [u32; 2] = [0x15803D, 0x4ADE80];
const STATUS_WARNING: [u32; 2] = [0xD97706, 0xFBBF24];
const STATUS_INFO: [u32; 2] = [0x0369A1, 0x38BDF8];

fn seeded_bundle(family: &str, seeds: &[Seed; 2]) -> ThemeBundle {
    let [light, dark] = seeds;
    let make = |scheme: ColorScheme, seed: &Seed| {
        let name = format!("{family} {}", if scheme.is_dark() { "Dark" } else { "Light" });
        Arc::new(Theme::builder(name, scheme, seed_colors(seed, scheme)).build())
    };
    ThemeBundle::from_arcs(
        family,
        make(ColorScheme::Light, light),
        make(ColorScheme::Dark, dark),
    )
}

fn seed_colors(seed: &Seed, scheme: ColorScheme) -> ColorTokens {
    let slot = scheme.is_dark() as usize;
    let status = |hues: [u32; 2]| Color::from_hex(hues[slot]);
    let (success, warning, info) = (
        status(STATUS_SUCCESS),
        status(STATUS_WARNING),
        status(STATUS_INFO),
    );
    // Surfaces shift toward black in light mode and toward white in dark mode
    let shade = if scheme.is_dark() { Color::WHITE } else { Color::BLACK };
    let mix = |a: Color, b: Color, t: f32| Color::lerp(&a, &b, t);

    ColorTokens {
        primary: seed.accent,
        on_primary: seed.accent.readable_foreground(),
        primary_muted: seed.accent.with_alpha(if scheme.is_dark() { 0.16 } else { 0.12 }),
        secondary: seed.accent_alt,
        on_secondary: seed.accent_alt.readable_foreground(),
        success,
        on_success: success.readable_foreground(),
        warning,
        on_warning: warning.readable_foreground(),
        error: seed.danger,
        on_error: seed.danger.readable_foreground(),
        info,
        on_info: info.readable_foreground(),
        background: seed.paper,
        surface: seed.raised,
        surface_variant: mix(seed.raised, shade, 0.04),
        text: seed.ink,
        text_secondary: seed.ink_soft,
        text_disabled: mix(seed.ink_soft, seed.paper, 0.4),
        text_inverse: seed.paper,
        border: seed.rule,
        divider: mix(seed.rule, seed.paper, 0.4),
        disabled: mix(seed.rule, seed.paper, 0.3),
        overlay: Color::BLACK.with_alpha(0.5),
    }
}

const OCEAN_SEEDS: [Seed; 2] = [
    Seed {
        paper: Color::from_hex(0xFFFFFF),
        ink: Color::from_hex(0x0C1A24),
        ink_soft: Color::from_hex(0x52616B),
        raised: Color::from_hex(0xF3F8FA),
        accent: Color::from_hex(0x0E7490),
        accent_alt: Color::from_hex(0x4F46E5),
        rule: Color::from_hex(0xD3DEE4),
        danger: Color::from_hex(0xDC2626),
    },
    Seed {
        paper: Color::from_hex(0x071318),
        ink: Color::from_hex(0xE6F1F5),
        ink_soft: Color::from_hex(0x8EA3AE),
        raised: Color::from_hex(0x0E1F26),
        accent: Color::from_hex(0x22D3EE),
        accent_alt: Color::from_hex(0x818CF8),
        rule: Color::from_hex(0x1F3640),
        danger: Color::from_hex(0xF87171),
    },
];

const FOREST_SEEDS: [Seed; 2] = [
    Seed {
        paper: Color::from_hex(0xFFFEFB),
        ink: Color::from_hex(0x1C1917),
        ink_soft: Color::from_hex(0x6B645C),
        raised: Color::from_hex(0xF7F5F0),
        accent: Color::from_hex(0x166534),
        accent_alt: Color::from_hex(0x92400E),
        rule: Color::from_hex(0xE2DED6),
        danger: Color::from_hex(0xB91C1C),
    },
    Seed {
        paper: Color::from_hex(0x0F110D),
        ink: Color::from_hex(0xF2F0EA),
        ink_soft: Color::from_hex(0xA39E94),
        raised: Color::from_hex(0x181B15),
        accent: Color::from_hex(0x4ADE80),
        accent_alt: Color::from_hex(0xFBBF24),
        rule: Color::from_hex(0x2C3027),
        danger: Color::from_hex(0xF87171),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_ids_parse_back() {
        for preset in ThemePreset::all() {
            assert_eq!(preset.id().parse::<ThemePreset>().unwrap(), *preset);
        }
        assert_eq!(ThemePreset::parse_or_fallback("solarized"), ThemePreset::Lumen);
    }

    #[test]
    fn test_generated_on_colors_are_readable() {
        for preset in [ThemePreset::Ocean, ThemePreset::Forest] {
            let bundle = preset.bundle();
            for theme in [bundle.light(), bundle.dark()] {
                let c = theme.colors();
                assert!(c.primary.contrast_ratio(&c.on_primary) >= 4.5, "{}", theme.name());
                assert!(c.text.contrast_ratio(&c.background) >= 7.0, "{}", theme.name());
            }
        }
    }
}
