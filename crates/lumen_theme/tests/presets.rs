use std::sync::Arc;

use lumen_theme::{ColorScheme, ColorToken, RadiusToken, TextVariant, ThemePreset, Variant};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["forest", "lumen", "ocean"]);
}

#[test]
fn bundles_have_distinct_light_and_dark_primary() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        let light = bundle.for_scheme(ColorScheme::Light);
        let dark = bundle.for_scheme(ColorScheme::Dark);

        assert_ne!(
            light.colors().get(ColorToken::Primary),
            dark.colors().get(ColorToken::Primary),
            "Preset {:?} should have distinct light/dark primary colors",
            preset
        );
        assert_eq!(light.scheme(), ColorScheme::Light);
        assert_eq!(dark.scheme(), ColorScheme::Dark);
    }
}

#[test]
fn preset_bundles_are_canonical() {
    for preset in ThemePreset::all() {
        let a = preset.bundle();
        let b = preset.bundle();
        assert!(Arc::ptr_eq(a.light(), b.light()), "{preset:?}");
        assert!(Arc::ptr_eq(a.dark(), b.dark()), "{preset:?}");
    }
}

#[test]
fn preset_themes_are_fully_populated() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        for scheme in ColorScheme::all() {
            let theme = bundle.for_scheme(*scheme);
            for token in ColorToken::all() {
                // Overlay and the muted primary are the only translucent roles.
                if *token != ColorToken::Overlay && *token != ColorToken::PrimaryMuted {
                    assert_eq!(theme.color(*token).a, 1.0, "{} {token}", theme.name());
                }
            }
            for variant in TextVariant::all() {
                assert!(theme.text_style(*variant).font_size > 0.0);
            }
            assert!(theme.radius(RadiusToken::Full) > theme.radius(RadiusToken::Xxl));
        }
    }
}

#[test]
fn distinct_presets_have_distinct_theme_ids() {
    let mut ids = Vec::new();
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        ids.push(bundle.light().id());
        ids.push(bundle.dark().id());
    }
    let count = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), count);
}
