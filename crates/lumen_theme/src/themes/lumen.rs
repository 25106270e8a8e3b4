//! Default Lumen theme
//!
//! A blue primary on slate neutrals. The light scheme uses the 50-900 slate
//! ramp directly; the dark scheme inverts it and lifts the accents so that
//! labels keep at least 4.5:1 contrast on their fills.

use lumen_core::Color;

use crate::scheme::ColorScheme;
use crate::theme::{Theme, ThemeBundle};
use crate::tokens::ColorTokens;

/// Slate neutrals
pub mod slate {
    use lumen_core::Color;

    pub const S50: Color = Color::from_hex(0xF8FAFC);
    pub const S100: Color = Color::from_hex(0xF1F5F9);
    pub const S200: Color = Color::from_hex(0xE2E8F0);
    pub const S300: Color = Color::from_hex(0xCBD5E1);
    pub const S400: Color = Color::from_hex(0x94A3B8);
    pub const S500: Color = Color::from_hex(0x64748B);
    pub const S600: Color = Color::from_hex(0x475569);
    pub const S700: Color = Color::from_hex(0x334155);
    pub const S800: Color = Color::from_hex(0x1E293B);
    pub const S900: Color = Color::from_hex(0x0F172A);
    pub const S950: Color = Color::from_hex(0x020617);
}

/// Accent colors
pub mod accents {
    use lumen_core::Color;

    pub const BLUE_600: Color = Color::from_hex(0x2563EB);
    pub const BLUE_400: Color = Color::from_hex(0x60A5FA);
    pub const VIOLET_600: Color = Color::from_hex(0x7C3AED);
    pub const VIOLET_400: Color = Color::from_hex(0xA78BFA);
    pub const GREEN_700: Color = Color::from_hex(0x15803D);
    pub const GREEN_400: Color = Color::from_hex(0x4ADE80);
    pub const AMBER_500: Color = Color::from_hex(0xF59E0B);
    pub const AMBER_300: Color = Color::from_hex(0xFCD34D);
    pub const RED_600: Color = Color::from_hex(0xDC2626);
    pub const RED_400: Color = Color::from_hex(0xF87171);
    pub const SKY_700: Color = Color::from_hex(0x0369A1);
    pub const SKY_400: Color = Color::from_hex(0x38BDF8);
}

pub fn light_colors() -> ColorTokens {
    use accents::*;
    use slate::*;

    ColorTokens {
        primary: BLUE_600,
        on_primary: Color::WHITE,
        primary_muted: BLUE_600.with_alpha(0.12),
        secondary: VIOLET_600,
        on_secondary: Color::WHITE,

        success: GREEN_700,
        on_success: Color::WHITE,
        warning: AMBER_500,
        on_warning: S900,
        error: RED_600,
        on_error: Color::WHITE,
        info: SKY_700,
        on_info: Color::WHITE,

        background: Color::WHITE,
        surface: S50,
        surface_variant: S100,

        text: S900,
        text_secondary: S600,
        text_disabled: S400,
        text_inverse: Color::WHITE,

        border: S300,
        divider: S200,

        disabled: S200,
        overlay: S950.with_alpha(0.5),
    }
}

pub fn dark_colors() -> ColorTokens {
    use accents::*;
    use slate::*;

    ColorTokens {
        primary: BLUE_400,
        on_primary: S950,
        primary_muted: BLUE_400.with_alpha(0.16),
        secondary: VIOLET_400,
        on_secondary: S950,

        success: GREEN_400,
        on_success: S950,
        warning: AMBER_300,
        on_warning: S950,
        error: RED_400,
        on_error: S950,
        info: SKY_400,
        on_info: S950,

        background: S950,
        surface: S900,
        surface_variant: S800,

        text: S50,
        text_secondary: S400,
        text_disabled: S600,
        text_inverse: S900,

        border: S700,
        divider: S800,

        disabled: S800,
        overlay: Color::BLACK.with_alpha(0.6),
    }
}

/// A fresh light theme (new id on every call)
pub fn light() -> Theme {
    Theme::builder("Lumen Light", ColorScheme::Light, light_colors()).build()
}

/// A fresh dark theme (new id on every call)
pub fn dark() -> Theme {
    Theme::builder("Lumen Dark", ColorScheme::Dark, dark_colors()).build()
}

/// A fresh light/dark bundle
pub fn bundle() -> ThemeBundle {
    ThemeBundle::new("Lumen", light(), dark())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ColorToken;
    use crate::variants::ButtonColor;
    use crate::variants::Variant;

    #[test]
    fn test_on_colors_are_readable() {
        for colors in [light_colors(), dark_colors()] {
            for role in ButtonColor::all() {
                let (main, on) = role.tokens();
                let ratio = colors.get(main).contrast_ratio(&colors.get(on));
                assert!(ratio >= 3.0, "{role}: {ratio}");
            }
        }
    }

    #[test]
    fn test_text_contrast_on_background() {
        for colors in [light_colors(), dark_colors()] {
            let ratio = colors
                .get(ColorToken::Text)
                .contrast_ratio(&colors.get(ColorToken::Background));
            assert!(ratio >= 7.0, "{ratio}");
        }
    }
}
