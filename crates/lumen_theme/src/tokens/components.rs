//! Component presets derived from the base tokens
//!
//! These are computed once when a theme is built so that components do not
//! repeat the same spacing/radius/typography arithmetic on every render.

use serde::Serialize;

use super::{RadiusTokens, SpacingTokens, TextVariant, TypographyTokens};
use crate::variants::ButtonSize;

/// Metrics for one button size
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ButtonSizePreset {
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub min_height: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub radius: f32,
    /// Gap between spinner / icon and label
    pub gap: f32,
    pub spinner_size: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonPresets {
    pub small: ButtonSizePreset,
    pub medium: ButtonSizePreset,
    pub large: ButtonSizePreset,
}

impl ButtonPresets {
    pub fn get(&self, size: ButtonSize) -> &ButtonSizePreset {
        match size {
            ButtonSize::Small => &self.small,
            ButtonSize::Medium => &self.medium,
            ButtonSize::Large => &self.large,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InputPreset {
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub min_height: f32,
    pub radius: f32,
    pub border_width: f32,
    pub font_size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CardPreset {
    pub padding: f32,
    pub radius: f32,
    pub gap: f32,
}

/// Presets for every themed component
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComponentPresets {
    pub button: ButtonPresets,
    pub input: InputPreset,
    pub card: CardPreset,
}

impl ComponentPresets {
    pub fn derive(
        spacing: &SpacingTokens,
        radii: &RadiusTokens,
        typography: &TypographyTokens,
    ) -> Self {
        let h = &spacing.horizontal;
        let v = &spacing.vertical;
        let label = typography.get(TextVariant::Button);

        let button = |padding_h: f32, padding_v: f32, font_scale: f32, radius: f32| {
            let font_size = label.font_size * font_scale;
            let line_height = label.line_height * font_scale;
            ButtonSizePreset {
                padding_horizontal: padding_h,
                padding_vertical: padding_v,
                min_height: line_height + padding_v * 2.0,
                font_size,
                line_height,
                radius,
                gap: spacing.general.xs * font_scale.max(1.0),
                spinner_size: font_size,
            }
        };

        Self {
            button: ButtonPresets {
                small: button(h.md, v.xs, 0.85, radii.sm),
                medium: button(h.lg, v.sm + v.xxs, 1.0, radii.md),
                large: button(h.xl, v.md, 1.15, radii.md),
            },
            input: InputPreset {
                padding_horizontal: h.md,
                padding_vertical: v.sm + v.xxs,
                min_height: typography.body1.line_height + (v.sm + v.xxs) * 2.0,
                radius: radii.md,
                border_width: 1.0,
                font_size: typography.body1.font_size,
            },
            card: CardPreset {
                padding: spacing.general.lg,
                radius: radii.lg,
                gap: spacing.general.md,
            },
        }
    }
}

impl Default for ComponentPresets {
    fn default() -> Self {
        Self::derive(
            &SpacingTokens::default(),
            &RadiusTokens::default(),
            &TypographyTokens::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_sizes_grow() {
        let presets = ComponentPresets::default();
        let b = &presets.button;
        assert!(b.small.min_height < b.medium.min_height);
        assert!(b.medium.min_height < b.large.min_height);
        assert!(b.small.font_size < b.large.font_size);
        // 20 line height + 2 * 10 padding
        assert_eq!(b.medium.min_height, 40.0);
    }

    #[test]
    fn test_presets_follow_radius_tokens() {
        let radii = RadiusTokens {
            md: 20.0,
            ..RadiusTokens::default()
        };
        let presets = ComponentPresets::derive(
            &SpacingTokens::default(),
            &radii,
            &TypographyTokens::default(),
        );
        assert_eq!(presets.button.get(ButtonSize::Medium).radius, 20.0);
        assert_eq!(presets.input.radius, 20.0);
    }
}
