//! Color tokens for theming

use lumen_core::Color;
use serde::Serialize;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColorToken {
    // Brand colors
    Primary,
    OnPrimary,
    PrimaryMuted,
    Secondary,
    OnSecondary,

    // Status colors
    Success,
    OnSuccess,
    Warning,
    OnWarning,
    Error,
    OnError,
    Info,
    OnInfo,

    // Surfaces
    Background,
    Surface,
    SurfaceVariant,

    // Text
    Text,
    TextSecondary,
    TextDisabled,
    TextInverse,

    // Lines
    Border,
    Divider,

    // States
    Disabled,
    Overlay,
}

impl_variant!(ColorToken, axis: "color token", fallback: ColorToken::Text, {
    ColorToken::Primary => "primary",
    ColorToken::OnPrimary => "on_primary",
    ColorToken::PrimaryMuted => "primary_muted",
    ColorToken::Secondary => "secondary",
    ColorToken::OnSecondary => "on_secondary",
    ColorToken::Success => "success",
    ColorToken::OnSuccess => "on_success",
    ColorToken::Warning => "warning",
    ColorToken::OnWarning => "on_warning",
    ColorToken::Error => "error",
    ColorToken::OnError => "on_error",
    ColorToken::Info => "info",
    ColorToken::OnInfo => "on_info",
    ColorToken::Background => "background",
    ColorToken::Surface => "surface",
    ColorToken::SurfaceVariant => "surface_variant",
    ColorToken::Text => "text",
    ColorToken::TextSecondary => "text_secondary",
    ColorToken::TextDisabled => "text_disabled",
    ColorToken::TextInverse => "text_inverse",
    ColorToken::Border => "border",
    ColorToken::Divider => "divider",
    ColorToken::Disabled => "disabled",
    ColorToken::Overlay => "overlay",
});

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorTokens {
    // Brand colors
    pub primary: Color,
    pub on_primary: Color,
    /// Translucent primary for subtle fills. Its alpha also sets the pressed
    /// fill of outline and ghost buttons in every color role.
    pub primary_muted: Color,
    pub secondary: Color,
    pub on_secondary: Color,

    // Status colors
    pub success: Color,
    pub on_success: Color,
    pub warning: Color,
    pub on_warning: Color,
    pub error: Color,
    pub on_error: Color,
    pub info: Color,
    pub on_info: Color,

    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub surface_variant: Color,

    // Text
    pub text: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub text_inverse: Color,

    // Lines
    pub border: Color,
    pub divider: Color,

    // States
    /// Fill for disabled controls
    pub disabled: Color,
    /// Scrim behind modals and sheets
    pub overlay: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::OnPrimary => self.on_primary,
            ColorToken::PrimaryMuted => self.primary_muted,
            ColorToken::Secondary => self.secondary,
            ColorToken::OnSecondary => self.on_secondary,
            ColorToken::Success => self.success,
            ColorToken::OnSuccess => self.on_success,
            ColorToken::Warning => self.warning,
            ColorToken::OnWarning => self.on_warning,
            ColorToken::Error => self.error,
            ColorToken::OnError => self.on_error,
            ColorToken::Info => self.info,
            ColorToken::OnInfo => self.on_info,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceVariant => self.surface_variant,
            ColorToken::Text => self.text,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextDisabled => self.text_disabled,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::Border => self.border,
            ColorToken::Divider => self.divider,
            ColorToken::Disabled => self.disabled,
            ColorToken::Overlay => self.overlay,
        }
    }

    /// Replace a single color by token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        let slot = match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::OnPrimary => &mut self.on_primary,
            ColorToken::PrimaryMuted => &mut self.primary_muted,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::OnSecondary => &mut self.on_secondary,
            ColorToken::Success => &mut self.success,
            ColorToken::OnSuccess => &mut self.on_success,
            ColorToken::Warning => &mut self.warning,
            ColorToken::OnWarning => &mut self.on_warning,
            ColorToken::Error => &mut self.error,
            ColorToken::OnError => &mut self.on_error,
            ColorToken::Info => &mut self.info,
            ColorToken::OnInfo => &mut self.on_info,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::SurfaceVariant => &mut self.surface_variant,
            ColorToken::Text => &mut self.text,
            ColorToken::TextSecondary => &mut self.text_secondary,
            ColorToken::TextDisabled => &mut self.text_disabled,
            ColorToken::TextInverse => &mut self.text_inverse,
            ColorToken::Border => &mut self.border,
            ColorToken::Divider => &mut self.divider,
            ColorToken::Disabled => &mut self.disabled,
            ColorToken::Overlay => &mut self.overlay,
        };
        *slot = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::Variant;

    #[test]
    fn test_set_then_get_every_token() {
        let mut colors = crate::themes::lumen::light_colors();
        for (i, token) in ColorToken::all().iter().enumerate() {
            let marker = Color::rgb8(i as u8, 0, 0);
            colors.set(*token, marker);
            assert_eq!(colors.get(*token), marker, "{token}");
        }
    }

    #[test]
    fn test_token_names_parse_back() {
        for token in ColorToken::all() {
            assert_eq!(token.name().parse::<ColorToken>().unwrap(), *token);
        }
    }
}
