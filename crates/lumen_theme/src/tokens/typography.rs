//! Typography tokens for theming
//!
//! A fixed mobile type scale. Sizes and line heights are density-independent
//! points; the host converts them to pixels.

use serde::Serialize;

/// Font weight
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// Numeric weight (CSS / platform scale)
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Named steps of the type scale
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Button,
    Caption,
    Overline,
}

impl_variant!(TextVariant, axis: "text variant", fallback: TextVariant::Body1, {
    TextVariant::H1 => "h1",
    TextVariant::H2 => "h2",
    TextVariant::H3 => "h3",
    TextVariant::H4 => "h4",
    TextVariant::H5 => "h5",
    TextVariant::H6 => "h6",
    TextVariant::Subtitle1 => "subtitle1",
    TextVariant::Subtitle2 => "subtitle2",
    TextVariant::Body1 => "body1",
    TextVariant::Body2 => "body2",
    TextVariant::Button => "button",
    TextVariant::Caption => "caption",
    TextVariant::Overline => "overline",
});

impl TextVariant {
    pub fn is_heading(self) -> bool {
        matches!(
            self,
            TextVariant::H1
                | TextVariant::H2
                | TextVariant::H3
                | TextVariant::H4
                | TextVariant::H5
                | TextVariant::H6
        )
    }
}

/// Resolved text style for one step of the scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
    pub font_weight: FontWeight,
    pub letter_spacing: f32,
    pub uppercase: bool,
}

impl TextStyle {
    pub const fn new(font_size: f32, line_height: f32, font_weight: FontWeight) -> Self {
        Self {
            font_size,
            line_height,
            font_weight,
            letter_spacing: 0.0,
            uppercase: false,
        }
    }

    pub const fn tracking(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    pub const fn upper(mut self) -> Self {
        self.uppercase = true;
        self
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypographyTokens {
    pub font_family: String,
    pub font_family_mono: String,

    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub h6: TextStyle,
    pub subtitle1: TextStyle,
    pub subtitle2: TextStyle,
    pub body1: TextStyle,
    pub body2: TextStyle,
    pub button: TextStyle,
    pub caption: TextStyle,
    pub overline: TextStyle,
}

impl TypographyTokens {
    /// Get the style for a text variant
    pub fn get(&self, variant: TextVariant) -> &TextStyle {
        match variant {
            TextVariant::H1 => &self.h1,
            TextVariant::H2 => &self.h2,
            TextVariant::H3 => &self.h3,
            TextVariant::H4 => &self.h4,
            TextVariant::H5 => &self.h5,
            TextVariant::H6 => &self.h6,
            TextVariant::Subtitle1 => &self.subtitle1,
            TextVariant::Subtitle2 => &self.subtitle2,
            TextVariant::Body1 => &self.body1,
            TextVariant::Body2 => &self.body2,
            TextVariant::Button => &self.button,
            TextVariant::Caption => &self.caption,
            TextVariant::Overline => &self.overline,
        }
    }

    /// Scale every size and line height (accessibility font scaling)
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |style: &TextStyle| TextStyle {
            font_size: style.font_size * factor,
            line_height: style.line_height * factor,
            ..*style
        };
        Self {
            font_family: self.font_family.clone(),
            font_family_mono: self.font_family_mono.clone(),
            h1: scale(&self.h1),
            h2: scale(&self.h2),
            h3: scale(&self.h3),
            h4: scale(&self.h4),
            h5: scale(&self.h5),
            h6: scale(&self.h6),
            subtitle1: scale(&self.subtitle1),
            subtitle2: scale(&self.subtitle2),
            body1: scale(&self.body1),
            body2: scale(&self.body2),
            button: scale(&self.button),
            caption: scale(&self.caption),
            overline: scale(&self.overline),
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "System".to_string(),
            font_family_mono: "Menlo".to_string(),
            h1: TextStyle::new(32.0, 40.0, FontWeight::Bold),
            h2: TextStyle::new(28.0, 36.0, FontWeight::Bold),
            h3: TextStyle::new(24.0, 32.0, FontWeight::Semibold),
            h4: TextStyle::new(20.0, 28.0, FontWeight::Semibold),
            h5: TextStyle::new(18.0, 24.0, FontWeight::Medium),
            h6: TextStyle::new(16.0, 22.0, FontWeight::Medium),
            subtitle1: TextStyle::new(16.0, 24.0, FontWeight::Medium),
            subtitle2: TextStyle::new(14.0, 20.0, FontWeight::Medium),
            body1: TextStyle::new(16.0, 24.0, FontWeight::Regular),
            body2: TextStyle::new(14.0, 20.0, FontWeight::Regular),
            button: TextStyle::new(15.0, 20.0, FontWeight::Semibold).tracking(0.3),
            caption: TextStyle::new(12.0, 16.0, FontWeight::Regular).tracking(0.2),
            overline: TextStyle::new(11.0, 16.0, FontWeight::Medium)
                .tracking(1.0)
                .upper(),
        }
    }
}
