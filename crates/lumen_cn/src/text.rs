//! Text component
//!
//! Renders a string in one step of the theme's type scale.
//!
//! # Example
//!
//! ```
//! use lumen_cn::prelude::*;
//!
//! let scope = ThemeScope::with_provider(ThemeProvider::default());
//! let view = cn::text("Settings")
//!     .variant(TextVariant::H2)
//!     .render(&scope)?;
//! assert_eq!(view.style.font_size, 28.0);
//! # Ok::<(), ThemeError>(())
//! ```

use lumen_core::Color;
use lumen_theme::{ColorToken, TextStyle, TextVariant, Theme, ThemeScope, Variant};

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Text component
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    content: String,
    variant: TextVariant,
    color: Option<ColorToken>,
    align: TextAlign,
    max_lines: Option<u32>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TextVariant::Body1,
            color: None,
            align: TextAlign::default(),
            max_lines: None,
        }
    }

    /// Set the type scale step
    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the type scale step by name; unknown names fall back to body1
    pub fn variant_named(self, name: &str) -> Self {
        self.variant(TextVariant::parse_or_fallback(name))
    }

    /// Override the color role
    pub fn color(mut self, token: ColorToken) -> Self {
        self.color = Some(token);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Truncate after `lines` lines (0 means unlimited)
    pub fn max_lines(mut self, lines: u32) -> Self {
        self.max_lines = (lines > 0).then_some(lines);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn current_variant(&self) -> TextVariant {
        self.variant
    }

    /// Color role used when none is set
    pub fn default_color(variant: TextVariant) -> ColorToken {
        match variant {
            TextVariant::Caption | TextVariant::Overline => ColorToken::TextSecondary,
            _ => ColorToken::Text,
        }
    }

    /// Resolve against a theme
    pub fn resolve(&self, theme: &Theme) -> TextView {
        let style = *theme.text_style(self.variant);
        let token = self.color.unwrap_or_else(|| Self::default_color(self.variant));
        let content = if style.uppercase {
            self.content.to_uppercase()
        } else {
            self.content.clone()
        };

        TextView {
            content,
            font_family: theme.typography().font_family.clone(),
            style,
            color: theme.color(token),
            align: self.align,
            max_lines: self.max_lines,
        }
    }

    /// Resolve against the active theme of `scope`
    pub fn render(&self, scope: &ThemeScope) -> lumen_theme::Result<TextView> {
        let ctx = scope.use_theme()?;
        Ok(self.resolve(ctx.theme()))
    }
}

/// A resolved text description for the host renderer
#[derive(Clone, Debug, PartialEq)]
pub struct TextView {
    pub content: String,
    pub font_family: String,
    pub style: TextStyle,
    pub color: Color,
    pub align: TextAlign,
    pub max_lines: Option<u32>,
}
