//! Border radius tokens for theming

use serde::Serialize;

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Full,
}

impl_variant!(RadiusToken, axis: "radius token", fallback: RadiusToken::Md, {
    RadiusToken::None => "none",
    RadiusToken::Xs => "xs",
    RadiusToken::Sm => "sm",
    RadiusToken::Md => "md",
    RadiusToken::Lg => "lg",
    RadiusToken::Xl => "xl",
    RadiusToken::Xxl => "xxl",
    RadiusToken::Full => "full",
});

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadiusTokens {
    pub none: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    /// Pill / circle
    pub full: f32,
}

impl RadiusTokens {
    /// Get radius value by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Xs => self.xs,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Xxl => self.xxl,
            RadiusToken::Full => self.full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            xs: 2.0,
            sm: 4.0,
            md: 8.0,
            lg: 12.0,
            xl: 16.0,
            xxl: 24.0,
            full: 9999.0,
        }
    }
}
