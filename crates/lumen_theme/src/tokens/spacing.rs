//! Spacing tokens for theming
//!
//! A theme carries three spacing scales: a general one and separate
//! horizontal / vertical scales that can be tuned to the viewport.

use serde::Serialize;

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    None,
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

impl_variant!(SpacingToken, axis: "spacing token", fallback: SpacingToken::Md, {
    SpacingToken::None => "none",
    SpacingToken::Xxs => "xxs",
    SpacingToken::Xs => "xs",
    SpacingToken::Sm => "sm",
    SpacingToken::Md => "md",
    SpacingToken::Lg => "lg",
    SpacingToken::Xl => "xl",
    SpacingToken::Xxl => "xxl",
    SpacingToken::Xxxl => "xxxl",
});

/// One spacing scale (values in points)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpacingScale {
    pub none: f32,
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

impl SpacingScale {
    /// Build a scale from a 4pt base unit
    pub fn with_base(base: f32) -> Self {
        Self {
            none: 0.0,
            xxs: base * 0.5,
            xs: base,
            sm: base * 2.0,
            md: base * 3.0,
            lg: base * 4.0,
            xl: base * 6.0,
            xxl: base * 8.0,
            xxxl: base * 12.0,
        }
    }

    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::None => self.none,
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
        }
    }

    /// Multiply every step, rounding to half points
    pub fn scaled(&self, factor: f32) -> Self {
        let s = |v: f32| (v * factor * 2.0).round() / 2.0;
        Self {
            none: 0.0,
            xxs: s(self.xxs),
            xs: s(self.xs),
            sm: s(self.sm),
            md: s(self.md),
            lg: s(self.lg),
            xl: s(self.xl),
            xxl: s(self.xxl),
            xxxl: s(self.xxxl),
        }
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self::with_base(4.0)
    }
}

/// Reference viewport the default scales are designed for
pub const REFERENCE_VIEWPORT: (f32, f32) = (375.0, 812.0);

/// Spacing scales for a theme
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SpacingTokens {
    pub general: SpacingScale,
    pub horizontal: SpacingScale,
    pub vertical: SpacingScale,
}

impl SpacingTokens {
    /// Scales adjusted to a viewport size.
    ///
    /// Horizontal spacing follows width and vertical spacing follows height,
    /// each relative to [`REFERENCE_VIEWPORT`] and clamped to `0.85..=1.3`.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let (ref_w, ref_h) = REFERENCE_VIEWPORT;
        let factor = |v: f32, reference: f32| {
            if v.is_finite() && v > 0.0 {
                (v / reference).clamp(0.85, 1.3)
            } else {
                1.0
            }
        };
        let base = SpacingScale::default();
        Self {
            general: base,
            horizontal: base.scaled(factor(width, ref_w)),
            vertical: base.scaled(factor(height, ref_h)),
        }
    }

    pub fn get(&self, token: SpacingToken) -> f32 {
        self.general.get(token)
    }
}
