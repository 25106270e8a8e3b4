//! Memoized style sheets
//!
//! [`create_styles`] wraps a function from [`Theme`] to a style object. The
//! returned [`StyleSheet`] computes the object once per theme and hands out
//! the same `Rc` for every later lookup of that theme.
//!
//! The cache is keyed on [`ThemeId`], so two themes that happen to share a
//! primary and background color still get their own entry. Entries are never
//! evicted; a sheet sees one entry per theme it was asked about.
//!
//! ```
//! use lumen_theme::{create_styles, ColorToken, Style, StyleMap, ThemeProvider, ThemeScope};
//! use std::rc::Rc;
//!
//! let styles = create_styles(|theme| {
//!     let mut map = StyleMap::new();
//!     map.insert(
//!         "container",
//!         Style::new()
//!             .background(theme.color(ColorToken::Background))
//!             .padding(theme.spacing().general.md),
//!     );
//!     map
//! });
//!
//! let scope = ThemeScope::with_provider(ThemeProvider::default());
//! let first = styles.resolve(&scope).unwrap();
//! let second = styles.resolve(&scope).unwrap();
//! assert!(Rc::ptr_eq(&first, &second));
//! assert_eq!(styles.cached_len(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use lumen_core::Color;
use rustc_hash::FxHashMap;

use crate::context::ThemeScope;
use crate::error::Result;
use crate::theme::{Theme, ThemeId};
use crate::tokens::FontWeight;

/// A declarative style record. Unset fields inherit from whatever the host
/// applies underneath.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub radius: Option<f32>,
    pub padding_horizontal: Option<f32>,
    pub padding_vertical: Option<f32>,
    pub margin: Option<f32>,
    pub font_size: Option<f32>,
    pub line_height: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub opacity: Option<f32>,
    pub min_height: Option<f32>,
    pub gap: Option<f32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Same padding on all sides
    pub fn padding(self, padding: f32) -> Self {
        self.padding_xy(padding, padding)
    }

    pub fn padding_xy(mut self, horizontal: f32, vertical: f32) -> Self {
        self.padding_horizontal = Some(horizontal);
        self.padding_vertical = Some(vertical);
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Layer `other` on top: its set fields win
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            background: other.background.or(self.background),
            foreground: other.foreground.or(self.foreground),
            border_color: other.border_color.or(self.border_color),
            border_width: other.border_width.or(self.border_width),
            radius: other.radius.or(self.radius),
            padding_horizontal: other.padding_horizontal.or(self.padding_horizontal),
            padding_vertical: other.padding_vertical.or(self.padding_vertical),
            margin: other.margin.or(self.margin),
            font_size: other.font_size.or(self.font_size),
            line_height: other.line_height.or(self.line_height),
            font_weight: other.font_weight.or(self.font_weight),
            opacity: other.opacity.or(self.opacity),
            min_height: other.min_height.or(self.min_height),
            gap: other.gap.or(self.gap),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

/// Named style definitions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    styles: FxHashMap<String, Style>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, style: Style) -> Option<Style> {
        self.styles.insert(name.into(), style)
    }

    /// Builder form of [`StyleMap::insert`]
    pub fn with(mut self, name: impl Into<String>, style: Style) -> Self {
        self.insert(name, style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// The named style, or an empty one
    pub fn get_or_default(&self, name: &str) -> Style {
        self.styles.get(name).cloned().unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }
}

impl<K: Into<String>> FromIterator<(K, Style)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, Style)>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A theme-to-style function with a per-theme cache
pub struct StyleSheet<S> {
    factory: Box<dyn Fn(&Theme) -> S>,
    cache: RefCell<FxHashMap<ThemeId, Rc<S>>>,
}

impl<S> StyleSheet<S> {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&Theme) -> S + 'static,
    {
        Self {
            factory: Box::new(factory),
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// Styles for `theme`, computed on first use
    pub fn get(&self, theme: &Arc<Theme>) -> Rc<S> {
        if let Some(styles) = self.cache.borrow().get(&theme.id()) {
            return styles.clone();
        }

        tracing::trace!("StyleSheet: computing styles for {} ({})", theme.name(), theme.id());
        // No borrow is held while the factory runs.
        let styles = Rc::new((self.factory)(theme));
        self.cache
            .borrow_mut()
            .entry(theme.id())
            .or_insert(styles)
            .clone()
    }

    /// Styles for the active theme of `scope`
    pub fn resolve(&self, scope: &ThemeScope) -> Result<Rc<S>> {
        let ctx = scope.use_theme()?;
        Ok(self.get(ctx.theme()))
    }

    pub fn is_cached(&self, theme: &Theme) -> bool {
        self.cache.borrow().contains_key(&theme.id())
    }

    /// Number of themes with cached styles
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<S> fmt::Debug for StyleSheet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSheet")
            .field("cached", &self.cached_len())
            .finish()
    }
}

/// Create a memoized style sheet
pub fn create_styles<S, F>(factory: F) -> StyleSheet<S>
where
    F: Fn(&Theme) -> S + 'static,
{
    StyleSheet::new(factory)
}
