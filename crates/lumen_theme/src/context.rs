//! Theme scopes
//!
//! A [`ThemeScope`] is passed down the render tree explicitly. Components ask
//! the scope for the active theme with [`ThemeScope::use_theme`]; a scope with
//! no provider above it reports [`ThemeError::NoProvider`].
//!
//! ```
//! use lumen_theme::{Appearance, SchemeSelection, ThemeProvider, ThemeScope};
//!
//! let root = ThemeScope::root();
//! assert!(root.use_theme().is_err());
//!
//! let scope = root.provide(ThemeProvider::new(SchemeSelection::Auto, Appearance::Dark));
//! let ctx = scope.use_theme().unwrap();
//! assert!(ctx.is_dark());
//!
//! ctx.toggle();
//! assert!(scope.use_theme().unwrap().is_light());
//! ```

use std::sync::Arc;

use crate::error::{Result, ThemeError};
use crate::provider::ThemeProvider;
use crate::scheme::{ColorScheme, SchemeSelection};
use crate::theme::Theme;

/// Position in the render tree, carrying the nearest provider
#[derive(Clone, Debug, Default)]
pub struct ThemeScope {
    provider: Option<ThemeProvider>,
}

impl ThemeScope {
    /// A scope with no provider
    pub fn root() -> Self {
        Self { provider: None }
    }

    pub fn with_provider(provider: ThemeProvider) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A child scope under `provider`; shadows any outer provider
    pub fn provide(&self, provider: ThemeProvider) -> Self {
        Self::with_provider(provider)
    }

    pub fn provider(&self) -> Option<&ThemeProvider> {
        self.provider.as_ref()
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Look up the active theme context
    pub fn use_theme(&self) -> Result<ThemeContext> {
        let provider = self.provider.as_ref().ok_or(ThemeError::NoProvider)?;
        Ok(ThemeContext {
            theme: provider.theme(),
            scheme: provider.scheme(),
            provider: provider.clone(),
        })
    }

    /// Look up the active theme context, panicking without a provider.
    ///
    /// # Panics
    ///
    /// Panics with the [`ThemeError::NoProvider`] message when no provider is
    /// in scope. Rendering without a provider is a wiring bug, not a runtime
    /// condition.
    pub fn expect_theme(&self) -> ThemeContext {
        match self.use_theme() {
            Ok(ctx) => ctx,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Snapshot of the active theme plus handles to change it
#[derive(Clone, Debug)]
pub struct ThemeContext {
    theme: Arc<Theme>,
    scheme: ColorScheme,
    provider: ThemeProvider,
}

impl ThemeContext {
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    pub fn is_light(&self) -> bool {
        self.scheme.is_light()
    }

    pub fn set_color_scheme(&self, selection: SchemeSelection) {
        self.provider.set_color_scheme(selection);
    }

    pub fn toggle(&self) {
        self.provider.toggle();
    }

    pub fn provider(&self) -> &ThemeProvider {
        &self.provider
    }
}

/// Free-function form of [`ThemeScope::use_theme`]
pub fn use_theme(scope: &ThemeScope) -> Result<ThemeContext> {
    scope.use_theme()
}
