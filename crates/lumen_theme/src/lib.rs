//! Lumen Theme System
//!
//! Design tokens, light/dark theme providers and memoized style sheets for
//! mobile UI hosts.
//!
//! # Overview
//!
//! - **Design tokens**: colors, typography, spacing, radii, opacity
//! - **Themes**: immutable token aggregates, one per color scheme, with a
//!   process-unique [`ThemeId`]
//! - **Providers**: light / dark / auto selection resolved against the host
//!   appearance, with synchronous change notification
//! - **Scopes**: explicit [`ThemeScope`] values passed down the render tree
//! - **Style sheets**: per-theme memoized style objects
//! - **Presets and config**: built-in palettes plus TOML / environment
//!   configuration
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_theme::{Appearance, ColorToken, SchemeSelection, ThemeProvider, ThemeScope};
//!
//! let provider = ThemeProvider::new(SchemeSelection::Auto, Appearance::Dark);
//! let scope = ThemeScope::root().provide(provider.clone());
//!
//! let ctx = scope.use_theme()?;
//! assert!(ctx.is_dark());
//! let primary = ctx.theme().color(ColorToken::Primary);
//! # let _ = primary;
//!
//! provider.set_color_scheme(SchemeSelection::Light);
//! assert!(scope.use_theme()?.is_light());
//! # Ok::<(), lumen_theme::ThemeError>(())
//! ```

#[macro_use]
mod variants;

pub mod config;
pub mod context;
pub mod error;
pub mod platform;
pub mod presets;
pub mod provider;
pub mod scheme;
pub mod style;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use config::{ColorOverrides, ThemeConfig};
pub use context::{use_theme, ThemeContext, ThemeScope};
pub use error::{Result, ThemeError};
pub use platform::{detect_system_appearance, AppearanceSource, FixedAppearance, SystemAppearance};
pub use presets::{preset_bundle, ThemePreset};
pub use provider::{ThemeChange, ThemeProvider, ThemeProviderBuilder};
pub use scheme::{Appearance, ColorScheme, SchemeSelection};
pub use style::{create_styles, Style, StyleMap, StyleSheet};
pub use theme::{Theme, ThemeBuilder, ThemeBundle, ThemeId};
pub use tokens::*;
pub use variants::{ButtonColor, ButtonSize, ButtonVariant, Variant};

pub use lumen_core::Color;
