//! Built-in themes
//!
//! [`light`] and [`dark`] return the canonical default themes. They are built
//! once per process and shared, so their ids are stable for the process
//! lifetime.

pub mod lumen;

use std::sync::{Arc, OnceLock};

use crate::theme::{Theme, ThemeBundle};

static LIGHT: OnceLock<Arc<Theme>> = OnceLock::new();
static DARK: OnceLock<Arc<Theme>> = OnceLock::new();

/// The canonical default light theme
pub fn light() -> Arc<Theme> {
    LIGHT.get_or_init(|| Arc::new(lumen::light())).clone()
}

/// The canonical default dark theme
pub fn dark() -> Arc<Theme> {
    DARK.get_or_init(|| Arc::new(lumen::dark())).clone()
}

/// Bundle of the canonical default themes
pub fn standard_bundle() -> ThemeBundle {
    ThemeBundle::from_arcs("Lumen", light(), dark())
}
