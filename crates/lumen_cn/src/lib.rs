//! Lumen Component Library
//!
//! Themed presentational components. Each component resolves its semantic
//! props against the active [`Theme`](lumen_theme::Theme) and produces a view
//! struct that the host renderer draws.
//!
//! - [`Text`]: one step of the type scale in a semantic color
//! - [`Button`]: variant × color × size, with disabled / loading states and
//!   FSM-driven press handling
//!
//! # Example
//!
//! ```
//! use lumen_cn::prelude::*;
//!
//! let provider = ThemeProvider::new(SchemeSelection::Dark, Appearance::Unknown);
//! let scope = ThemeScope::root().provide(provider);
//!
//! let title = cn::text("Welcome").variant(TextVariant::H1).render(&scope)?;
//! let cta = cn::button("Get started").size(ButtonSize::Large).render(&scope)?;
//! assert!(cta.style.min_height > title.style.line_height);
//! # Ok::<(), ThemeError>(())
//! ```

pub mod button;
pub mod text;

pub use button::{Button, ButtonSpec, ButtonStyle, ButtonView, Interaction};
pub use text::{Text, TextAlign, TextView};

/// Short constructors, used as `cn::button(..)` / `cn::text(..)`
pub mod cn {
    use super::{Button, Text};

    pub fn button(label: impl Into<String>) -> Button {
        Button::new(label)
    }

    pub fn text(content: impl Into<String>) -> Text {
        Text::new(content)
    }
}

pub mod prelude {
    pub use crate::cn;
    pub use crate::{Button, ButtonSpec, ButtonStyle, ButtonView, Interaction};
    pub use crate::{Text, TextAlign, TextView};
    pub use lumen_theme::{
        Appearance, ButtonColor, ButtonSize, ButtonVariant, ColorScheme, ColorToken,
        SchemeSelection, TextVariant, ThemeError, ThemeProvider, ThemeScope,
    };
}
