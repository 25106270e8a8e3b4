//! Closed variant axes
//!
//! Every styling axis (text variant, button variant, button color, ...) is a
//! closed enum implementing [`Variant`]. Names coming from markup or config are
//! parsed either strictly ([`Variant::parse`]) or leniently
//! ([`Variant::parse_or_fallback`]), which substitutes the axis' fallback
//! instead of failing.
//!
//! Parsing is case-insensitive and ignores `-` and `_`, so `"on-primary"`,
//! `"OnPrimary"` and `"on_primary"` name the same value.

use serde::Serialize;

use crate::error::{Result, ThemeError};

/// A closed set of named values along one styling axis
pub trait Variant: Copy + Eq + 'static {
    /// Human-readable axis name used in errors and logs
    const AXIS: &'static str;

    /// Value substituted when a lenient parse fails
    const FALLBACK: Self;

    /// Every value of the axis, in declaration order
    fn all() -> &'static [Self];

    /// Canonical name
    fn name(self) -> &'static str;

    /// Strict parse
    fn parse(input: &str) -> Result<Self> {
        let wanted = normalize(input);
        Self::all()
            .iter()
            .copied()
            .find(|value| normalize(value.name()) == wanted)
            .ok_or_else(|| ThemeError::UnknownVariant {
                axis: Self::AXIS,
                name: input.to_string(),
            })
    }

    /// Lenient parse; unknown names resolve to [`Variant::FALLBACK`]
    fn parse_or_fallback(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|_| {
            tracing::debug!(
                "unknown {} '{}', falling back to '{}'",
                Self::AXIS,
                input,
                Self::FALLBACK.name()
            );
            Self::FALLBACK
        })
    }
}

fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Implement [`Variant`], `FromStr`, `Deserialize` and `Display` for a fieldless enum
macro_rules! impl_variant {
    ($ty:ty, axis: $axis:literal, fallback: $fallback:path, { $($variant:path => $name:literal),+ $(,)? }) => {
        impl $crate::variants::Variant for $ty {
            const AXIS: &'static str = $axis;
            const FALLBACK: Self = $fallback;

            fn all() -> &'static [Self] {
                &[$($variant),+]
            }

            fn name(self) -> &'static str {
                match self {
                    $($variant => $name,)+
                }
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::ThemeError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$ty as $crate::variants::Variant>::parse(s)
            }
        }

        // Config files go through the same normalization as every other input
        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let name = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::variants::Variant>::parse(&name).map_err(::serde::de::Error::custom)
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::variants::Variant::name(*self))
            }
        }
    };
}

/// Visual treatment of a button
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled with the main color
    #[default]
    Solid,
    /// Transparent fill, colored border and label
    Outline,
    /// Transparent fill, colored label, no border
    Ghost,
}

impl_variant!(ButtonVariant, axis: "button variant", fallback: ButtonVariant::Solid, {
    ButtonVariant::Solid => "solid",
    ButtonVariant::Outline => "outline",
    ButtonVariant::Ghost => "ghost",
});

/// Semantic color role of a button
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
}

impl_variant!(ButtonColor, axis: "button color", fallback: ButtonColor::Primary, {
    ButtonColor::Primary => "primary",
    ButtonColor::Secondary => "secondary",
    ButtonColor::Success => "success",
    ButtonColor::Warning => "warning",
    ButtonColor::Error => "error",
    ButtonColor::Info => "info",
});

impl ButtonColor {
    /// Main and contrasting color tokens for this role
    pub fn tokens(self) -> (crate::tokens::ColorToken, crate::tokens::ColorToken) {
        use crate::tokens::ColorToken as T;
        match self {
            ButtonColor::Primary => (T::Primary, T::OnPrimary),
            ButtonColor::Secondary => (T::Secondary, T::OnSecondary),
            ButtonColor::Success => (T::Success, T::OnSuccess),
            ButtonColor::Warning => (T::Warning, T::OnWarning),
            ButtonColor::Error => (T::Error, T::OnError),
            ButtonColor::Info => (T::Info, T::OnInfo),
        }
    }
}

/// Button size step
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl_variant!(ButtonSize, axis: "button size", fallback: ButtonSize::Medium, {
    ButtonSize::Small => "small",
    ButtonSize::Medium => "medium",
    ButtonSize::Large => "large",
});
