//! Host appearance detection
//!
//! The host framework reports whether the device is in light or dark mode.
//! Hosts that can push changes call
//! [`ThemeProvider::set_appearance`](crate::ThemeProvider::set_appearance);
//! [`AppearanceSource`] covers the initial query.

use crate::scheme::Appearance;
use crate::variants::Variant;

/// Explicit override, `light` or `dark`
pub const APPEARANCE_ENV: &str = "LUMEN_APPEARANCE";

/// Something that can report the host's current appearance preference
pub trait AppearanceSource {
    fn appearance(&self) -> Appearance;
}

impl<F> AppearanceSource for F
where
    F: Fn() -> Appearance,
{
    fn appearance(&self) -> Appearance {
        self()
    }
}

/// Always reports the same appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedAppearance(pub Appearance);

impl AppearanceSource for FixedAppearance {
    fn appearance(&self) -> Appearance {
        self.0
    }
}

/// Reads the appearance from the process environment
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAppearance;

impl AppearanceSource for SystemAppearance {
    fn appearance(&self) -> Appearance {
        detect_system_appearance()
    }
}

/// Detect the system appearance from the environment.
///
/// `LUMEN_APPEARANCE` wins when set; otherwise a `GTK_THEME` ending in
/// `:dark` means dark. Anything else is [`Appearance::Unknown`].
pub fn detect_system_appearance() -> Appearance {
    appearance_from_env(|key| std::env::var(key).ok())
}

pub(crate) fn appearance_from_env<F>(lookup: F) -> Appearance
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(APPEARANCE_ENV) {
        match Appearance::parse(&value) {
            Ok(appearance) => return appearance,
            Err(err) => tracing::warn!("ignoring {}: {}", APPEARANCE_ENV, err),
        }
    }

    if let Some(gtk) = lookup("GTK_THEME") {
        let gtk = gtk.to_ascii_lowercase();
        return if gtk.ends_with(":dark") || gtk.ends_with("-dark") {
            Appearance::Dark
        } else {
            Appearance::Light
        };
    }

    Appearance::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_explicit_env_wins() {
        let lookup = env(&[(APPEARANCE_ENV, "dark"), ("GTK_THEME", "Adwaita")]);
        assert_eq!(appearance_from_env(lookup), Appearance::Dark);
    }

    #[test]
    fn test_gtk_theme_suffix() {
        assert_eq!(
            appearance_from_env(env(&[("GTK_THEME", "Adwaita:dark")])),
            Appearance::Dark
        );
        assert_eq!(
            appearance_from_env(env(&[("GTK_THEME", "Adwaita")])),
            Appearance::Light
        );
    }

    #[test]
    fn test_invalid_override_is_ignored() {
        let lookup = env(&[(APPEARANCE_ENV, "purple")]);
        assert_eq!(appearance_from_env(lookup), Appearance::Unknown);
    }

    #[test]
    fn test_closure_and_fixed_sources() {
        assert_eq!(FixedAppearance(Appearance::Dark).appearance(), Appearance::Dark);
        let source = || Appearance::Light;
        assert_eq!(source.appearance(), Appearance::Light);
    }
}
