//! Subcommand implementations

use std::path::Path;

use anyhow::{Context, Result};
use lumen_cn::{Button, ButtonSpec};
use lumen_theme::{
    detect_system_appearance, ButtonColor, SchemeSelection, Theme, ThemeConfig, ThemePreset,
    Variant,
};

use crate::ThemeArgs;

pub struct ButtonArgs {
    pub variant: String,
    pub color: String,
    pub size: String,
    pub disabled: bool,
    pub loading: bool,
    pub strict: bool,
}

/// Config file, then environment, then command-line flags
fn theme_config(args: &ThemeArgs) -> Result<ThemeConfig> {
    let mut config = match &args.config {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ThemeConfig::default(),
    };
    config.apply_env();

    if let Some(preset) = &args.preset {
        config.preset = ThemePreset::parse(preset).context("Invalid --preset")?;
    }
    if let Some(scheme) = &args.scheme {
        config.color_scheme = SchemeSelection::parse(scheme).context("Invalid --scheme")?;
    }
    Ok(config)
}

fn active_theme(args: &ThemeArgs) -> Result<std::sync::Arc<Theme>> {
    let config = theme_config(args)?;
    let appearance = detect_system_appearance();
    let provider = config.into_provider(appearance)?;
    tracing::debug!("{:?}", provider);
    Ok(provider.theme())
}

pub fn tokens(args: &ThemeArgs) -> Result<()> {
    let theme = active_theme(args)?;
    let json = serde_json::to_string_pretty(&*theme).context("Failed to serialize theme")?;
    println!("{json}");
    Ok(())
}

pub fn button(args: &ThemeArgs, button: &ButtonArgs) -> Result<()> {
    let spec = if button.strict {
        ButtonSpec::parse(&button.variant, &button.color, &button.size)?
    } else {
        ButtonSpec::parse_lenient(&button.variant, &button.color, &button.size)
    };

    let theme = active_theme(args)?;
    let style = Button::new("Button")
        .spec(spec)
        .disabled(button.disabled)
        .loading(button.loading)
        .resolve_style(&theme);

    println!(
        "{} / {} {} {}",
        theme.name(),
        spec.variant,
        spec.color,
        spec.size
    );
    println!("  background         {}", style.background);
    println!("  pressed background {}", style.pressed_background);
    println!("  foreground         {}", style.foreground);
    match style.border_color {
        Some(color) => println!("  border             {} {}", style.border_width, color),
        None => println!("  border             none"),
    }
    println!("  radius             {}", style.radius);
    println!(
        "  padding            {} x {}",
        style.padding_horizontal, style.padding_vertical
    );
    println!("  min height         {}", style.min_height);
    println!(
        "  font               {} / {} weight {}",
        style.font_size,
        style.line_height,
        style.font_weight.value()
    );
    println!("  opacity            {}", style.opacity);
    Ok(())
}

pub fn check(path: &Path) -> Result<()> {
    let config =
        ThemeConfig::load(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let bundle = config
        .bundle()
        .with_context(|| format!("Invalid overrides in {}", path.display()))?;

    println!("{}: ok", path.display());
    println!("  preset        {}", config.preset.display_name());
    println!("  color scheme  {}", config.color_scheme);
    println!(
        "  overrides     {} light, {} dark",
        config.overrides.light.len(),
        config.overrides.dark.len()
    );

    let warnings = contrast_warnings(bundle.light())
        .into_iter()
        .chain(contrast_warnings(bundle.dark()))
        .collect::<Vec<_>>();
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    Ok(())
}

/// Button roles whose label falls below 4.5:1 on its fill
fn contrast_warnings(theme: &Theme) -> Vec<String> {
    ButtonColor::all()
        .iter()
        .filter_map(|role| {
            let (main, on) = role.tokens();
            let ratio = theme.color(main).contrast_ratio(&theme.color(on));
            (ratio < 4.5).then(|| {
                format!(
                    "{}: {role} label contrast {ratio:.2}:1 is below 4.5:1",
                    theme.scheme()
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Color;
    use lumen_theme::ColorToken;

    fn args(preset: Option<&str>, scheme: Option<&str>) -> ThemeArgs {
        ThemeArgs {
            config: None,
            preset: preset.map(str::to_string),
            scheme: scheme.map(str::to_string),
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = theme_config(&args(Some("forest"), Some("dark"))).unwrap();
        assert_eq!(config.preset, ThemePreset::Forest);
        assert_eq!(config.color_scheme, SchemeSelection::Dark);
    }

    #[test]
    fn test_invalid_flag_is_an_error() {
        let err = theme_config(&args(Some("vaporwave"), None)).unwrap_err();
        assert!(format!("{err:#}").contains("vaporwave"));
    }

    #[test]
    fn test_contrast_warnings() {
        let theme = lumen_theme::themes::light();
        assert!(contrast_warnings(&theme).is_empty());

        let low = theme
            .to_builder()
            .color(ColorToken::OnPrimary, Color::from_hex(0x3B82F6))
            .build();
        let warnings = contrast_warnings(&low);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("light: primary"));

        let dark = lumen_theme::themes::dark();
        let dark_low = dark
            .to_builder()
            .color(ColorToken::OnError, dark.color(ColorToken::Error))
            .build();
        assert!(contrast_warnings(&dark_low)
            .iter()
            .any(|w| w.starts_with("dark: error")));
    }
}
