use std::cell::Cell;
use std::rc::Rc;

use lumen_cn::prelude::*;
use lumen_core::events::{event_types, Event};
use lumen_theme::themes;
use pretty_assertions::assert_eq;

fn tap(button: &mut Button) {
    button.handle_event(&Event::pointer(event_types::POINTER_DOWN, 10.0, 10.0));
    button.handle_event(&Event::pointer(event_types::POINTER_UP, 10.0, 10.0));
}

#[test]
fn press_handler_never_runs_while_disabled_or_loading() {
    for spec in ButtonSpec::all() {
        for (disabled, loading) in [(true, false), (false, true), (true, true)] {
            let calls = Rc::new(Cell::new(0));
            let calls_in = calls.clone();
            let mut button = cn::button("Pay")
                .spec(spec)
                .disabled(disabled)
                .loading(loading)
                .on_press(move || calls_in.set(calls_in.get() + 1));

            tap(&mut button);
            assert!(!button.press());
            button.handle_event(&Event::new(event_types::ACTIVATE));

            assert_eq!(calls.get(), 0, "{spec:?} disabled={disabled} loading={loading}");
            assert_eq!(button.interaction(), Interaction::Disabled);
        }
    }
}

#[test]
fn press_handler_runs_when_enabled() {
    for spec in ButtonSpec::all() {
        let calls = Rc::new(Cell::new(0));
        let calls_in = calls.clone();
        let mut button = cn::button("Pay")
            .spec(spec)
            .on_press(move || calls_in.set(calls_in.get() + 1));

        tap(&mut button);
        button.press();
        assert_eq!(calls.get(), 2, "{spec:?}");
    }
}

#[test]
fn every_combination_resolves_deterministically() {
    for theme in [themes::light(), themes::dark()] {
        for spec in ButtonSpec::all() {
            let button = cn::button("Go").spec(spec);
            let a = button.resolve_style(&theme);
            let b = button.resolve_style(&theme);
            assert_eq!(a, b);

            let preset = theme.components().button.get(spec.size);
            assert_eq!(a.min_height, preset.min_height);
            assert_eq!(a.radius, preset.radius);
        }
    }
}

#[test]
fn unknown_names_degrade_to_defaults() {
    let spec = ButtonSpec::parse_lenient("neon", "rainbow", "gigantic");
    let theme = themes::light();
    let odd = cn::button("Go").spec(spec).resolve_style(&theme);
    let default = cn::button("Go").resolve_style(&theme);
    assert_eq!(odd, default);

    let text = cn::text("Hi").variant_named("jumbo").resolve(&theme);
    assert_eq!(text.style, theme.typography().body1);
}

#[test]
fn rendering_without_provider_fails() {
    let scope = ThemeScope::root();
    assert!(matches!(
        cn::button("Go").render(&scope),
        Err(ThemeError::NoProvider)
    ));
    assert!(matches!(
        cn::text("Hi").render(&scope),
        Err(ThemeError::NoProvider)
    ));
}

#[test]
fn components_follow_scheme_switch() {
    let provider = ThemeProvider::new(SchemeSelection::Auto, Appearance::Dark);
    let scope = ThemeScope::with_provider(provider.clone());
    let label = cn::text("Balance");

    let dark = label.render(&scope).unwrap();
    assert_eq!(dark.color, themes::dark().color(ColorToken::Text));

    provider.set_color_scheme(SchemeSelection::Light);
    let light = label.render(&scope).unwrap();
    assert_eq!(light.color, themes::light().color(ColorToken::Text));

    provider.set_appearance(Appearance::Dark);
    assert_eq!(label.render(&scope).unwrap().color, light.color);
}
