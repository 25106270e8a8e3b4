//! Button component with FSM-driven interactions
//!
//! A themed button resolved from three closed axes (variant, color, size)
//! plus `disabled` / `loading` flags.
//!
//! Touch handling runs through a small state machine:
//!
//! ```text
//! IDLE --pointer down--> PRESSED --pointer up--> IDLE   (fires on_press)
//!                        PRESSED --leave/cancel--> IDLE
//! IDLE --activate--> IDLE                               (fires on_press)
//! DISABLED                                              (no transitions)
//! ```
//!
//! A button that is disabled or loading sits in `DISABLED`, so its handler can
//! never run.
//!
//! # Example
//!
//! ```
//! use lumen_cn::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let taps = Rc::new(Cell::new(0));
//! let taps_in = taps.clone();
//! let mut save = cn::button("Save")
//!     .variant(ButtonVariant::Outline)
//!     .color(ButtonColor::Success)
//!     .on_press(move || taps_in.set(taps_in.get() + 1));
//!
//! save.press();
//! assert_eq!(taps.get(), 1);
//!
//! save.set_loading(true);
//! save.press();
//! assert_eq!(taps.get(), 1);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use lumen_core::events::{event_types, Event};
use lumen_core::fsm::{StateId, StateMachine, Transition};
use lumen_core::{Color, EventType};
use lumen_theme::{
    ButtonColor, ButtonSize, ButtonVariant, ColorToken, FontWeight, Style, TextVariant, Theme,
    ThemeScope, Variant,
};

/// Button states
pub mod states {
    pub const IDLE: u32 = 0;
    pub const PRESSED: u32 = 1;
    pub const DISABLED: u32 = 2;
}

/// Interaction state reported in [`ButtonView`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Idle,
    Pressed,
    Disabled,
}

impl Interaction {
    fn from_state(state: StateId) -> Self {
        match state {
            states::PRESSED => Interaction::Pressed,
            states::DISABLED => Interaction::Disabled,
            _ => Interaction::Idle,
        }
    }
}

/// Variant, color and size of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonSpec {
    pub variant: ButtonVariant,
    pub color: ButtonColor,
    pub size: ButtonSize,
}

impl ButtonSpec {
    pub fn new(variant: ButtonVariant, color: ButtonColor, size: ButtonSize) -> Self {
        Self {
            variant,
            color,
            size,
        }
    }

    /// Parse names strictly; the first unknown name is an error
    pub fn parse(variant: &str, color: &str, size: &str) -> lumen_theme::Result<Self> {
        Ok(Self {
            variant: ButtonVariant::parse(variant)?,
            color: ButtonColor::parse(color)?,
            size: ButtonSize::parse(size)?,
        })
    }

    /// Parse names; unknown names fall back per axis (solid, primary, medium)
    pub fn parse_lenient(variant: &str, color: &str, size: &str) -> Self {
        Self {
            variant: ButtonVariant::parse_or_fallback(variant),
            color: ButtonColor::parse_or_fallback(color),
            size: ButtonSize::parse_or_fallback(size),
        }
    }

    /// Every variant × color × size combination
    pub fn all() -> impl Iterator<Item = ButtonSpec> {
        ButtonVariant::all().iter().flat_map(|variant| {
            ButtonColor::all().iter().flat_map(move |color| {
                ButtonSize::all()
                    .iter()
                    .map(move |size| ButtonSpec::new(*variant, *color, *size))
            })
        })
    }
}

/// Resolved visual style of a button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub background: Color,
    /// Fill while a finger is down
    pub pressed_background: Color,
    pub foreground: Color,
    pub border_color: Option<Color>,
    pub border_width: f32,
    pub radius: f32,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub min_height: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub font_weight: FontWeight,
    pub letter_spacing: f32,
    pub gap: f32,
    pub spinner_size: f32,
    pub opacity: f32,
    pub full_width: bool,
}

impl ButtonStyle {
    /// The same style as a generic [`Style`] record
    pub fn to_style(&self) -> Style {
        let style = Style::new()
            .background(self.background)
            .foreground(self.foreground)
            .radius(self.radius)
            .padding_xy(self.padding_horizontal, self.padding_vertical)
            .min_height(self.min_height)
            .font_size(self.font_size)
            .line_height(self.line_height)
            .font_weight(self.font_weight)
            .gap(self.gap)
            .opacity(self.opacity);
        match self.border_color {
            Some(color) => style.border(self.border_width, color),
            None => style,
        }
    }
}

/// A resolved button description for the host renderer
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub label: String,
    pub style: ButtonStyle,
    /// Fill for the current interaction state
    pub background: Color,
    /// Component opacity for the current interaction state
    pub opacity: f32,
    pub interaction: Interaction,
    pub show_spinner: bool,
    /// Whether the host should report the button as disabled to accessibility
    pub disabled: bool,
    pub busy: bool,
}

/// Button component
pub struct Button {
    label: String,
    spec: ButtonSpec,
    disabled: bool,
    loading: bool,
    full_width: bool,
    on_press: Option<Box<dyn FnMut()>>,
    fsm: StateMachine,
    fired: Rc<Cell<bool>>,
}

impl Button {
    /// Create a new button
    pub fn new(label: impl Into<String>) -> Self {
        let fired = Rc::new(Cell::new(false));
        Self {
            label: label.into(),
            spec: ButtonSpec::default(),
            disabled: false,
            loading: false,
            full_width: false,
            on_press: None,
            fsm: Self::create_fsm(false, &fired),
            fired,
        }
    }

    /// Create the button FSM
    fn create_fsm(blocked: bool, fired: &Rc<Cell<bool>>) -> StateMachine {
        if blocked {
            // Disabled / loading button has no transitions
            return StateMachine::inert(states::DISABLED);
        }

        let on_release = fired.clone();
        let on_activate = fired.clone();
        StateMachine::builder(states::IDLE)
            .on(states::IDLE, event_types::POINTER_DOWN, states::PRESSED)
            .transition(
                Transition::new(states::PRESSED, event_types::POINTER_UP, states::IDLE)
                    .with_action(move || on_release.set(true)),
            )
            .on(states::PRESSED, event_types::POINTER_LEAVE, states::IDLE)
            .on(states::PRESSED, event_types::POINTER_CANCEL, states::IDLE)
            .transition(
                Transition::new(states::IDLE, event_types::ACTIVATE, states::IDLE)
                    .with_action(move || on_activate.set(true)),
            )
            .build()
    }

    fn rebuild_fsm(&mut self) {
        let blocked = self.is_blocked();
        if blocked == self.fsm.is_in(states::DISABLED) {
            return;
        }
        self.fired.set(false);
        self.fsm = Self::create_fsm(blocked, &self.fired);
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.spec.variant = variant;
        self
    }

    pub fn color(mut self, color: ButtonColor) -> Self {
        self.spec.color = color;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.spec.size = size;
        self
    }

    pub fn spec(mut self, spec: ButtonSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Show a spinner and block presses
    pub fn loading(mut self, loading: bool) -> Self {
        self.set_loading(loading);
        self
    }

    /// Stretch to the container width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Set the press callback
    pub fn on_press<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_press = Some(Box::new(callback));
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.rebuild_fsm();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.rebuild_fsm();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn current_spec(&self) -> ButtonSpec {
        self.spec
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether presses are currently suppressed
    pub fn is_blocked(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn interaction(&self) -> Interaction {
        Interaction::from_state(self.fsm.current_state())
    }

    /// Feed a host event; returns true if the press handler ran
    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.send(event.event_type)
    }

    /// Programmatic activation (accessibility action, keyboard)
    pub fn press(&mut self) -> bool {
        self.send(event_types::ACTIVATE)
    }

    fn send(&mut self, event: EventType) -> bool {
        if self.is_blocked() {
            tracing::trace!("Button '{}': event {} suppressed", self.label, event);
            return false;
        }

        self.fsm.send(event);
        if !self.fired.replace(false) {
            return false;
        }
        match self.on_press.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Resolve the visual style against a theme
    pub fn resolve_style(&self, theme: &Theme) -> ButtonStyle {
        let colors = theme.colors();
        let preset = *theme.components().button.get(self.spec.size);
        let label = theme.text_style(TextVariant::Button);
        let (main_token, on_token) = self.spec.color.tokens();
        let main = colors.get(main_token);
        let on_main = colors.get(on_token);

        let (mut background, mut foreground, mut border_color) = match self.spec.variant {
            ButtonVariant::Solid => (main, on_main, None),
            ButtonVariant::Outline => (Color::TRANSPARENT, main, Some(main)),
            ButtonVariant::Ghost => (Color::TRANSPARENT, main, None),
        };

        let pressed_background = match self.spec.variant {
            ButtonVariant::Solid => {
                let target = if theme.is_dark() {
                    Color::WHITE
                } else {
                    Color::BLACK
                };
                Color::lerp(&main, &target, 0.12)
            }
            ButtonVariant::Outline | ButtonVariant::Ghost => main.with_alpha(colors.primary_muted.a),
        };

        let opacity = theme.opacity().resting(self.disabled, self.loading);
        if self.disabled {
            foreground = colors.get(ColorToken::TextDisabled);
            if self.spec.variant == ButtonVariant::Solid {
                background = colors.get(ColorToken::Disabled);
            }
            if border_color.is_some() {
                border_color = Some(colors.get(ColorToken::Disabled));
            }
        }

        ButtonStyle {
            background,
            pressed_background,
            foreground,
            border_width: if border_color.is_some() { 1.0 } else { 0.0 },
            border_color,
            radius: preset.radius,
            padding_horizontal: preset.padding_horizontal,
            padding_vertical: preset.padding_vertical,
            min_height: preset.min_height,
            font_size: preset.font_size,
            line_height: preset.line_height,
            font_weight: label.font_weight,
            letter_spacing: label.letter_spacing,
            gap: preset.gap,
            spinner_size: preset.spinner_size,
            opacity,
            full_width: self.full_width,
        }
    }

    /// Resolve the full view (style plus interaction state)
    pub fn resolve(&self, theme: &Theme) -> ButtonView {
        let style = self.resolve_style(theme);
        let interaction = self.interaction();
        let (background, opacity) = match interaction {
            Interaction::Pressed => (
                style.pressed_background,
                theme.opacity().pressed_from(style.opacity),
            ),
            Interaction::Idle | Interaction::Disabled => (style.background, style.opacity),
        };
        ButtonView {
            label: self.label.clone(),
            background,
            opacity,
            interaction,
            show_spinner: self.loading,
            disabled: self.is_blocked(),
            busy: self.loading,
            style,
        }
    }

    /// Resolve against the active theme of `scope`
    pub fn render(&self, scope: &ThemeScope) -> lumen_theme::Result<ButtonView> {
        let ctx = scope.use_theme()?;
        Ok(self.resolve(ctx.theme()))
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("spec", &self.spec)
            .field("disabled", &self.disabled)
            .field("loading", &self.loading)
            .field("full_width", &self.full_width)
            .field("interaction", &self.interaction())
            .field("has_on_press", &self.on_press.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::themes;

    fn counting(label: &str) -> (Button, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let count_in = count.clone();
        let button = Button::new(label).on_press(move || count_in.set(count_in.get() + 1));
        (button, count)
    }

    #[test]
    fn test_tap_fires_on_release() {
        let (mut button, count) = counting("OK");
        assert!(!button.handle_event(&Event::pointer(event_types::POINTER_DOWN, 4.0, 4.0)));
        assert_eq!(button.interaction(), Interaction::Pressed);
        assert_eq!(count.get(), 0);

        assert!(button.handle_event(&Event::pointer(event_types::POINTER_UP, 4.0, 4.0)));
        assert_eq!(button.interaction(), Interaction::Idle);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_leave_and_cancel_abort() {
        let (mut button, count) = counting("OK");
        for abort in [event_types::POINTER_LEAVE, event_types::POINTER_CANCEL] {
            button.handle_event(&Event::new(event_types::POINTER_DOWN));
            button.handle_event(&Event::new(abort));
            button.handle_event(&Event::new(event_types::POINTER_UP));
        }
        assert_eq!(count.get(), 0);
        assert_eq!(button.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_up_without_down_does_nothing() {
        let (mut button, count) = counting("OK");
        button.handle_event(&Event::new(event_types::POINTER_UP));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_reenabling_restores_interaction() {
        let (mut button, count) = counting("OK");
        button.set_disabled(true);
        assert_eq!(button.interaction(), Interaction::Disabled);
        assert!(!button.press());

        button.set_disabled(false);
        assert_eq!(button.interaction(), Interaction::Idle);
        assert!(button.press());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_disabling_mid_press_drops_the_press() {
        let (mut button, count) = counting("OK");
        button.handle_event(&Event::new(event_types::POINTER_DOWN));
        button.set_loading(true);
        button.set_loading(false);
        button.handle_event(&Event::new(event_types::POINTER_UP));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_solid_uses_main_and_on_colors() {
        let theme = themes::light();
        let style = Button::new("Go")
            .color(ButtonColor::Error)
            .resolve_style(&theme);
        assert_eq!(style.background, theme.color(ColorToken::Error));
        assert_eq!(style.foreground, theme.color(ColorToken::OnError));
        assert_eq!(style.border_color, None);
        assert_eq!(style.border_width, 0.0);
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_outline_and_ghost() {
        let theme = themes::dark();
        let outline = Button::new("Go")
            .variant(ButtonVariant::Outline)
            .resolve_style(&theme);
        assert_eq!(outline.background, Color::TRANSPARENT);
        assert_eq!(outline.foreground, theme.color(ColorToken::Primary));
        assert_eq!(outline.border_color, Some(theme.color(ColorToken::Primary)));
        assert_eq!(outline.border_width, 1.0);

        let ghost = Button::new("Go")
            .variant(ButtonVariant::Ghost)
            .resolve_style(&theme);
        assert_eq!(ghost.background, Color::TRANSPARENT);
        assert_eq!(ghost.border_color, None);
    }

    #[test]
    fn test_disabled_and_loading_styles() {
        let theme = themes::light();
        let disabled = Button::new("Go").disabled(true).resolve_style(&theme);
        assert_eq!(disabled.background, theme.color(ColorToken::Disabled));
        assert_eq!(disabled.foreground, theme.color(ColorToken::TextDisabled));
        assert_eq!(disabled.opacity, theme.opacity().disabled);

        let view = Button::new("Go").loading(true).resolve(&theme);
        assert!(view.show_spinner);
        assert!(view.disabled);
        assert_eq!(view.style.opacity, theme.opacity().loading);
        assert_eq!(view.style.background, theme.color(ColorToken::Primary));
    }

    #[test]
    fn test_pressed_view_uses_pressed_background() {
        let theme = themes::light();
        let mut button = Button::new("Go");
        button.handle_event(&Event::new(event_types::POINTER_DOWN));
        let view = button.resolve(&theme);
        assert_eq!(view.interaction, Interaction::Pressed);
        assert_eq!(view.background, view.style.pressed_background);
        assert_ne!(view.background, view.style.background);
        assert_eq!(view.opacity, theme.opacity().pressed);

        button.handle_event(&Event::new(event_types::POINTER_UP));
        assert_eq!(button.resolve(&theme).opacity, 1.0);
    }

    #[test]
    fn test_transparent_variants_press_with_muted_tint() {
        for theme in [themes::light(), themes::dark()] {
            let muted = theme.color(ColorToken::PrimaryMuted);
            let ghost = Button::new("Go")
                .variant(ButtonVariant::Ghost)
                .resolve_style(&theme);
            assert_eq!(ghost.pressed_background, muted);

            let outline = Button::new("Go")
                .variant(ButtonVariant::Outline)
                .color(ButtonColor::Error)
                .resolve_style(&theme);
            assert_eq!(
                outline.pressed_background,
                theme.color(ColorToken::Error).with_alpha(muted.a)
            );
        }
    }

    #[test]
    fn test_spec_parsing() {
        let spec = ButtonSpec::parse("ghost", "warning", "large").unwrap();
        assert_eq!(
            spec,
            ButtonSpec::new(ButtonVariant::Ghost, ButtonColor::Warning, ButtonSize::Large)
        );
        assert!(ButtonSpec::parse("ghost", "chartreuse", "large").is_err());

        let lenient = ButtonSpec::parse_lenient("raised", "chartreuse", "xl");
        assert_eq!(lenient, ButtonSpec::default());
        assert_eq!(ButtonSpec::all().count(), 3 * 6 * 3);
    }

    #[test]
    fn test_to_style_carries_border() {
        let theme = themes::light();
        let style = Button::new("Go")
            .variant(ButtonVariant::Outline)
            .resolve_style(&theme)
            .to_style();
        assert_eq!(style.border_width, Some(1.0));
        assert_eq!(style.border_color, Some(theme.color(ColorToken::Primary)));

        let solid = Button::new("Go").resolve_style(&theme).to_style();
        assert_eq!(solid.border_color, None);
    }
}
