//! Theme provider
//!
//! A [`ThemeProvider`] owns the scheme selection for one UI subtree and
//! resolves it to a concrete [`Theme`]. It is a cheap `Rc` handle: clones
//! share state, so a handle captured by a button callback and the one held by
//! the root scope see the same selection.
//!
//! Changes are delivered synchronously to subscribers registered with
//! [`ThemeProvider::subscribe`]. Every subscriber has run by the time a setter
//! returns.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use lumen_core::{Observers, SubscriptionId};

use crate::platform::AppearanceSource;
use crate::scheme::{Appearance, ColorScheme, SchemeSelection};
use crate::theme::{Theme, ThemeBundle};
use crate::themes;

/// Delivered to subscribers after the selection or resolved scheme changed
#[derive(Clone, Debug)]
pub struct ThemeChange {
    pub previous: ColorScheme,
    pub scheme: ColorScheme,
    pub selection: SchemeSelection,
    pub theme: Arc<Theme>,
}

impl ThemeChange {
    /// Whether the resolved scheme (and so the theme) actually changed
    pub fn scheme_changed(&self) -> bool {
        self.previous != self.scheme
    }
}

#[derive(Clone, Copy, Debug)]
struct State {
    selection: SchemeSelection,
    appearance: Appearance,
    resolved: ColorScheme,
}

impl State {
    fn new(selection: SchemeSelection, appearance: Appearance) -> Self {
        Self {
            selection,
            appearance,
            resolved: ThemeProvider::resolve(selection, appearance),
        }
    }
}

struct Inner {
    bundle: ThemeBundle,
    override_theme: Option<Arc<Theme>>,
    state: RefCell<State>,
    observers: Observers<ThemeChange>,
    delivering: Cell<bool>,
    /// A change arrived while subscribers were being notified
    stale: Cell<bool>,
}

/// Upper bound on follow-up rounds when subscribers keep changing the scheme
const MAX_DELIVERY_ROUNDS: usize = 8;

/// Clears the delivering flag even if a subscriber panics
struct Delivering<'a>(&'a Cell<bool>);

impl Drop for Delivering<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Holds the scheme selection and resolves the active theme
#[derive(Clone)]
pub struct ThemeProvider {
    inner: Rc<Inner>,
}

impl ThemeProvider {
    /// Provider over the default themes
    pub fn new(selection: SchemeSelection, appearance: Appearance) -> Self {
        Self::builder()
            .selection(selection)
            .appearance(appearance)
            .build()
    }

    pub fn builder() -> ThemeProviderBuilder {
        ThemeProviderBuilder::default()
    }

    /// Resolve a selection against the host appearance.
    ///
    /// Explicit selections win; `Auto` follows the appearance and defaults to
    /// light when it is unknown.
    pub fn resolve(selection: SchemeSelection, appearance: Appearance) -> ColorScheme {
        selection.resolve(appearance)
    }

    /// The active theme.
    ///
    /// An override theme, when set, is returned regardless of the scheme.
    pub fn theme(&self) -> Arc<Theme> {
        if let Some(theme) = &self.inner.override_theme {
            return theme.clone();
        }
        self.inner.bundle.for_scheme(self.scheme()).clone()
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.inner.bundle
    }

    pub fn has_override(&self) -> bool {
        self.inner.override_theme.is_some()
    }

    /// The resolved scheme (never `Auto`)
    pub fn scheme(&self) -> ColorScheme {
        self.inner.state.borrow().resolved
    }

    pub fn selection(&self) -> SchemeSelection {
        self.inner.state.borrow().selection
    }

    /// Last appearance reported by the host
    pub fn appearance(&self) -> Appearance {
        self.inner.state.borrow().appearance
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    pub fn is_light(&self) -> bool {
        self.scheme().is_light()
    }

    /// Select light, dark or auto.
    ///
    /// Re-selecting the current selection is a no-op.
    pub fn set_color_scheme(&self, selection: SchemeSelection) {
        self.update(|state| state.selection = selection);
    }

    /// Switch to the opposite scheme.
    ///
    /// From `Auto` this picks the explicit opposite of the host appearance
    /// (unknown counts as light), so the result no longer follows the host.
    pub fn toggle(&self) {
        let state = *self.inner.state.borrow();
        let next = match state.selection {
            SchemeSelection::Auto => state.appearance.scheme_or_default().toggle(),
            SchemeSelection::Light => ColorScheme::Dark,
            SchemeSelection::Dark => ColorScheme::Light,
        };
        self.set_color_scheme(next.into());
    }

    /// Host reports a new appearance preference
    pub fn set_appearance(&self, appearance: Appearance) {
        self.update(|state| state.appearance = appearance);
    }

    /// Re-query the host appearance from a source
    pub fn refresh_appearance(&self, source: &dyn AppearanceSource) {
        self.set_appearance(source.appearance());
    }

    /// Register a callback run after every selection or scheme change
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        self.inner.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.observers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Whether two handles share the same provider state
    pub fn ptr_eq(&self, other: &ThemeProvider) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn update(&self, apply: impl FnOnce(&mut State)) {
        let previous = {
            let mut state = self.inner.state.borrow_mut();
            let before = *state;
            apply(&mut *state);
            state.resolved = Self::resolve(state.selection, state.appearance);

            if before.selection == state.selection && before.resolved == state.resolved {
                if before.appearance != state.appearance {
                    tracing::trace!("appearance -> {}, scheme unchanged", state.appearance);
                }
                return;
            }

            tracing::debug!(
                "ThemeProvider: {} ({}) -> {} ({})",
                before.selection,
                before.resolved,
                state.selection,
                state.resolved
            );
            before.resolved
        };

        if self.inner.delivering.get() {
            // Coalesced into a follow-up round once the current one stops.
            self.inner.stale.set(true);
            return;
        }
        self.deliver(previous);
    }

    /// Notify subscribers of the current state.
    ///
    /// A change made by a subscriber stops the running round; the remaining
    /// subscribers never see the outdated event and everyone receives the
    /// latest state in the next round.
    fn deliver(&self, mut previous: ColorScheme) {
        let inner = &self.inner;
        inner.delivering.set(true);
        let _delivering = Delivering(&inner.delivering);

        for _ in 0..MAX_DELIVERY_ROUNDS {
            inner.stale.set(false);
            let state = *inner.state.borrow();
            let event = ThemeChange {
                previous,
                scheme: state.resolved,
                selection: state.selection,
                theme: self.theme(),
            };
            // The borrow is released so subscribers can read the provider.
            let delivered = inner.observers.notify_while(&event, || !inner.stale.get());
            tracing::trace!("theme change delivered to {} subscribers", delivered);

            if !inner.stale.get() {
                return;
            }
            previous = state.resolved;
        }
        inner.stale.set(false);
        tracing::warn!(
            "ThemeProvider: subscribers still changing the scheme after {} rounds",
            MAX_DELIVERY_ROUNDS
        );
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(SchemeSelection::Auto, Appearance::Unknown)
    }
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = *self.inner.state.borrow();
        f.debug_struct("ThemeProvider")
            .field("bundle", &self.inner.bundle.name())
            .field("selection", &state.selection)
            .field("appearance", &state.appearance)
            .field("scheme", &state.resolved)
            .field("override", &self.has_override())
            .field("subscribers", &self.inner.observers.len())
            .finish()
    }
}

/// Builder for [`ThemeProvider`]
#[derive(Default)]
pub struct ThemeProviderBuilder {
    bundle: Option<ThemeBundle>,
    selection: SchemeSelection,
    appearance: Appearance,
    override_theme: Option<Arc<Theme>>,
}

impl ThemeProviderBuilder {
    /// Light/dark pair to resolve into (defaults to the standard themes)
    pub fn bundle(mut self, bundle: ThemeBundle) -> Self {
        self.bundle = Some(bundle);
        self
    }

    pub fn selection(mut self, selection: SchemeSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Query the initial appearance from a source
    pub fn appearance_source(mut self, source: &dyn AppearanceSource) -> Self {
        self.appearance = source.appearance();
        self
    }

    /// Always serve this theme, whatever the scheme (for tests and previews)
    pub fn override_theme(mut self, theme: impl Into<Arc<Theme>>) -> Self {
        self.override_theme = Some(theme.into());
        self
    }

    pub fn build(self) -> ThemeProvider {
        let bundle = self.bundle.unwrap_or_else(themes::standard_bundle);
        let state = State::new(self.selection, self.appearance);
        tracing::debug!(
            "ThemeProvider::build - {} selection={} appearance={} -> {}",
            bundle.name(),
            state.selection,
            state.appearance,
            state.resolved
        );
        ThemeProvider {
            inner: Rc::new(Inner {
                bundle,
                override_theme: self.override_theme,
                state: RefCell::new(state),
                observers: Observers::new(),
                delivering: Cell::new(false),
                stale: Cell::new(false),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedAppearance;
    use std::cell::Cell;

    #[test]
    fn test_initial_resolution() {
        let p = ThemeProvider::new(SchemeSelection::Auto, Appearance::Dark);
        assert_eq!(p.scheme(), ColorScheme::Dark);
        assert!(p.is_dark());
        assert_eq!(p.theme().scheme(), ColorScheme::Dark);

        let p = ThemeProvider::default();
        assert_eq!(p.scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_reselecting_is_noop() {
        let p = ThemeProvider::new(SchemeSelection::Light, Appearance::Unknown);
        let calls = Rc::new(Cell::new(0));
        let calls_in = calls.clone();
        p.subscribe(move |_| calls_in.set(calls_in.get() + 1));

        p.set_color_scheme(SchemeSelection::Light);
        assert_eq!(calls.get(), 0);

        p.set_color_scheme(SchemeSelection::Dark);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_selection_change_without_scheme_change_notifies() {
        let p = ThemeProvider::new(SchemeSelection::Auto, Appearance::Light);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = seen.clone();
        p.subscribe(move |c: &ThemeChange| seen_in.borrow_mut().push(c.scheme_changed()));

        p.set_color_scheme(SchemeSelection::Light);
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn test_toggle_from_auto_uses_appearance() {
        let p = ThemeProvider::new(SchemeSelection::Auto, Appearance::Dark);
        p.toggle();
        assert_eq!(p.selection(), SchemeSelection::Light);

        let p = ThemeProvider::new(SchemeSelection::Auto, Appearance::Unknown);
        p.toggle();
        assert_eq!(p.selection(), SchemeSelection::Dark);
    }

    #[test]
    fn test_appearance_ignored_when_explicit() {
        let p = ThemeProvider::new(SchemeSelection::Light, Appearance::Light);
        let calls = Rc::new(Cell::new(0));
        let calls_in = calls.clone();
        p.subscribe(move |_| calls_in.set(calls_in.get() + 1));

        p.set_appearance(Appearance::Dark);
        assert_eq!(p.scheme(), ColorScheme::Light);
        assert_eq!(p.appearance(), Appearance::Dark);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_override_theme_wins() {
        let custom = crate::themes::lumen::light()
            .to_builder()
            .name("Preview")
            .build();
        let p = ThemeProvider::builder()
            .selection(SchemeSelection::Dark)
            .override_theme(custom)
            .build();
        assert_eq!(p.theme().name(), "Preview");
        assert_eq!(p.scheme(), ColorScheme::Dark);
        assert!(p.has_override());
    }

    #[test]
    fn test_appearance_source() {
        let p = ThemeProvider::builder()
            .appearance_source(&FixedAppearance(Appearance::Dark))
            .build();
        assert!(p.is_dark());
        p.refresh_appearance(&FixedAppearance(Appearance::Light));
        assert!(p.is_light());
    }

    #[test]
    fn test_clones_share_state() {
        let a = ThemeProvider::default();
        let b = a.clone();
        b.set_color_scheme(SchemeSelection::Dark);
        assert!(a.is_dark());
        assert!(a.ptr_eq(&b));
    }
}
