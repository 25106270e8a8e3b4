//! Opacity tokens

use serde::Serialize;

/// Alpha multipliers applied to whole components by interaction state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpacityTokens {
    /// Disabled controls
    pub disabled: f32,
    /// Applied on top of the resting value while a finger is down
    pub pressed: f32,
    /// Controls waiting on an async result
    pub loading: f32,
    /// Scrim behind modal surfaces
    pub overlay: f32,
}

impl OpacityTokens {
    /// Resting opacity of a control; disabled wins over loading
    pub fn resting(&self, disabled: bool, loading: bool) -> f32 {
        if disabled {
            self.disabled
        } else if loading {
            self.loading
        } else {
            1.0
        }
    }

    /// Opacity while pressed, starting from a resting value
    pub fn pressed_from(&self, resting: f32) -> f32 {
        resting * self.pressed
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        OpacityTokens {
            disabled: 0.6,
            pressed: 0.85,
            loading: 0.8,
            overlay: 0.5,
        }
    }
}
