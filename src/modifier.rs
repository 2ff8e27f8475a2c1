//! Difficulty modifiers.
//!
//! Each modifier pairs a persistent `enabled` setting with a round-local
//! `temp_disabled` override. The override is set by "reveal early" actions
//! and cleared on a win, so the modifier is back for the next round without
//! the player having to re-enable it.

use crate::settings::Settings;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ModifierMode {
    pub enabled: bool,
    pub temp_disabled: bool,
}

impl ModifierMode {
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            temp_disabled: false,
        }
    }

    /// Persistent setting change; the override is left alone.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// "Reveal early" for the rest of the round; `enabled` is left alone.
    pub fn set_temp_disabled(&mut self) {
        self.temp_disabled = true;
    }

    pub fn reset_temp_disabled_on_win(&mut self) {
        self.temp_disabled = false;
    }

    /// Whether the modifier currently alters the display.
    pub fn is_active(&self, round_won: bool) -> bool {
        self.enabled && !self.temp_disabled && !round_won
    }
}

/// The two independent modifiers of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Modifiers {
    pub hide_image: ModifierMode,
    pub rotation: ModifierMode,
}

impl Modifiers {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            hide_image: ModifierMode::new(settings.no_image_mode),
            rotation: ModifierMode::new(settings.rotation_mode),
        }
    }

    /// Re-applies changed settings; overrides survive.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.hide_image.set_enabled(settings.no_image_mode);
        self.rotation.set_enabled(settings.rotation_mode);
    }

    /// Win-transition side effect: both overrides cleared, `enabled` kept.
    pub fn reset_temp_disabled_on_win(&mut self) {
        self.hide_image.reset_temp_disabled_on_win();
        self.rotation.reset_temp_disabled_on_win();
    }

    /// "Show map" is offered while the image is hidden.
    pub fn can_reveal_image(&self, round_won: bool) -> bool {
        self.hide_image.is_active(round_won)
    }

    /// "Cancel rotation" is only offered once the image is visible.
    pub fn can_cancel_rotation(&self, round_won: bool) -> bool {
        self.rotation.is_active(round_won) && !self.hide_image.is_active(round_won)
    }
}

/// Angle and scale for showing the target outline rotated.
///
/// The scale shrinks the rotated square image so it still fits its box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    angle: f64,
}

impl Rotation {
    /// `angle` in degrees, reduced to [0, 360).
    pub fn new(angle: f64) -> Self {
        let angle = if angle.is_finite() {
            angle.rem_euclid(360.0)
        } else {
            0.0
        };
        Self { angle }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random_range(0.0..360.0))
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// `1 / (cos(45° − angle mod 90°) · √2)`: 1 for right angles, `1/√2` at 45°.
    pub fn scale(&self) -> f64 {
        let normalized = (45.0 - self.angle % 90.0).to_radians();
        1.0 / (normalized.cos() * std::f64::consts::SQRT_2)
    }
}
