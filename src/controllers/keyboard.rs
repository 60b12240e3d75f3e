// src/controllers/keyboard.rs
//
// Key bindings. Most parameter keys act while held and are turned into
// per-second rates; the rest fire a single command on press.

use nannou::prelude::Key;
use std::collections::HashMap;

use super::scene::{ParameterRates, SceneCommand, SceneMode};
use crate::config::ControlsConfig;
use crate::models::{Vec2d, GRID_COUNT};

pub const HELP_TEXT: &str = "\
1-5      gamma up (shift: down)
Q W E R T  rotate pencil 0-4 (shift: clockwise)
arrows   pan / move the Fibonacci line
, .      zoom out / in
= -      inflate / deflate
         (gamma grows each time, Backspace resets)
G        random gamma
Backspace  reset
Tab      switch scene
Space    pause
H        help
P        debug";

/// A control that stays active while its key is down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldControl {
    Gamma(usize),
    Rotation(usize),
    Horizontal,
    Vertical,
    Zoom,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// Held control with direction `+1.0` or `-1.0`
    Hold(HeldControl, f64),
    Command(SceneCommand),
    ToggleHelp,
    ToggleDebug,
}

const GAMMA_KEYS: [Key; GRID_COUNT] = [Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5];
const ROTATION_KEYS: [Key; GRID_COUNT] = [Key::Q, Key::W, Key::E, Key::R, Key::T];

pub fn action_for_key(key: Key, shift: bool) -> Option<KeyAction> {
    let sign = if shift { -1.0 } else { 1.0 };

    if let Some(j) = GAMMA_KEYS.iter().position(|&k| k == key) {
        return Some(KeyAction::Hold(HeldControl::Gamma(j), sign));
    }
    if let Some(j) = ROTATION_KEYS.iter().position(|&k| k == key) {
        return Some(KeyAction::Hold(HeldControl::Rotation(j), sign));
    }

    let action = match key {
        Key::Left => KeyAction::Hold(HeldControl::Horizontal, -1.0),
        Key::Right => KeyAction::Hold(HeldControl::Horizontal, 1.0),
        Key::Down => KeyAction::Hold(HeldControl::Vertical, -1.0),
        Key::Up => KeyAction::Hold(HeldControl::Vertical, 1.0),
        Key::Comma => KeyAction::Hold(HeldControl::Zoom, -1.0),
        Key::Period => KeyAction::Hold(HeldControl::Zoom, 1.0),
        Key::Equals | Key::Plus | Key::NumpadAdd => KeyAction::Command(SceneCommand::Inflate),
        Key::Minus | Key::NumpadSubtract => KeyAction::Command(SceneCommand::Deflate),
        Key::G => KeyAction::Command(SceneCommand::RandomGamma),
        Key::Back => KeyAction::Command(SceneCommand::Reset),
        Key::Tab => KeyAction::Command(SceneCommand::SwitchScene),
        Key::Space => KeyAction::Command(SceneCommand::TogglePause),
        Key::H => KeyAction::ToggleHelp,
        Key::P => KeyAction::ToggleDebug,
        _ => return None,
    };
    Some(action)
}

#[derive(Debug, Default)]
pub struct KeyboardController {
    held: HashMap<Key, (HeldControl, f64)>,
}

impl KeyboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record held controls; returns the actions that fire once
    pub fn key_pressed(&mut self, key: Key, shift: bool) -> Option<KeyAction> {
        match action_for_key(key, shift)? {
            KeyAction::Hold(control, sign) => {
                self.held.insert(key, (control, sign));
                None
            }
            action => Some(action),
        }
    }

    pub fn key_released(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_holding(&self) -> bool {
        !self.held.is_empty()
    }

    /// Rates of every held control. Arrows pan the camera in the Penrose
    /// scene and steer the cutting line in the Fibonacci scene.
    pub fn rates(&self, mode: SceneMode, controls: &ControlsConfig) -> ParameterRates {
        let mut rates = ParameterRates::default();
        for &(control, sign) in self.held.values() {
            match (control, mode) {
                (HeldControl::Gamma(j), _) => rates.gamma[j] += sign * controls.gamma_speed,
                (HeldControl::Rotation(j), _) => rates.rotation[j] += sign * controls.rotation_speed,
                (HeldControl::Zoom, _) => rates.zoom += sign * (1.0 + controls.zoom_speed).ln(),
                (HeldControl::Horizontal, SceneMode::Penrose) => {
                    rates.pan += Vec2d::new(sign * controls.pan_speed, 0.0)
                }
                (HeldControl::Vertical, SceneMode::Penrose) => {
                    rates.pan += Vec2d::new(0.0, sign * controls.pan_speed)
                }
                (HeldControl::Horizontal, SceneMode::Fibonacci) => {
                    rates.line_angle -= sign * controls.line_angle_speed
                }
                (HeldControl::Vertical, SceneMode::Fibonacci) => {
                    rates.line_offset += sign * controls.line_offset_speed
                }
            }
        }
        rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_key_map() {
        assert_eq!(
            action_for_key(Key::Key3, false),
            Some(KeyAction::Hold(HeldControl::Gamma(2), 1.0))
        );
        assert_eq!(
            action_for_key(Key::T, true),
            Some(KeyAction::Hold(HeldControl::Rotation(4), -1.0))
        );
        assert_eq!(
            action_for_key(Key::Equals, false),
            Some(KeyAction::Command(SceneCommand::Inflate))
        );
        assert_eq!(
            action_for_key(Key::Back, false),
            Some(KeyAction::Command(SceneCommand::Reset))
        );
        assert_eq!(action_for_key(Key::H, false), Some(KeyAction::ToggleHelp));
        assert_eq!(action_for_key(Key::Z, false), None);
    }

    #[test]
    fn test_held_keys_become_rates() {
        let controls = ControlsConfig::default();
        let mut keyboard = KeyboardController::new();
        assert_eq!(keyboard.key_pressed(Key::Key1, false), None);
        assert_eq!(keyboard.key_pressed(Key::W, true), None);
        assert_eq!(keyboard.key_pressed(Key::Right, false), None);

        let rates = keyboard.rates(SceneMode::Penrose, &controls);
        assert_relative_eq!(rates.gamma[0], controls.gamma_speed);
        assert_relative_eq!(rates.rotation[1], -controls.rotation_speed);
        assert_relative_eq!(rates.pan.x, controls.pan_speed);

        let fibonacci = keyboard.rates(SceneMode::Fibonacci, &controls);
        assert_eq!(fibonacci.pan, Vec2d::zeros());
        assert_relative_eq!(fibonacci.line_angle, -controls.line_angle_speed);

        keyboard.key_released(Key::Key1);
        keyboard.key_released(Key::W);
        keyboard.key_released(Key::Right);
        assert!(!keyboard.is_holding());
        assert!(keyboard.rates(SceneMode::Penrose, &controls).is_idle());
    }

    #[test]
    fn test_commands_fire_on_press_only() {
        let mut keyboard = KeyboardController::new();
        assert_eq!(
            keyboard.key_pressed(Key::Tab, false),
            Some(KeyAction::Command(SceneCommand::SwitchScene))
        );
        assert!(!keyboard.is_holding());
    }

    #[test]
    fn test_zoom_keys_are_symmetric() {
        let controls = ControlsConfig::default();
        let mut keyboard = KeyboardController::new();
        keyboard.key_pressed(Key::Period, false);
        let rates = keyboard.rates(SceneMode::Penrose, &controls);
        assert_relative_eq!(rates.zoom.exp(), 1.0 + controls.zoom_speed, epsilon = 1e-12);

        keyboard.key_pressed(Key::Comma, false);
        assert_relative_eq!(keyboard.rates(SceneMode::Penrose, &controls).zoom, 0.0);
    }
}
