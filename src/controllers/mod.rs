pub mod keyboard;
pub mod osc;
pub mod scene;

pub use keyboard::{action_for_key, HeldControl, KeyAction, KeyboardController, HELP_TEXT};
pub use osc::{parse_message, OscController};
pub use scene::{ParameterRates, SceneCommand, SceneMode, SceneState};
