//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit or ResetScene.
//! Arrow keys are NOT mapped here - they go directly to BodyController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Rebuild the scene from scratch (R key)
    ResetScene,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Pause or resume the simulation (P key)
    TogglePause,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetScene),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyP => Some(InputAction::TogglePause),
            _ => None,
        }
    }
}
