//! Input mapping: keyboard, swipe gestures and on-screen buttons all end up
//! as the same [`InputAction`]s.

pub mod handler;
pub mod swipe;

pub use handler::KeyboardMapper;
pub use swipe::SwipeTracker;

use crossterm::event::KeyEvent;

use crate::game::InputAction;

/// On-screen controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Pause,
    Reset,
}

/// A raw input from any modality
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32 },
    TouchEnd,
    Button(Button),
}

pub struct InputMapper {
    keyboard: KeyboardMapper,
    swipe: SwipeTracker,
}

impl InputMapper {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            keyboard: KeyboardMapper::new(),
            swipe: SwipeTracker::new(swipe_threshold),
        }
    }

    pub fn map(&mut self, event: InputEvent) -> InputAction {
        match event {
            InputEvent::Key(key) => self.keyboard.handle_key_event(key),
            InputEvent::TouchStart { x, y } => {
                self.swipe.begin(x, y);
                InputAction::None
            }
            InputEvent::TouchMove { x, y } => self
                .swipe
                .update(x, y)
                .map(InputAction::Turn)
                .unwrap_or(InputAction::None),
            InputEvent::TouchEnd => {
                self.swipe.cancel();
                InputAction::None
            }
            InputEvent::Button(Button::Pause) => InputAction::TogglePause,
            InputEvent::Button(Button::Reset) => InputAction::Reset,
        }
    }
}
