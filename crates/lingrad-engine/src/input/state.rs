use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState};

/// Current input state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Pointer position in logical pixels, `None` while outside the window.
    pub pointer_pos: Option<Vec2>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoid stuck keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(pos) => {
                self.pointer_pos = Some(*pos);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        self.keys_down.remove(key);
                    }
                }
            }

            InputEvent::PointerButton(b) => {
                self.pointer_pos = Some(b.pos);
                self.modifiers = b.modifiers;
                match b.state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(b.button) {
                            frame.buttons_pressed.insert(b.button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(&b.button) {
                            frame.buttons_released.insert(b.button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButtonEvent;

    fn press(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            pos: Vec2::new(x, y),
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn button_press_and_release_are_recorded() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Pressed, 3.0, 4.0));
        assert!(state.buttons_down.contains(&MouseButton::Left));
        assert!(frame.buttons_pressed.contains(&MouseButton::Left));
        assert_eq!(state.pointer_pos, Some(Vec2::new(3.0, 4.0)));

        state.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Released, 5.0, 6.0));
        assert!(!state.buttons_down.contains(&MouseButton::Left));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn focus_loss_clears_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Pressed, 0.0, 0.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.buttons_down.contains(&MouseButton::Left));
    }

    #[test]
    fn pointer_left_clears_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMoved(Vec2::new(1.0, 2.0)));
        assert_eq!(state.pointer_pos, Some(Vec2::new(1.0, 2.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn frame_clear_keeps_state() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Pressed, 0.0, 0.0));
        frame.clear();
        assert!(frame.events.is_empty());
        assert!(frame.buttons_pressed.is_empty());
        assert!(state.buttons_down.contains(&MouseButton::Left));
    }
}
