use macroquad::prelude::*;

use crate::application::InputEvent;

/// Key bindings, checked in this order every render frame
pub const KEY_BINDINGS: [(KeyCode, InputEvent); 9] = [
    (KeyCode::Up, InputEvent::MoveUp),
    (KeyCode::Down, InputEvent::MoveDown),
    (KeyCode::Left, InputEvent::MoveLeft),
    (KeyCode::Right, InputEvent::MoveRight),
    (KeyCode::Enter, InputEvent::ToggleCreate),
    (KeyCode::Delete, InputEvent::ToggleRemove),
    (KeyCode::Escape, InputEvent::TogglePause),
    (KeyCode::R, InputEvent::Reset),
    (KeyCode::C, InputEvent::Clear),
];

/// Keys pressed this frame, plus `Quit` when the window was asked to close.
/// Needs `prevent_quit()` to have been called for the close request to arrive here.
pub fn poll(events: &mut Vec<InputEvent>) {
    events.extend(
        KEY_BINDINGS
            .iter()
            .filter(|(key, _)| is_key_pressed(*key))
            .map(|&(_, event)| event),
    );
    if is_quit_requested() {
        events.push(InputEvent::Quit);
    }
}
