use raylib::prelude::*;

use mazoku::core::game::Input;

fn down(window: &RaylibHandle, keys: &[KeyboardKey]) -> bool {
    keys.iter().any(|k| window.is_key_down(*k))
}

/// Polls the keyboard into one tick of input: WASD or arrows to move and
/// turn, R for a new maze, M for the minimap, F1 for the debug overlay.
pub fn process_events(window: &RaylibHandle) -> Input {
    Input {
        forward: down(window, &[KeyboardKey::KEY_W, KeyboardKey::KEY_UP]),
        backward: down(window, &[KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN]),
        turn_left: down(window, &[KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT]),
        turn_right: down(window, &[KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT]),
        regenerate: window.is_key_pressed(KeyboardKey::KEY_R),
        toggle_minimap: window.is_key_pressed(KeyboardKey::KEY_M),
        toggle_debug: window.is_key_pressed(KeyboardKey::KEY_F1),
    }
}
