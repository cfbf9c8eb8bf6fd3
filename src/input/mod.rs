use macroquad::miniquad::window::{clipboard_get, clipboard_set};
use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui::{self, Button, Notice};

/// Feed left-button drags over the grid into the selection gesture.
/// Presses over the panel start nothing, so button clicks never paint.
pub fn handle_gestures(state: &mut GameState, mouse_pos: (f32, f32)) {
    let dimensions = state.grid.dimensions();
    let cell = if mouse_pos.0 < ui::grid_area_width() {
        ui::cell_at(mouse_pos, ui::cell_size(dimensions), dimensions)
    } else {
        None
    };

    if is_mouse_button_pressed(MouseButton::Left) {
        state.gesture_start(cell);
    } else if is_mouse_button_down(MouseButton::Left) && state.selection.is_dragging() {
        state.gesture_move(cell);
    }

    if is_mouse_button_released(MouseButton::Left) {
        if state.selection.is_dragging() {
            state.gesture_end(cell);
        }
        state.release_step();
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(state: &mut GameState) -> Option<Notice> {
    type KeyAction = (KeyCode, fn(&mut GameState));

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, GameState::toggle_auto_step),
        (KeyCode::N, GameState::step),
        (KeyCode::Right, GameState::step),
        (KeyCode::R, GameState::randomize),
        (KeyCode::P, GameState::toggle_algorithm),
        (KeyCode::Up, |s| s.adjust_speed(1)),
        (KeyCode::Down, |s| s.adjust_speed(-1)),
        (KeyCode::Delete, GameState::clear),
    ];

    let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    if ctrl && is_key_pressed(KeyCode::C) {
        return Some(copy_seed(state));
    }
    if ctrl && is_key_pressed(KeyCode::V) {
        return Some(paste_seed(state));
    }
    if !ctrl && is_key_pressed(KeyCode::C) {
        state.clear();
    }

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(state));
    None
}

/// Process button presses
pub fn process_button_clicks(state: &mut GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> Option<Notice> {
    let pressed = buttons.iter().position(|btn| btn.is_pressed(mouse_pos))?;
    match pressed {
        ui::STEP_BUTTON => state.press_step(),
        ui::AUTO_BUTTON => state.toggle_auto_step(),
        ui::CLEAR_BUTTON => state.clear(),
        ui::RANDOM_BUTTON => state.randomize(),
        ui::ALGORITHM_BUTTON => state.toggle_algorithm(),
        ui::COPY_SEED_BUTTON => return Some(copy_seed(state)),
        ui::PASTE_SEED_BUTTON => return Some(paste_seed(state)),
        _ => {}
    }
    None
}

fn copy_seed(state: &GameState) -> Notice {
    let token = state.export_seed();
    clipboard_set(&token);
    log::info!("seed copied: {token}");
    Notice::Info("Seed copied to clipboard".to_string())
}

fn paste_seed(state: &mut GameState) -> Notice {
    let Some(token) = clipboard_get() else {
        return Notice::Error("Clipboard is empty".to_string());
    };
    match state.import_seed(&token) {
        Ok(()) => Notice::Info("Seed loaded".to_string()),
        Err(e) => Notice::Error(e.to_string()),
    }
}
