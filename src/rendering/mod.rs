use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{Coord, GridChange, Highlight};
use crate::ui::{self, Button, Notice, panel_x, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const SELECTED_ALIVE_COLOR: Color = Color::new(0.35, 0.85, 1.0, 1.0);
const SELECTED_DEAD_COLOR: Color = Color::new(0.2, 0.35, 0.55, 1.0);

/// Draw the board, tinting cells inside a pending drag selection
pub fn draw_grid(state: &GameState) {
    let dimensions = state.grid.dimensions();
    let cell_size = ui::cell_size(dimensions);
    let draw_grid_lines = cell_size >= 4.0;

    for (coord, cell) in state.grid.iter_cells() {
        let (x, y) = ui::cell_origin(coord, cell_size);
        let color = match state.selection.highlight(coord, &state.grid) {
            Some(Highlight::SelectedAlive) => SELECTED_ALIVE_COLOR,
            Some(Highlight::SelectedDead) => SELECTED_DEAD_COLOR,
            None if cell.is_alive() => ALIVE_COLOR,
            None => DEAD_COLOR,
        };
        draw_rectangle(x, y, cell_size, cell_size, color);

        if draw_grid_lines {
            draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Count of cells redrawn since the last frame, for the panel readout.
/// Drains the grid's change queue.
pub fn pending_redraws(state: &mut GameState) -> usize {
    let (rows, cols) = state.grid.dimensions();
    state
        .grid
        .take_changes()
        .iter()
        .map(|change| match change {
            GridChange::Cell(_) => 1,
            GridChange::Full => rows * cols,
        })
        .sum()
}

fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons, status and the last notice
pub fn draw_controls(
    state: &GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    notice: Option<&Notice>,
    redraws: usize,
) {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().enumerate().for_each(|(idx, btn)| {
        let active = idx == ui::AUTO_BUTTON && state.auto_step.is_running();
        btn.draw(mouse_pos, active);
    });

    let px = panel_x();
    let (rows, cols) = state.grid.dimensions();
    let hovered = ui::cell_at(mouse_pos, ui::cell_size((rows, cols)), (rows, cols))
        .filter(|_| mouse_pos.0 < ui::grid_area_width())
        .map(|c: Coord| c.to_string())
        .unwrap_or_else(|| "-".to_string());

    let labels = [
        (format!("Grid: {rows}x{cols}"), 360.0, 14.0, GRAY),
        (format!("Cell: {hovered}"), 378.0, 14.0, GRAY),
        (format!("Population: {}", state.grid.population()), 396.0, 14.0, GRAY),
        (format!("Changed: {redraws}"), 414.0, 14.0, GRAY),
        (format!("Evolve: {:.2}ms", state.last_evolution_time_ms), 432.0, 14.0, GRAY),
        ("Generation:".to_string(), 470.0, 16.0, WHITE),
        (state.generation.to_string(), 490.0, 20.0, ALIVE_COLOR),
        (format!("Every {}ms", state.auto_step.interval_ms()), 520.0, 14.0, GRAY),
        (
            if state.auto_step.is_running() { "Running" } else { "Paused" }.to_string(),
            540.0,
            16.0,
            if state.auto_step.is_running() { GREEN } else { ORANGE },
        ),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px + 8.0, *y, *size, *color);
    });

    let controls = [
        "Drag: paint alive",
        "Click: toggle cell",
        "Space: auto  N: step",
        "C: clear  R: random",
        "Ctrl+C/V: seed",
    ];
    controls.iter().enumerate().for_each(|(i, text)| {
        draw_text_label(text, px + 8.0, 580.0 + i as f32 * 14.0, 12.0, GRAY);
    });

    if let Some(notice) = notice {
        let (text, color) = match notice {
            Notice::Info(text) => (text, LIGHTGRAY),
            Notice::Error(text) => (text, RED),
        };
        draw_text_label(text, 8.0, screen_height() - 10.0, 16.0, color);
    }
}
