mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

use crate::domain::Coord;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
/// Share of the grid area the board may cover
const GRID_FILL: f32 = 0.95;

/// Button order; `input::process_button_clicks` dispatches on these indices
pub const STEP_BUTTON: usize = 0;
pub const AUTO_BUTTON: usize = 1;
pub const CLEAR_BUTTON: usize = 2;
pub const RANDOM_BUTTON: usize = 3;
pub const ALGORITHM_BUTTON: usize = 4;
pub const COPY_SEED_BUTTON: usize = 5;
pub const PASTE_SEED_BUTTON: usize = 6;

/// Message shown under the controls after a seed or clipboard action
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Largest square cell that fits `rows`×`cols` into the given area
pub fn fit_cell_size(area_width: f32, area_height: f32, rows: usize, cols: usize) -> f32 {
    if rows == 0 || cols == 0 {
        return 0.0;
    }
    let by_width = area_width * GRID_FILL / cols as f32;
    let by_height = area_height * GRID_FILL / rows as f32;
    by_width.min(by_height).max(1.0)
}

/// Cell size for the current window
pub fn cell_size(dimensions: (usize, usize)) -> f32 {
    fit_cell_size(grid_area_width(), grid_area_height(), dimensions.0, dimensions.1)
}

/// Resolve a screen position to the grid cell under it. The board is drawn
/// from the top-left corner of the window.
pub fn cell_at(pos: (f32, f32), cell_size: f32, dimensions: (usize, usize)) -> Option<Coord> {
    let (x, y) = pos;
    if x < 0.0 || y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let coord = Coord::new((y / cell_size) as usize, (x / cell_size) as usize);
    (coord.row < dimensions.0 && coord.col < dimensions.1).then_some(coord)
}

/// Top-left screen position of a cell
pub fn cell_origin(coord: Coord, cell_size: f32) -> (f32, f32) {
    (coord.col as f32 * cell_size, coord.row as f32 * cell_size)
}

/// Create UI buttons with standard layout
pub fn create_buttons(algorithm_name: &str) -> Vec<Button> {
    let px = panel_x();
    let labels = ["Step", "Auto", "Clear", "Random", algorithm_name, "Copy Seed", "Paste Seed"];
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Button::new(px, 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0), PANEL_WIDTH, BUTTON_HEIGHT, *label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_cell_size_uses_tighter_axis() {
        // 40 columns over 800px is 19, 24 rows over 600px is 23.75
        let size = fit_cell_size(800.0, 600.0, 24, 40);
        assert!((size - 19.0).abs() < 1e-4);
    }

    #[test]
    fn test_fit_cell_size_empty_grid() {
        assert_eq!(fit_cell_size(800.0, 600.0, 0, 10), 0.0);
    }

    #[test]
    fn test_cell_at_inside_and_outside() {
        let dims = (3, 4);
        assert_eq!(cell_at((25.0, 15.0), 10.0, dims), Some(Coord::new(1, 2)));
        assert_eq!(cell_at((39.9, 29.9), 10.0, dims), Some(Coord::new(2, 3)));
        assert_eq!(cell_at((40.0, 5.0), 10.0, dims), None);
        assert_eq!(cell_at((5.0, 30.0), 10.0, dims), None);
        assert_eq!(cell_at((-1.0, 5.0), 10.0, dims), None);
    }

    #[test]
    fn test_cell_origin_inverts_cell_at() {
        let coord = Coord::new(2, 3);
        let (x, y) = cell_origin(coord, 12.0);
        assert_eq!(cell_at((x + 1.0, y + 1.0), 12.0, (5, 5)), Some(coord));
    }
}
