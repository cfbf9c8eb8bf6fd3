//! Drag selection: pointer down → move → up paints a rectangle alive.

use log::debug;

use super::{Coord, GridState};

/// Inclusive, normalized rectangle of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRect {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl SelectionRect {
    /// Rectangle spanned by two corners in any order
    pub fn spanning(a: Coord, b: Coord) -> Self {
        Self {
            min_row: a.row.min(b.row),
            max_row: a.row.max(b.row),
            min_col: a.col.min(b.col),
            max_col: a.col.max(b.col),
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (self.min_row..=self.max_row).contains(&coord.row)
            && (self.min_col..=self.max_col).contains(&coord.col)
    }

    /// Cells inside the rectangle, row-major
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        let (min_col, max_col) = (self.min_col, self.max_col);
        (self.min_row..=self.max_row)
            .flat_map(move |row| (min_col..=max_col).map(move |col| Coord::new(row, col)))
    }

    pub fn len(&self) -> usize {
        (self.max_row - self.min_row + 1) * (self.max_col - self.min_col + 1)
    }
}

/// Preview styling for a cell inside the pending rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    SelectedAlive,
    SelectedDead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Dragging { anchor: Coord, current: Coord },
}

/// What a released gesture did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No drag in progress, or released outside the grid
    Ignored,
    /// Released on the cell it started on; belongs to the single-cell toggle path
    Click(Coord),
    /// Every cell in the rectangle was set alive
    Painted(SelectionRect),
}

/// Tracks one drag gesture at a time. Coordinates come in already resolved
/// to grid cells; `None` means the pointer is outside the grid.
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging { .. })
    }

    /// Current normalized rectangle while dragging
    pub fn rect(&self) -> Option<SelectionRect> {
        match self.state {
            SelectionState::Dragging { anchor, current } => {
                Some(SelectionRect::spanning(anchor, current))
            }
            SelectionState::Idle => None,
        }
    }

    pub fn gesture_start(&mut self, coord: Option<Coord>) {
        self.state = match coord {
            Some(cell) => SelectionState::Dragging { anchor: cell, current: cell },
            None => SelectionState::Idle,
        };
    }

    /// Track the pointer; moves outside the grid keep the last cell
    pub fn gesture_move(&mut self, coord: Option<Coord>) -> Option<SelectionRect> {
        if let (SelectionState::Dragging { current, .. }, Some(cell)) = (&mut self.state, coord) {
            *current = cell;
        }
        self.rect()
    }

    /// Finish the gesture, painting the rectangle alive unless the pointer
    /// never left the starting cell. Always returns to idle.
    pub fn gesture_end(&mut self, coord: Option<Coord>, grid: &mut GridState) -> GestureOutcome {
        let state = std::mem::take(&mut self.state);
        let (SelectionState::Dragging { anchor, .. }, Some(end)) = (state, coord) else {
            return GestureOutcome::Ignored;
        };

        if anchor == end {
            return GestureOutcome::Click(end);
        }

        let rect = SelectionRect::spanning(anchor, end);
        rect.cells().for_each(|cell| grid.set(cell, true));
        debug!("painted {} cells from {anchor} to {end}", rect.len());
        GestureOutcome::Painted(rect)
    }

    /// Preview style for `coord`, if it lies in the pending rectangle
    pub fn highlight(&self, coord: Coord, grid: &GridState) -> Option<Highlight> {
        self.rect()
            .filter(|rect| rect.contains(coord))
            .map(|_| {
                if grid.get(coord) {
                    Highlight::SelectedAlive
                } else {
                    Highlight::SelectedDead
                }
            })
    }

    /// Every highlighted cell of the pending rectangle
    pub fn preview(&self, grid: &GridState) -> Vec<(Coord, Highlight)> {
        self.rect()
            .into_iter()
            .flat_map(|rect| rect.cells())
            .filter_map(|cell| self.highlight(cell, grid).map(|h| (cell, h)))
            .collect()
    }
}
