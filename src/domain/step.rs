//! Generation stepping.
//!
//! Every neighbor count for generation N+1 is taken from a snapshot of
//! generation N, so cells already rewritten in this step are never read.
//! The board edge is clamped: a border cell's window shrinks instead of
//! wrapping to the opposite side.

use rayon::prelude::*;

use super::{Cell, Coord, GridState, Snapshot};

/// Count live cells in the clamped 3×3 window around `coord`, excluding
/// `coord` itself.
pub fn count_live_neighbors(snapshot: &Snapshot, coord: Coord) -> u8 {
    let (rows, cols) = snapshot.dimensions();
    let row_lo = coord.row.saturating_sub(1);
    let col_lo = coord.col.saturating_sub(1);
    let row_hi = (coord.row + 1).min(rows - 1);
    let col_hi = (coord.col + 1).min(cols - 1);

    let window = (row_lo..=row_hi)
        .flat_map(|row| (col_lo..=col_hi).map(move |col| Coord::new(row, col)))
        .filter(|&c| snapshot.get(c))
        .count() as u8;

    if snapshot.get(coord) { window - 1 } else { window }
}

fn next_cell(snapshot: &Snapshot, coord: Coord) -> Cell {
    snapshot
        .cell(coord)
        .evolve(count_live_neighbors(snapshot, coord))
}

/// Advance `grid` one generation in place (serial)
pub fn advance(grid: &mut GridState) {
    let snapshot = grid.snapshot();
    let (rows, cols) = snapshot.dimensions();

    for row in 0..rows {
        for col in 0..cols {
            let coord = Coord::new(row, col);
            grid.set(coord, next_cell(&snapshot, coord).is_alive());
        }
    }
}

/// Advance `grid` one generation in place, computing the next generation
/// with rayon before writing it back
pub fn advance_parallel(grid: &mut GridState) {
    let snapshot = grid.snapshot();
    let (rows, cols) = snapshot.dimensions();

    let next: Vec<Cell> = (0..rows * cols)
        .into_par_iter()
        .map(|idx| next_cell(&snapshot, Coord::new(idx / cols, idx % cols)))
        .collect();

    for (idx, cell) in next.into_iter().enumerate() {
        grid.set(Coord::new(idx / cols, idx % cols), cell.is_alive());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GridChange;

    fn alive_cells(grid: &GridState) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(c, _)| (c.row, c.col))
            .collect()
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut grid = GridState::with_alive(5, 5, &[(2, 2)]);
        advance(&mut grid);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = GridState::with_alive(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let before = grid.clone();
        advance(&mut grid);
        assert_eq!(grid, before);
        advance(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_blinker_has_period_two() {
        let horizontal = GridState::with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = GridState::with_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        let mut grid = horizontal.clone();
        advance(&mut grid);
        assert_eq!(grid, vertical);
        advance(&mut grid);
        assert_eq!(grid, horizontal);
    }

    #[test]
    fn test_row_of_five_uses_previous_generation_only() {
        // A naive in-place update would cascade along the row.
        let mut grid = GridState::with_alive(5, 7, &[(2, 1), (2, 2), (2, 3), (2, 4), (2, 5)]);
        advance(&mut grid);
        // Ends die, the middle three survive, and three births above and below.
        let expected = vec![
            (1, 2), (1, 3), (1, 4),
            (2, 2), (2, 3), (2, 4),
            (3, 2), (3, 3), (3, 4),
        ];
        assert_eq!(alive_cells(&grid), expected);
    }

    #[test]
    fn test_corner_window_is_clamped() {
        let grid = GridState::with_alive(4, 4, &[(0, 0), (3, 3), (0, 3), (3, 0)]);
        let snapshot = grid.snapshot();
        // Wrapping would see the other three corners.
        assert_eq!(count_live_neighbors(&snapshot, Coord::new(0, 0)), 0);

        let full = GridState::with_alive(3, 3, &[
            (0, 0), (0, 1), (0, 2),
            (1, 0), (1, 1), (1, 2),
            (2, 0), (2, 1), (2, 2),
        ]);
        let snapshot = full.snapshot();
        assert_eq!(count_live_neighbors(&snapshot, Coord::new(0, 0)), 3);
        assert_eq!(count_live_neighbors(&snapshot, Coord::new(0, 1)), 5);
        assert_eq!(count_live_neighbors(&snapshot, Coord::new(1, 1)), 8);
    }

    #[test]
    fn test_live_corner_dies_without_wrapping() {
        let mut grid = GridState::with_alive(3, 3, &[(0, 0), (2, 2), (0, 2)]);
        advance(&mut grid);
        // (1,1) sees all three; nobody else has enough.
        assert_eq!(alive_cells(&grid), vec![(1, 1)]);
    }

    #[test]
    fn test_single_column_grid() {
        let mut grid = GridState::with_alive(4, 1, &[(0, 0), (1, 0), (2, 0)]);
        advance(&mut grid);
        assert_eq!(alive_cells(&grid), vec![(1, 0)]);
    }

    #[test]
    fn test_changes_list_toggled_cells() {
        let mut grid = GridState::with_alive(3, 3, &[(1, 1)]);
        advance(&mut grid);
        assert_eq!(grid.take_changes(), vec![GridChange::Cell(Coord::new(1, 1))]);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = GridState::new(40, 33);
        serial.randomize(0.35);
        let mut parallel = serial.clone();

        for _ in 0..8 {
            advance(&mut serial);
            advance_parallel(&mut parallel);
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_empty_grid_is_noop() {
        let mut grid = GridState::new(0, 0);
        advance(&mut grid);
        advance_parallel(&mut grid);
        assert_eq!(grid.dimensions(), (0, 0));
    }
}
