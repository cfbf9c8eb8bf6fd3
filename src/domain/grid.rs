use std::fmt;

use super::Cell;

/// Zero-based grid position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// "row.col", only used for log output.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Change notification queued by every effective mutation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GridChange {
    Cell(Coord),
    Full,
}

/// GridState owns the rows×cols board of life values, stored row-major.
///
/// Coordinates outside the board are a caller bug: every accessor panics
/// instead of clamping.
#[derive(Clone, Debug)]
pub struct GridState {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    changes: Vec<GridChange>,
}

impl GridState {
    /// Create a new grid with all cells dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
            changes: Vec::new(),
        }
    }

    /// Build a grid with the listed cells alive
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &cell in alive {
            grid.set(cell.into(), true);
        }
        grid.changes.clear();
        grid
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "cell {coord} outside {}x{} grid",
            self.rows,
            self.cols
        );
        coord.row * self.cols + coord.col
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    pub fn get(&self, coord: Coord) -> bool {
        self.cell(coord).is_alive()
    }

    /// Set a cell's life value. Writing the value it already holds is not a change.
    pub fn set(&mut self, coord: Coord, alive: bool) {
        let idx = self.index(coord);
        let cell = Cell::from(alive);
        if self.cells[idx] != cell {
            self.cells[idx] = cell;
            self.push_change(coord);
        }
    }

    pub fn toggle(&mut self, coord: Coord) {
        let idx = self.index(coord);
        self.cells[idx] = self.cells[idx].toggle();
        self.push_change(coord);
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self.mark_full_change();
    }

    /// Bring each cell to life with probability `density`
    pub fn randomize(&mut self, density: f64) {
        use rand::Rng;

        let density = density.clamp(0.0, 1.0);
        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell::from(rng.random_bool(density));
        });
        self.mark_full_change();
    }

    /// Immutable copy of the current generation
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.clone(),
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Coord::new(idx / self.cols, idx % self.cols), cell))
    }

    /// Drain pending change notifications. A `Full` entry supersedes
    /// everything queued before it. The queue never holds more than
    /// rows×cols entries, even if nobody drains it.
    pub fn take_changes(&mut self) -> Vec<GridChange> {
        std::mem::take(&mut self.changes)
    }

    /// Once the queue holds a `Full`, or would list more entries than there
    /// are cells, it collapses to a single `Full`.
    fn push_change(&mut self, coord: Coord) {
        if self.changes.first() == Some(&GridChange::Full) {
            return;
        }
        if self.changes.len() >= self.rows * self.cols {
            self.mark_full_change();
        } else {
            self.changes.push(GridChange::Cell(coord));
        }
    }

    fn mark_full_change(&mut self) {
        self.changes.clear();
        self.changes.push(GridChange::Full);
    }
}

impl PartialEq for GridState {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for GridState {}

/// Read-only copy of a grid generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Snapshot {
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        assert!(coord.row < self.rows && coord.col < self.cols);
        self.cells[coord.row * self.cols + coord.col]
    }

    pub fn get(&self, coord: Coord) -> bool {
        self.cell(coord).is_alive()
    }
}
