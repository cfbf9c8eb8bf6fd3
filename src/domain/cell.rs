/// Life value of a single board position. Fresh boards are all `Dead`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between alive and dead, used by single-cell clicks.
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Value for the next generation given the live count in the clamped
    /// window around this cell. A live cell needs two or three live
    /// neighbors to stay; a dead one comes to life on exactly three.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lonely_cell_dies() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_two_or_three_neighbors_keep_cell_alive() {
        for n in [2, 3] {
            assert_eq!(Cell::Alive.evolve(n), Cell::Alive);
        }
    }

    #[test]
    fn test_crowded_cell_dies() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead, "{n} neighbors");
        }
    }

    #[test]
    fn test_dead_cell_wakes_only_on_three() {
        let woken: Vec<u8> = (0..=8).filter(|&n| Cell::Dead.evolve(n).is_alive()).collect();
        assert_eq!(woken, vec![3]);
    }

    #[test]
    fn test_toggle_round_trips_through_bool() {
        for alive in [false, true] {
            let cell = Cell::from(alive);
            assert_eq!(cell.is_alive(), alive);
            assert_eq!(cell.toggle().is_alive(), !alive);
        }
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
