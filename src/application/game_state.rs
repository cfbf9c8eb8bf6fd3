use log::{debug, info, warn};

use crate::domain::{seed, Algorithm, Coord, GestureOutcome, GridState, SeedError, SelectionController};
use super::{AutoStepper, Config};

/// Interval change per speed key press
const SPEED_STEP_MS: i64 = 25;

/// GameState orchestrates the simulation.
/// It is the single owner of the grid and lends it to the domain
/// components one call at a time.
pub struct GameState {
    pub grid: GridState,
    pub selection: SelectionController,
    pub auto_step: AutoStepper,
    pub algorithm: Algorithm,
    pub config: Config,
    pub generation: u64,
    pub last_evolution_time_ms: f32,
    /// Step button is held down; its release ends any auto-stepping it began
    step_held: bool,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        Self {
            grid: GridState::new(config.rows, config.cols),
            selection: SelectionController::new(),
            auto_step: AutoStepper::new(config.ms_per_auto_step),
            algorithm: Algorithm::default(),
            config,
            generation: 0,
            last_evolution_time_ms: 0.0,
            step_held: false,
        }
    }

    /// Discard the board and rebuild it at the new size
    pub fn resize(&mut self, rows: usize, cols: usize) {
        info!("resizing board to {rows}x{cols}");
        self.grid = GridState::new(rows, cols);
        self.selection = SelectionController::new();
        self.auto_step.stop();
        self.generation = 0;
    }

    /// Advance one generation
    pub fn step(&mut self) {
        let start = std::time::Instant::now();
        self.algorithm.advance(&mut self.grid);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }

    /// Update by one frame; steps when the auto-stepper says a generation is due
    pub fn tick(&mut self, delta_time: f32) {
        if self.auto_step.tick(delta_time) {
            self.step();
        }
    }

    pub fn toggle_auto_step(&mut self) {
        if self.auto_step.is_running() {
            self.auto_step.stop();
        } else {
            self.auto_step.start(self.auto_step.interval_ms());
        }
    }

    /// Step button pressed: one generation now, auto-step if held long enough
    pub fn press_step(&mut self) {
        self.step();
        if !self.auto_step.is_running() {
            self.step_held = true;
            self.auto_step.arm(self.config.delay_before_auto_ms);
        }
    }

    /// Pointer released after `press_step`
    pub fn release_step(&mut self) {
        if std::mem::take(&mut self.step_held) {
            self.auto_step.stop();
        }
    }

    /// Shorten (negative) or lengthen the auto-step interval
    pub fn adjust_speed(&mut self, steps: i64) {
        let interval = self.auto_step.interval_ms() as i64 - steps * SPEED_STEP_MS;
        self.auto_step.set_interval_ms(interval.max(0) as u64);
    }

    pub fn toggle_cell(&mut self, coord: Coord) {
        self.grid.toggle(coord);
    }

    /// Kill every cell, stop auto-stepping and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.auto_step.stop();
        self.generation = 0;
    }

    pub fn randomize(&mut self) {
        self.grid.randomize(self.config.random_density);
        self.auto_step.stop();
        self.generation = 0;
    }

    pub fn toggle_algorithm(&mut self) {
        self.algorithm = self.algorithm.next();
        debug!("step algorithm: {}", self.algorithm.name());
    }

    pub fn export_seed(&self) -> String {
        seed::encode(&self.grid)
    }

    /// Replace the board with a seed. The board is untouched on error.
    pub fn import_seed(&mut self, token: &str) -> Result<(), SeedError> {
        if let Err(e) = seed::decode(token, &mut self.grid) {
            warn!("rejected seed: {e}");
            return Err(e);
        }
        self.auto_step.stop();
        self.generation = 0;
        Ok(())
    }

    pub fn gesture_start(&mut self, coord: Option<Coord>) {
        self.selection.gesture_start(coord);
    }

    pub fn gesture_move(&mut self, coord: Option<Coord>) {
        self.selection.gesture_move(coord);
    }

    /// Finish a pointer gesture; a release on the starting cell toggles it
    pub fn gesture_end(&mut self, coord: Option<Coord>) -> GestureOutcome {
        let outcome = self.selection.gesture_end(coord, &mut self.grid);
        if let GestureOutcome::Click(cell) = outcome {
            self.toggle_cell(cell);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_state() -> GameState {
        GameState::new(Config { rows: 5, cols: 5, ..Config::default() })
    }

    #[test]
    fn test_new_uses_config_dimensions() {
        let state = small_state();
        assert_eq!(state.grid.dimensions(), (5, 5));
        assert_eq!(state.generation, 0);
        assert!(!state.auto_step.is_running());
    }

    #[test]
    fn test_step_counts_generations() {
        let mut state = small_state();
        state.toggle_cell(Coord::new(2, 2));
        state.step();
        assert_eq!(state.generation, 1);
        assert_eq!(state.grid.population(), 0);
    }

    #[test]
    fn test_tick_steps_only_when_running() {
        let mut state = small_state();
        state.tick(1.0);
        assert_eq!(state.generation, 0);

        state.toggle_auto_step();
        state.tick(1.0);
        assert_eq!(state.generation, 1);

        state.toggle_auto_step();
        state.tick(1.0);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_held_step_starts_auto_after_delay() {
        let mut state = small_state();
        state.press_step();
        assert_eq!(state.generation, 1);
        state.tick(0.5);
        state.tick(0.6);
        assert!(state.auto_step.is_running());
        state.tick(0.2);
        assert_eq!(state.generation, 2);

        state.release_step();
        state.tick(1.0);
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn test_release_without_hold_keeps_auto_running() {
        let mut state = small_state();
        state.toggle_auto_step();
        state.release_step();
        assert!(state.auto_step.is_running());
    }

    #[test]
    fn test_click_gesture_toggles_single_cell() {
        let mut state = small_state();
        state.gesture_start(Some(Coord::new(1, 1)));
        let outcome = state.gesture_end(Some(Coord::new(1, 1)));
        assert_eq!(outcome, GestureOutcome::Click(Coord::new(1, 1)));
        assert_eq!(state.grid.population(), 1);
        assert!(state.grid.get(Coord::new(1, 1)));
    }

    #[test]
    fn test_drag_gesture_paints() {
        let mut state = small_state();
        state.gesture_start(Some(Coord::new(0, 0)));
        state.gesture_move(Some(Coord::new(1, 2)));
        state.gesture_end(Some(Coord::new(1, 2)));
        assert_eq!(state.grid.population(), 6);
    }

    #[test]
    fn test_seed_round_trip_through_state() {
        let mut state = small_state();
        state.grid = GridState::with_alive(5, 5, &[(0, 4), (3, 3), (4, 0)]);
        let token = state.export_seed();

        let mut other = small_state();
        other.step();
        other.import_seed(&token).unwrap();
        assert_eq!(other.grid, state.grid);
        assert_eq!(other.generation, 0);
    }

    #[test]
    fn test_rejected_seed_leaves_board() {
        let mut state = small_state();
        state.toggle_cell(Coord::new(0, 0));
        state.generation = 7;

        let big = GameState::new(Config { rows: 10, cols: 10, ..Config::default() });
        let result = state.import_seed(&big.export_seed());
        assert!(matches!(result, Err(SeedError::Oversize { .. })));
        assert!(state.grid.get(Coord::new(0, 0)));
        assert_eq!(state.generation, 7);
    }

    #[test]
    fn test_clear_stops_auto_step() {
        let mut state = small_state();
        state.toggle_cell(Coord::new(0, 0));
        state.toggle_auto_step();
        state.clear();
        assert!(!state.auto_step.is_running());
        assert_eq!(state.grid.population(), 0);
    }

    #[test]
    fn test_resize_rebuilds_grid() {
        let mut state = small_state();
        state.toggle_cell(Coord::new(0, 0));
        state.resize(3, 8);
        assert_eq!(state.grid.dimensions(), (3, 8));
        assert_eq!(state.grid.population(), 0);
    }

    #[test]
    fn test_adjust_speed() {
        let mut state = small_state();
        state.adjust_speed(1);
        assert_eq!(state.auto_step.interval_ms(), 75);
        state.adjust_speed(-2);
        assert_eq!(state.auto_step.interval_ms(), 125);
    }
}
