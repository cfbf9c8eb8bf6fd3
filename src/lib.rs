// Domain layer - grid, step engine, seed codec, drag selection
pub mod domain;

// Application layer - board ownership, auto-step timing, config
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Coord, GridState, SeedError, SelectionController};
pub use application::{AutoStepper, Config, GameState};
