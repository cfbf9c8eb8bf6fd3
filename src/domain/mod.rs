mod cell;
mod grid;
mod algorithm;
pub mod error;
pub mod step;
pub mod seed;
pub mod selection;

pub use cell::Cell;
pub use grid::{Coord, GridChange, GridState, Snapshot};
pub use algorithm::Algorithm;
pub use error::SeedError;
pub use seed::Seed;
pub use selection::{GestureOutcome, Highlight, SelectionController, SelectionRect, SelectionState};
