mod auto_step;
mod game_state;
pub mod config;

pub use auto_step::AutoStepper;
pub use config::{Config, ConfigError};
pub use game_state::GameState;
