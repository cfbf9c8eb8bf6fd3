use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use seed_of_life::{
    Config, GameState,
    input, rendering,
    ui::{self, Notice},
};

/// Conway's Game of Life with drag painting and copy-pasteable seeds
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board rows (overrides config)
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns (overrides config)
    #[arg(long)]
    cols: Option<usize>,

    /// Auto-step interval in milliseconds (overrides config)
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Seed token to load at start-up
    #[arg(long)]
    seed: Option<String>,
}

impl Cli {
    fn resolve_config(&self) -> Config {
        let mut config = match &self.config {
            Some(path) => Config::load(path).unwrap_or_else(|e| {
                error!("{e}; using defaults");
                Config::default()
            }),
            None => Config::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(interval) = self.interval_ms {
            config.ms_per_auto_step = interval;
        }
        config.validated()
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Seed of Life".to_owned(),
        window_width: 1000,
        window_height: 700,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config();
    info!("starting with a {}x{} board", config.rows, config.cols);

    let mut state = GameState::new(config);
    let mut notice: Option<Notice> = None;

    if let Some(token) = &cli.seed {
        notice = Some(match state.import_seed(token) {
            Ok(()) => Notice::Info("Seed loaded".to_string()),
            Err(e) => Notice::Error(e.to_string()),
        });
    }

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(state.algorithm.name());

        if let Some(n) = input::process_button_clicks(&mut state, &buttons, mouse_pos) {
            notice = Some(n);
        }
        input::handle_gestures(&mut state, mouse_pos);
        if let Some(n) = input::process_keyboard_input(&mut state) {
            notice = Some(n);
        }

        state.tick(get_frame_time());
        let redraws = rendering::pending_redraws(&mut state);

        clear_background(BLACK);
        rendering::draw_grid(&state);
        rendering::draw_controls(&state, &buttons, mouse_pos, notice.as_ref(), redraws);

        next_frame().await;
    }
}
