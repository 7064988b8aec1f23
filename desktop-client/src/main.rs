mod app;
mod board_view;
mod colors;
mod config;

use clap::Parser;
use common::games::tictactoe::BOARD_SIZE;
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;

use app::{TicTacToeApp, WINDOW_TITLE};
use config::{Config, default_config_path, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe against an unbeatable minimax AI")]
struct Args {
    /// Path to the YAML client config
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Also print debug log lines
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = match get_config_manager(&config_path).get_config() {
        Ok(config) => config,
        Err(e) => {
            log!(
                "Failed to load config from {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            Config::default()
        }
    };

    let side = (config.cell_size as usize * BOARD_SIZE) as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side, side])
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    log!("Starting with cell size {}", config.cell_size);

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(&config)))),
    )?;

    Ok(())
}
