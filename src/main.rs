#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::{egui, NativeOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sheeplingo::cli::{self, Cli, Command};
use sheeplingo::config::{read_config_file, DEFAULT_CONFIG_FILE};
use sheeplingo::storage::DirStore;
use sheeplingo::{AppError, AppState, Config, Route, SheepLingoApp};

fn run_gui(config: Config, state: AppState, start: Route) -> Result<(), AppError> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    tracing::info!(start = %start, "starting window");
    eframe::run_native(
        "SheepLingo",
        options,
        Box::new(move |_cc| Box::new(SheepLingoApp::new(config, state, start))),
    )
    .map_err(|e| AppError::Gui(e.to_string()))
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let loaded = read_config_file(&config_path)?;
    let found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();
    if found {
        tracing::info!(path = %config_path.display(), "loaded config");
    } else {
        tracing::info!(path = %config_path.display(), "no config file, using defaults");
    }

    let mut store = DirStore::open(&config.data_dir)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Some(Command::Stats) => cli::print_stats(&AppState::load(Box::new(store)), &mut stdout),
        Some(Command::Reset) => cli::reset(&mut store, &mut stdout),
        Some(Command::Routes) => cli::print_routes(&mut stdout),
        None => {
            drop(stdout);
            let start = cli
                .route
                .as_deref()
                .map(Route::parse_or_home)
                .unwrap_or(Route::Home);
            run_gui(config, AppState::load(Box::new(store)), start)
        }
    }
}
