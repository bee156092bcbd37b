#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default)]

mod controller;
mod data;
mod error;
mod ui;
mod widget;

use std::sync::Arc;

use druid::AppLauncher;
use env_logger::{Builder, Env};
use seasons_core::{loader::AssetLoader, source::DirSource};

use crate::data::{AppState, Config, DEFAULT_ASSET_BASE};

const ENV_LOG: &str = "SEASONS_LOG";
const ENV_LOG_STYLE: &str = "SEASONS_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    // Load configuration
    let config = Config::load().unwrap_or_default();

    let asset_base = config.asset_base();
    let loader = match AssetLoader::from_base(&asset_base, Config::proxy().as_deref()) {
        Ok(loader) => loader,
        Err(err) => {
            log::error!("invalid asset base {asset_base:?}, using {DEFAULT_ASSET_BASE:?}: {err}");
            AssetLoader::new(DirSource::new(DEFAULT_ASSET_BASE))
        }
    };

    let state = AppState::new(config);
    let window = ui::main_window(Arc::new(loader));

    AppLauncher::with_window(window)
        .configure_env(ui::theme::setup)
        .launch(state)
        .expect("Application launch");
}
