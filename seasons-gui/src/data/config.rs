use std::{
    env::{self, VarError},
    fs::File,
    io,
    path::{Path, PathBuf},
};

use druid::Data;
use platform_dirs::AppDirs;
use seasons_core::season::Locale;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "Seasons";
const CONFIG_FILENAME: &str = "config.json";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";
const ASSETS_ENV_VAR: &str = "SEASONS_ASSETS";

/// The documents bundled with this crate.
pub const DEFAULT_ASSET_BASE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

#[derive(Clone, Debug, Data, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory or `http(s)://` URL that holds the `lottie/` folder.
    pub asset_base: String,
    #[data(eq)]
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_base: DEFAULT_ASSET_BASE.to_owned(),
            locale: Locale::default(),
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        Self::load_from(&Self::config_path()?)
    }

    /// A missing file is the normal first-run case and is not reported.
    pub fn load_from(path: &Path) -> Option<Config> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                log::error!("failed to open config {:?}: {}", path, err);
                return None;
            }
        };
        log::info!("loading config: {:?}", path);
        match serde_json::from_reader(file) {
            Ok(config) => Some(config),
            Err(err) => {
                log::error!("failed to read config {:?}: {}", path, err);
                None
            }
        }
    }

    /// Asset base after applying the environment override.
    pub fn asset_base(&self) -> String {
        self.asset_base_with(var(ASSETS_ENV_VAR))
    }

    fn asset_base_with(&self, overridden: Option<String>) -> String {
        overridden
            .filter(|base| !base.trim().is_empty())
            .unwrap_or_else(|| self.asset_base.clone())
    }

    pub fn proxy() -> Option<String> {
        var(PROXY_ENV_VAR)
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name).map_or_else(
        |err| match err {
            VarError::NotPresent => None,
            VarError::NotUnicode(_) => {
                log::error!("{name} is not a valid unicode");
                None
            }
        },
        Some,
    )
}
