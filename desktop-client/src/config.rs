use common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer, validate_range,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub const MIN_CELL_SIZE: u32 = 50;
pub const MAX_CELL_SIZE: u32 = 300;

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Side of one cell in pixels.
    pub cell_size: u32,
    #[serde(default = "default_highlight_hover")]
    pub highlight_hover: bool,
}

fn default_highlight_hover() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        validate_range("cell_size", self.cell_size, MIN_CELL_SIZE, MAX_CELL_SIZE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: 150,
            highlight_hover: default_highlight_hover(),
        }
    }
}
