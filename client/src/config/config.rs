use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{
    DEFAULT_SECOND_BEST_CHANCE, Difficulty, Player, validate_second_best_chance,
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "smart_tictactoe_config.yaml";
pub const DEFAULT_STATS_FILE: &str = "tic_tac_toe_stats.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Skips the symbol prompt when set.
    pub human_symbol: Option<Player>,
    /// Skips the difficulty prompt when set.
    pub difficulty: Option<Difficulty>,
    pub medium_second_best_chance: f64,
    pub prefer_faster_wins: bool,
    pub color: bool,
    pub log_enabled: bool,
    pub stats_file: String,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        validate_second_best_chance(self.medium_second_best_chance)?;
        if self.stats_file.trim().is_empty() {
            return Err("stats_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_symbol: None,
            difficulty: None,
            medium_second_best_chance: DEFAULT_SECOND_BEST_CHANCE,
            prefer_faster_wins: false,
            color: true,
            log_enabled: false,
            stats_file: DEFAULT_STATS_FILE.to_string(),
        }
    }
}
