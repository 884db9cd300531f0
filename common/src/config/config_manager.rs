use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config value behind a content provider.
///
/// A provider with no content yields `TConfig::default()` without caching it, so a
/// config file created later is still picked up.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: RefCell::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Validation)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentProvider;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        rounds: u32,
        name: String,
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if self.rounds > 100 {
                return Err("too many rounds".to_string());
            }
            Ok(())
        }
    }

    fn memory_manager(
        content: Option<&str>,
    ) -> ConfigManager<MemoryContentProvider, Sample, YamlConfigSerializer> {
        ConfigManager::new(
            MemoryContentProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config().unwrap(), Sample::default());
    }

    #[test]
    fn test_set_then_get_returns_same_config() {
        let manager = memory_manager(None);
        let config = Sample {
            rounds: 3,
            name: "three".to_string(),
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let manager = memory_manager(Some("rounds: 500\nname: big\n"));
        assert!(matches!(
            manager.get_config(),
            Err(ConfigError::Validation(_))
        ));

        let manager = memory_manager(Some("rounds: [not, a, number]\n"));
        assert!(matches!(
            manager.get_config(),
            Err(ConfigError::Deserialize(_))
        ));
    }

    #[test]
    fn test_invalid_config_is_not_written() {
        let manager = memory_manager(None);
        let config = Sample {
            rounds: 101,
            name: String::new(),
        };
        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.get_config().unwrap(), Sample::default());
    }

    #[test]
    fn test_yaml_file_manager_round_trip() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("temp_tictactoe_manager_{}.yaml", random_number));
        let manager = ConfigManager::<_, Sample, _>::from_yaml_file(path.clone());
        let config = Sample {
            rounds: 7,
            name: "file".to_string(),
        };
        manager.set_config(&config).unwrap();

        let fresh = ConfigManager::<_, Sample, _>::from_yaml_file(path.clone());
        assert_eq!(fresh.get_config().unwrap(), config);
        let _ = std::fs::remove_file(path);
    }
}
