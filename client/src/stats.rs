use common::config::{ConfigContentProvider, ConfigError, ConfigSerializer, YamlConfigSerializer};
use common::games::tictactoe::RoundResult;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Round results across sessions, from the human's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl GameStats {
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::HumanWon => self.wins += 1,
            RoundResult::OpponentWon => self.losses += 1,
            RoundResult::Draw => self.ties += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    pub fn summary(&self) -> String {
        format!(
            "Wins: {} • Losses: {} • Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}

pub struct StatsStore<TContentProvider: ConfigContentProvider> {
    content_provider: TContentProvider,
    serializer: YamlConfigSerializer,
}

impl<TContentProvider: ConfigContentProvider> StatsStore<TContentProvider> {
    pub fn new(content_provider: TContentProvider) -> Self {
        Self {
            content_provider,
            serializer: YamlConfigSerializer::new(),
        }
    }

    /// A missing record is empty stats, not an error.
    pub fn load(&self) -> Result<GameStats> {
        let Some(content) = self.content_provider.get_config_content()? else {
            return Ok(GameStats::default());
        };

        if content.trim().is_empty() {
            return Ok(GameStats::default());
        }

        ConfigSerializer::<GameStats>::deserialize(&self.serializer, &content).map_err(|err| {
            match err {
                ConfigError::Deserialize(source) => {
                    ClientError::MalformedPersistedRecord(source.to_string())
                }
                other => ClientError::Config(other),
            }
        })
    }

    pub fn save(&self, stats: &GameStats) -> Result<()> {
        let content = self.serializer.serialize(stats)?;
        self.content_provider.set_config_content(&content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{FileContentConfigProvider, MemoryContentProvider};

    fn memory_store(content: Option<&str>) -> StatsStore<MemoryContentProvider> {
        StatsStore::new(MemoryContentProvider::new(content.map(str::to_string)))
    }

    #[test]
    fn test_record_counts_each_result() {
        let mut stats = GameStats::default();
        stats.record(RoundResult::HumanWon);
        stats.record(RoundResult::OpponentWon);
        stats.record(RoundResult::OpponentWon);
        stats.record(RoundResult::Draw);
        assert_eq!(
            stats,
            GameStats {
                wins: 1,
                losses: 2,
                ties: 1
            }
        );
        assert_eq!(stats.rounds(), 4);
        assert_eq!(stats.summary(), "Wins: 1 • Losses: 2 • Ties: 1");
    }

    #[test]
    fn test_missing_or_empty_record_is_empty_stats() {
        assert_eq!(memory_store(None).load().unwrap(), GameStats::default());
        assert_eq!(memory_store(Some("  \n")).load().unwrap(), GameStats::default());
    }

    #[test]
    fn test_partial_record_fills_missing_counts() {
        let stats = memory_store(Some("wins: 4\n")).load().unwrap();
        assert_eq!(
            stats,
            GameStats {
                wins: 4,
                losses: 0,
                ties: 0
            }
        );
    }

    #[test]
    fn test_malformed_record_is_reported() {
        let result = memory_store(Some("wins: -3\nlosses: lots\n")).load();
        assert!(matches!(
            result,
            Err(ClientError::MalformedPersistedRecord(_))
        ));

        let result = memory_store(Some("not stats at all")).load();
        assert!(matches!(
            result,
            Err(ClientError::MalformedPersistedRecord(_))
        ));
    }

    #[test]
    fn test_save_then_load_from_file() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("temp_tictactoe_stats_{}.yaml", random_number));
        let store = StatsStore::new(FileContentConfigProvider::new(path.clone()));
        let stats = GameStats {
            wins: 2,
            losses: 5,
            ties: 8,
        };

        store.save(&stats).unwrap();
        assert_eq!(store.load().unwrap(), stats);
        let _ = std::fs::remove_file(path);
    }
}
