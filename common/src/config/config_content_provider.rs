use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigError;

pub trait ConfigContentProvider {
    /// `Ok(None)` when nothing has been stored yet.
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: self.file_path.clone(),
                source,
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|source| ConfigError::Write {
            path: self.file_path.clone(),
            source,
        })
    }
}

/// Keeps content in memory. Used where no file should be touched.
#[derive(Default)]
pub struct MemoryContentProvider {
    content: RefCell<Option<String>>,
}

impl MemoryContentProvider {
    pub fn new(content: Option<String>) -> Self {
        Self {
            content: RefCell::new(content),
        }
    }
}

impl ConfigContentProvider for MemoryContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.content.borrow().clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        *self.content.borrow_mut() = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_content_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_has_no_content() {
        let provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        assert!(matches!(provider.get_config_content(), Ok(None)));
    }

    #[test]
    fn test_file_content_round_trip() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("wins: 3\n").unwrap();
        assert_eq!(
            provider.get_config_content().unwrap().as_deref(),
            Some("wins: 3\n")
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("tictactoe_missing_dir_for_tests")
            .join("nested")
            .join("file.yaml");
        let provider = FileContentConfigProvider::new(path);
        assert!(matches!(
            provider.set_config_content("x"),
            Err(ConfigError::Write { .. })
        ));
    }

    #[test]
    fn test_memory_provider() {
        let provider = MemoryContentProvider::default();
        assert!(matches!(provider.get_config_content(), Ok(None)));
        provider.set_config_content("a: 1").unwrap();
        assert_eq!(provider.get_config_content().unwrap().as_deref(), Some("a: 1"));
    }
}
