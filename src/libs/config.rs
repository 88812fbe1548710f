//! Configuration management for the duke application.
//!
//! Settings live in a pretty-printed `config.json` inside the application data
//! directory (see [`DataStorage`]). Every module is optional; a missing file or
//! a missing module falls back to defaults, so duke runs with no setup at all.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use duke::libs::config::Config;
//!
//! let config = Config::read()?;
//! let task_file = config.task_file_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_TASK_FILE_NAME: &str = "tasks.txt";

/// A configurable module, as offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where the task list is kept.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// File name inside the data directory, or an absolute path.
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            file_name: DEFAULT_TASK_FILE_NAME.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(data_storage: &DataStorage) -> Result<Config> {
        let config_file_path = data_storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, data_storage: &DataStorage) -> Result<()> {
        let config_file_path = data_storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if there is one.
    pub fn delete_from(data_storage: &DataStorage) -> Result<()> {
        let config_file_path = data_storage.get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Full path of the task file in the default data directory.
    pub fn task_file_path(&self) -> Result<PathBuf> {
        self.task_file_path_in(&DataStorage::new())
    }

    /// Absolute file names are used as-is; anything else is resolved inside
    /// `data_storage`.
    pub fn task_file_path_in(&self, data_storage: &DataStorage) -> Result<PathBuf> {
        let storage = self.storage.clone().unwrap_or_default();
        let file_name = PathBuf::from(&storage.file_name);
        if file_name.is_absolute() {
            return Ok(file_name);
        }
        data_storage.get_path(&storage.file_name)
    }

    /// Interactive setup wizard, seeded with the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![ConfigModule {
            key: "storage".to_string(),
            name: "Storage".to_string(),
        }];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "storage" => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        file_name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTaskFileName.to_string())
                            .default(default.file_name)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
