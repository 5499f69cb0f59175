//! Configuration for the taskdesk client.
//!
//! Settings live in `config.json` inside the platform application-data
//! directory (see [`DataStorage`]). The only module today is the task
//! server connection.
//!
//! ## Base URL resolution
//!
//! 1. `TASKDESK_API_URL` environment variable (a `.env` file in the working
//!    directory is loaded first)
//! 2. `server.api_url` from `config.json`
//! 3. [`DEFAULT_API_URL`]
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}", config.api_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured server URL.
pub const API_URL_ENV: &str = "TASKDESK_API_URL";

/// Port the reference task server listens on by default.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Connection settings for the remote task store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL without the `/api/v1/tasks` path, e.g. `https://tasks.example.com`.
    pub api_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Loads `config.json`, returning the default configuration when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(e) => {
                msg_warning!(e);
                Config::default()
            }
        };

        let default = config.server.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleServer, true);
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerApiUrl.to_string())
            .default(default.api_url)
            .interact_text()?;

        config.server = Some(ServerConfig {
            api_url: normalize_base_url(&api_url),
        });

        Ok(config)
    }

    /// Effective base URL for API requests, after environment override and defaults.
    pub fn api_url(&self) -> String {
        let _ = dotenv::dotenv();

        let url = match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self
                .server
                .as_ref()
                .map(|server| server.api_url.clone())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        };

        let url = normalize_base_url(&url);
        msg_debug!(Message::ApiUrlResolved(url.clone()));
        url
    }
}

/// Trims whitespace and trailing slashes so paths can be appended with `/api/v1/...`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
