use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Prefix shared by every environment variable the browser reads
pub const ENV_PREFIX: &str = "REEL_";

/// Application configuration loaded from `REEL_*` environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON catalog file (`REEL_CATALOG_PATH`)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Directory the preferences file is kept in (`REEL_DATA_DIR`)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Results per browse page (`REEL_PAGE_SIZE`)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Simulated latency before each extra page (`REEL_LOAD_DELAY_MS`)
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/movies.json")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".reel")
}

fn default_page_size() -> usize {
    browse::DEFAULT_PAGE_SIZE
}

fn default_load_delay_ms() -> u64 {
    browse::DEFAULT_LOAD_DELAY.as_millis() as u64
}

impl AppConfig {
    /// Load configuration from the environment (and `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed(ENV_PREFIX)
            .from_env::<AppConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            load_delay_ms: default_load_delay_ms(),
        }
    }
}
