use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub api: ApiConfig,
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same origin as the page"
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DirectoryConfig {
    pub dataset_url: String,
    #[serde(default)]
    pub format: DatasetFormat,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            directory: DirectoryConfig {
                dataset_url: DEFAULT_DATASET_URL.to_string(),
                format: DatasetFormat::Auto,
            },
            logging: LoggingConfig::default(),
        }
    }
}

const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/Medon90ae/argento-store/main/data/addresses.xlsx";

/// Format of the address dataset
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// Guess from the URL extension, then from the Content-Type
    #[default]
    Auto,
    Xlsx,
    Csv,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config fetch failed: {0}")]
    Fetch(String),
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Конфигурация по умолчанию, встроенная в бандл
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[directory]
dataset_url = "https://raw.githubusercontent.com/Medon90ae/argento-store/main/data/addresses.xlsx"
format = "auto"

[logging]
level = "info"
"#;

/// Name of the override file served next to index.html
pub const CONFIG_FILE: &str = "config.toml";

pub fn parse_config(contents: &str) -> Result<StorefrontConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Embedded defaults; `StorefrontConfig::default()` mirrors them if the text is ever broken
pub fn default_config() -> StorefrontConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded config is broken: {}", e);
        StorefrontConfig::default()
    })
}

/// Load configuration for the page
///
/// Порядок поиска:
/// 1. `config.toml` рядом с index.html
/// 2. Встроенная конфигурация по умолчанию
pub async fn load_config() -> StorefrontConfig {
    match fetch_config_file().await {
        Ok(config) => {
            log::info!("Loaded config from {}", CONFIG_FILE);
            config
        }
        Err(e) => {
            log::warn!("{} not used ({}), using embedded defaults", CONFIG_FILE, e);
            default_config()
        }
    }
}

async fn fetch_config_file() -> Result<StorefrontConfig, ConfigError> {
    let response = gloo_net::http::Request::get(CONFIG_FILE)
        .send()
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(ConfigError::Fetch(format!("HTTP {}", response.status())));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;
    parse_config(&text)
}

/// Map the configured level name to a `log` filter; unknown names keep `Info`
pub fn level_filter(level: &str) -> log::LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" | "warning" => log::LevelFilter::Warn,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.directory.format, DatasetFormat::Auto);
        assert!(config.directory.dataset_url.ends_with(".xlsx"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_override_config() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://shop.example.com/"

            [directory]
            dataset_url = "/data/areas.csv"
            format = "csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com/");
        assert_eq!(config.directory.format, DatasetFormat::Csv);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_broken_config_is_an_error() {
        assert!(matches!(
            parse_config("[api\nbase_url = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("DEBUG"), log::LevelFilter::Debug);
        assert_eq!(level_filter("warning"), log::LevelFilter::Warn);
        assert_eq!(level_filter("loud"), log::LevelFilter::Info);
    }
}
