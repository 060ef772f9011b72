use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with index.html, served for every non-API path
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Which provider builds the transactions table
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Separate transactions/customers/categories/countries tables merged on load
    Raw,
    /// One pre-merged CSV file
    Merged,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub source: DataSource,
    /// Directory holding the source CSV files
    pub dir: String,
    /// File name inside `dir`, used when `source = "merged"`
    #[serde(default = "default_merged_file")]
    pub merged_file: String,
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_merged_file() -> String {
    "merged.csv".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8050
static_dir = "dist"

[data]
source = "raw"
dir = "db"
merged_file = "merged.csv"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port)
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;
        Ok(addr)
    }

    pub fn data_dir(&self) -> PathBuf {
        resolve_path(&self.data.dir)
    }

    pub fn static_dir(&self) -> PathBuf {
        resolve_path(&self.server.static_dir)
    }
}

/// Resolve a configured path.
/// Relative paths are looked up next to the executable first, then taken
/// relative to the current directory.
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    // If absolute path, use as is
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.data.source, DataSource::Raw);
        assert_eq!(config.data.dir, "db");
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:8050".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_optional_fields_fall_back() {
        let raw = r#"
[server]
host = "0.0.0.0"
port = 3000

[data]
source = "merged"
dir = "/srv/sales"
"#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.data.source, DataSource::Merged);
        assert_eq!(config.data.merged_file, "merged.csv");
        assert_eq!(config.data_dir(), PathBuf::from("/srv/sales"));
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let raw = r#"
[server]
host = "127.0.0.1"
port = 8050

[data]
source = "sqlite"
dir = "db"
"#;
        assert!(toml::from_str::<Config>(raw).is_err());
    }
}
