use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level application configuration, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub server: ServerConfig,
    pub issues: IssuesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            server: ServerConfig::default(),
            issues: IssuesConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path
    /// (~/.config/hackwall/config.toml), falling back to defaults if the
    /// file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Write current configuration to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        Ok(())
    }

    /// Default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hackwall")
            .join("config.toml")
    }
}

/// Message data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Where the message JSON lives: a filesystem path or an http(s) URL.
    pub source: String,
    /// Optional pre-decoded RGBA pixel dump sampled for the wall's accent
    /// colors. When unset or unreadable, a default palette applies.
    pub accent_rgba: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: "data/messages.json".into(),
            accent_rgba: None,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Port.
    pub port: u16,
    /// Enable CORS.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            cors: true,
        }
    }
}

/// Issue bulk-creation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuesConfig {
    /// Repository owner (user or org).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// REST API base URL.
    pub api_base: String,
    /// Markdown file holding the issue templates.
    pub file: PathBuf,
    /// Pause between successive create calls, in milliseconds.
    pub delay_ms: u64,
    /// API token. Falls back to the HACKWALL_GITHUB_TOKEN environment
    /// variable when unset.
    pub token: Option<String>,
}

impl Default for IssuesConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            api_base: "https://api.github.com".into(),
            file: PathBuf::from("ISSUES.md"),
            delay_ms: 1000,
            token: None,
        }
    }
}

impl IssuesConfig {
    /// Resolve the API token from config or environment.
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var("HACKWALL_GITHUB_TOKEN").ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("messages.json"));
        assert!(toml_str.contains("127.0.0.1"));
        assert!(toml_str.contains("api.github.com"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.data.source, config.data.source);
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.issues.delay_ms, config.issues.delay_ms);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AppConfig = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(parsed.server.port, 9000);
        assert_eq!(parsed.server.host, "127.0.0.1");
        assert_eq!(parsed.data.source, "data/messages.json");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[data]\nsource = \"https://example.com/m.json\"\n").unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.data.source, "https://example.com/m.json");
    }
}
