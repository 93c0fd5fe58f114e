use anyhow::Result;
use clap::ArgAction::Append;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure that can be loaded from CLI and/or config file
///
/// Example configuration file content
/// # TubeTalk API Configuration
///
/// # Server configuration
/// listen_on_host = "0.0.0.0"
/// listen_on_port = 8000
///
/// # Cross-origin configuration
/// allowed_origins = ["http://localhost:3000", "http://localhost:3001"]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Host to listen on
    #[arg(long, default_value = "0.0.0.0")]
    #[serde(default = "default_host")]
    pub listen_on_host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    #[serde(default = "default_port")]
    pub listen_on_port: u16,

    /// Browser origin allowed to call the API with credentials.
    /// Can be specified multiple times as --allowed-origin http://localhost:3000.
    #[arg(long = "allowed-origin", action = Append)]
    #[serde(
        default = "default_allowed_origins",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub allowed_origins: Vec<String>,

    /// Configuration file path (overrides all other arguments)
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_on_host: default_host(),
            listen_on_port: default_port(),
            allowed_origins: default_allowed_origins(),
            config: None,
        }
    }
}

impl Config {
    /// Load configuration from CLI args, optionally merging with a config file
    pub fn load() -> Result<Self> {
        // First parse CLI args
        let mut config = Config::parse();

        // If a config file is specified, load it and merge
        if let Some(config_path) = &config.config {
            let file_config = Self::from_file(Path::new(config_path))?;
            config = config.merge_with_file(file_config);
        }

        // Fall back to the local dev origins when none were given
        if config.allowed_origins.is_empty() {
            config.allowed_origins = default_allowed_origins();
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Merge with file config, CLI args take precedence
    fn merge_with_file(mut self, file_config: Config) -> Self {
        // If CLI value is default, use file value
        if self.listen_on_host == default_host() {
            self.listen_on_host = file_config.listen_on_host;
        }
        if self.listen_on_port == default_port() {
            self.listen_on_port = file_config.listen_on_port;
        }
        if self.allowed_origins.is_empty() {
            self.allowed_origins = file_config.allowed_origins;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.listen_on_host.is_empty() {
            return Err(anyhow::anyhow!("Listen host cannot be empty"));
        }

        for origin in &self.allowed_origins {
            if origin.is_empty() {
                return Err(anyhow::anyhow!("Allowed origin cannot be empty"));
            }
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "Allowed origin must start with http:// or https://, got: {origin}"
                ));
            }
        }

        Ok(())
    }

    /// Socket address string the server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_on_host, self.listen_on_port)
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:3001".to_string(),
    ]
}
