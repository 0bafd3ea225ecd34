use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, UpliftError};

/// Top-level configuration for the Uplift service.
///
/// Loaded from `~/.uplift/config.toml` by default. Each section corresponds
/// to a layer of the pipeline or a cross-cutting concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpliftConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub archive: ArchiveConfig,
}

impl Default for UpliftConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            engine: EngineConfig::default(),
            session: SessionConfig::default(),
            archive: ArchiveConfig::default(),
        }
    }
}

impl UpliftConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: UpliftConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| UpliftError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the API listens on (localhost only).
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

fn default_port() -> u16 {
    8070
}

/// Classification and response settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum accepted message length in characters.
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    /// Cap on the number of coping techniques surfaced per reply.
    #[serde(default = "default_max_techniques")]
    pub max_techniques: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_message_length: default_max_message_length(),
            max_techniques: default_max_techniques(),
        }
    }
}

fn default_max_message_length() -> usize {
    2000
}

fn default_max_techniques() -> usize {
    4
}

/// Conversation memory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of most-recent turns retained per session.
    #[serde(default = "default_context_turns")]
    pub context_turns: usize,
    /// Minutes of inactivity before a session is swept. 0 disables expiry.
    #[serde(default)]
    pub idle_timeout_minutes: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            context_turns: default_context_turns(),
            idle_timeout_minutes: 0,
        }
    }
}

fn default_context_turns() -> usize {
    20
}

/// Best-effort analysis archival settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// When false, analysis records are not forwarded anywhere.
    #[serde(default)]
    pub enabled: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}
