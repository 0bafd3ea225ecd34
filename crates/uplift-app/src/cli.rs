//! CLI argument definitions for the Uplift application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Uplift — a wellbeing chatbot backend for emotion and stress analysis.
#[derive(Parser, Debug)]
#[command(name = "uplift", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > UPLIFT_CONFIG env var > ~/.uplift/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("UPLIFT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > UPLIFT_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("UPLIFT_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Resolve the log level. Returns `None` if not overridden.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".uplift").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_port_wins_over_config() {
        let args = CliArgs {
            config: None,
            port: Some(9100),
            log_level: None,
        };
        assert_eq!(args.resolve_port(8070), 9100);
    }

    #[test]
    fn test_config_port_used_without_flag() {
        let args = CliArgs {
            config: None,
            port: None,
            log_level: None,
        };
        // Env vars are not set in this test process.
        std::env::remove_var("UPLIFT_PORT");
        assert_eq!(args.resolve_port(8070), 8070);
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let args = CliArgs {
            config: Some(PathBuf::from("/tmp/uplift.toml")),
            port: None,
            log_level: None,
        };
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/uplift.toml"));
    }
}
