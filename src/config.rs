// Configuration module for reading Mancala.toml
// All tunable parameters of the bot live here so depth and strategy changes
// never require touching the search code

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub strategy: StrategyConfig,
}

/// Search constants
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Fixed minimax horizon in plies
    pub max_depth: u8,
}

/// Execution strategy constants
#[derive(Debug, Deserialize, Clone)]
pub struct StrategyConfig {
    /// Score root moves on the rayon thread pool when enough cores are present
    pub parallel_root_enabled: bool,
    /// Minimum worker threads required before the parallel root is used
    pub min_cpus_for_parallel: usize,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Mancala.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Mancala.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Mancala.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Mancala.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig { max_depth: 6 },
            strategy: StrategyConfig {
                parallel_root_enabled: false,
                min_cpus_for_parallel: 2,
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Mancala.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
