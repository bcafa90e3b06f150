//! Configuration file support for Bulking Bites.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bulkbites/config.toml`.

use crate::{Error, PlanPolicy, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanConfig,
}

/// Plan computation configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Which surplus policy turns maintenance intake into a bulking target
    #[serde(default)]
    pub policy: PlanPolicy,

    /// Flat daily calorie bonus used by the fixed-surplus policy
    #[serde(default = "default_fixed_surplus_kcal")]
    pub fixed_surplus_kcal: f64,

    /// Attach sleep/water/meal/workout advisories to each plan
    #[serde(default = "default_lifestyle")]
    pub lifestyle: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            policy: PlanPolicy::default(),
            fixed_surplus_kcal: default_fixed_surplus_kcal(),
            lifestyle: default_lifestyle(),
        }
    }
}

// Default value functions
fn default_fixed_surplus_kcal() -> f64 {
    500.0
}

fn default_lifestyle() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
        base.join("bulkbites").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.plan.policy, PlanPolicy::GoalDriven);
        assert_eq!(config.plan.fixed_surplus_kcal, 500.0);
        assert!(config.plan.lifestyle);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            plan: PlanConfig {
                policy: PlanPolicy::FixedSurplus,
                fixed_surplus_kcal: 300.0,
                lifestyle: false,
            },
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.plan.policy, PlanPolicy::FixedSurplus);
        assert_eq!(parsed.plan.fixed_surplus_kcal, 300.0);
        assert!(!parsed.plan.lifestyle);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[plan]
policy = "fixed_surplus"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.plan.policy, PlanPolicy::FixedSurplus);
        assert_eq!(config.plan.fixed_surplus_kcal, 500.0); // default
        assert!(config.plan.lifestyle); // default
    }

    #[test]
    fn test_save_and_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = Config {
            plan: PlanConfig {
                policy: PlanPolicy::FixedSurplus,
                fixed_surplus_kcal: 450.0,
                lifestyle: true,
            },
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.plan.policy, PlanPolicy::FixedSurplus);
        assert_eq!(loaded.plan.fixed_surplus_kcal, 450.0);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Toml(_))));
    }
}
