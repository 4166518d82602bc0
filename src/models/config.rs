use super::ScheduleOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "cotizador.toml";

/// Scheduling defaults for work-plan parsing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_workdays")]
    pub workdays_per_week: f64,

    #[serde(default = "default_hours")]
    pub hours_per_day: f64,

    #[serde(default = "default_weeks")]
    pub timeframe_weeks: f64,
}

fn default_workdays() -> f64 {
    5.0
}

fn default_hours() -> f64 {
    8.0
}

fn default_weeks() -> f64 {
    8.0
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            workdays_per_week: default_workdays(),
            hours_per_day: default_hours(),
            timeframe_weeks: default_weeks(),
        }
    }
}

impl From<ScheduleConfig> for ScheduleOptions {
    fn from(cfg: ScheduleConfig) -> Self {
        Self {
            workdays_per_week: cfg.workdays_per_week,
            hours_per_day: cfg.hours_per_day,
            timeframe_weeks: cfg.timeframe_weeks,
        }
    }
}

/// Cotizador configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CotizadorConfig {
    /// Fallback log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub schedule: ScheduleConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CotizadorConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl CotizadorConfig {
    /// Load config from `<dir>/cotizador.toml`, defaults when absent
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(&config_path)
    }

    /// Load config from an explicit file
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: CotizadorConfig =
            toml::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Save config to `<dir>/cotizador.toml`
    pub fn save(&self, dir: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(dir)?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = CotizadorConfig::load(dir.path()).unwrap();
        assert_eq!(config, CotizadorConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut config = CotizadorConfig::default();
        config.schedule.timeframe_weeks = 12.0;
        config.log_level = "debug".to_string();
        config.save(dir.path()).unwrap();

        let loaded = CotizadorConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[schedule]\nhours_per_day = 6\n").unwrap();

        let config = CotizadorConfig::load(dir.path()).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.schedule.hours_per_day, 6.0);
        assert_eq!(config.schedule.workdays_per_week, 5.0);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "schedule = 3").unwrap();
        assert!(CotizadorConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_schedule_options_from_config() {
        let options: ScheduleOptions = ScheduleConfig::default().into();
        assert_eq!(options, ScheduleOptions::default());
    }
}
