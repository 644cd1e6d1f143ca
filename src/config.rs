use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub bank: BankConfig,
    pub scoring: ScoringConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BankConfig {
    /// Remote CSV source. When unset, `path` is read instead.
    pub url: Option<String>,
    pub path: String,
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ScoringConfig {
    pub mode: AggregationMode,
    pub max_per_style: usize,
    pub thresholds: TendencyThresholds,
}

/// How per-style weighted scores are combined. The default tendency
/// thresholds are calibrated for `sum`; pick `mean` only together with
/// thresholds on the -2..+2 scale.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    Sum,
    Mean,
}

impl AggregationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationMode::Sum => "sum",
            AggregationMode::Mean => "mean",
        }
    }
}

/// Inclusive cutpoints: High at or above `high`, Moderate at or above `low`,
/// Low below `low`.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct TendencyThresholds {
    pub high: f64,
    pub low: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub log_responses: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            bank: BankConfig::default(),
            scoring: ScoringConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: "data/questions.csv".into(),
            fetch_timeout_secs: 10,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::Sum,
            max_per_style: 5,
            thresholds: TendencyThresholds::default(),
        }
    }
}

impl Default for TendencyThresholds {
    fn default() -> Self {
        Self { high: 5.0, low: 0.0 }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "data/assessments.db".into(),
            log_responses: true,
        }
    }
}

impl Config {
    /// Load config from a TOML file. Falls back to defaults if file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Config loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregation_mode_parses_lowercase() {
        let config: ScoringConfig = toml::from_str("mode = \"mean\"").unwrap();
        assert_eq!(config.mode, AggregationMode::Mean);
        // untouched fields keep their defaults
        assert_eq!(config.max_per_style, 5);
        assert_eq!(config.thresholds.high, 5.0);
    }
}
