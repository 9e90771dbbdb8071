use anyhow::{Context, Result};

/// Scoring policy for the engine.
///
/// The threshold values mirror the product's launch constants but are policy,
/// not invariants: every one of them can be overridden per deployment through
/// environment variables. `min_team_size` is the exception in spirit — it can
/// be raised, but the team-fit analyzer treats it as a hard privacy floor.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Dimensions whose normalized intensity is at or below this value
    /// produce no Signal at all.
    pub signal_floor: f64,
    /// Intensities below this value band as `low`.
    pub medium_threshold: f64,
    /// Intensities above this value band as `high`; the value itself is
    /// still `medium`.
    pub high_threshold: f64,
    /// Minimum number of team members with non-empty signals before any
    /// aggregate is computed.
    pub min_team_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            signal_floor: 0.3,
            medium_threshold: 0.4,
            high_threshold: 0.7,
            min_team_size: 3,
        }
    }
}

impl EngineConfig {
    /// Loads the default policy with optional environment overrides.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        Ok(Self {
            signal_floor: optional_f64("ENGINE_SIGNAL_FLOOR")?.unwrap_or(defaults.signal_floor),
            medium_threshold: optional_f64("ENGINE_MEDIUM_THRESHOLD")?
                .unwrap_or(defaults.medium_threshold),
            high_threshold: optional_f64("ENGINE_HIGH_THRESHOLD")?
                .unwrap_or(defaults.high_threshold),
            min_team_size: optional_usize("ENGINE_MIN_TEAM_SIZE")?
                .unwrap_or(defaults.min_team_size)
                .max(defaults.min_team_size),
        })
    }
}

fn optional_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .map(Some)
            .with_context(|| format!("'{key}' must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

fn optional_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<usize>()
            .map(Some)
            .with_context(|| format!("'{key}' must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_match_launch_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.signal_floor, 0.3);
        assert_eq!(config.medium_threshold, 0.4);
        assert_eq!(config.high_threshold, 0.7);
        assert_eq!(config.min_team_size, 3);
    }

    #[test]
    fn test_missing_env_var_yields_none() {
        assert!(optional_f64("ENGINE_TEST_UNSET_VAR").unwrap().is_none());
    }
}
