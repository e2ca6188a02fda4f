//! Timing configuration for the departure engine.

use chrono::Duration;

/// Timing parameters applied uniformly to every line.
///
/// The upstream data carries no per-line durations, so every departure is
/// assumed to spend the same time on the route, with the same approach
/// window before it.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Assumed time on route from departure to arrival (minutes).
    pub travel_mins: i64,

    /// How long before its scheduled time a departure counts as
    /// approaching (minutes).
    pub approach_mins: i64,
}

impl EngineConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(travel_mins: i64, approach_mins: i64) -> Self {
        Self {
            travel_mins,
            approach_mins,
        }
    }

    /// Returns the travel duration as a Duration.
    pub fn travel_duration(&self) -> Duration {
        Duration::minutes(self.travel_mins)
    }

    /// Returns the approach window as a Duration.
    pub fn approach_window(&self) -> Duration {
        Duration::minutes(self.approach_mins)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            travel_mins: 45,
            approach_mins: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.travel_mins, 45);
        assert_eq!(config.approach_mins, 60);
    }

    #[test]
    fn duration_methods() {
        let config = EngineConfig::default();

        assert_eq!(config.travel_duration(), Duration::minutes(45));
        assert_eq!(config.approach_window(), Duration::minutes(60));
    }

    #[test]
    fn custom_config() {
        let config = EngineConfig::new(30, 15);

        assert_eq!(config.travel_mins, 30);
        assert_eq!(config.approach_mins, 15);
        assert_eq!(config.travel_duration(), Duration::minutes(30));
        assert_eq!(config.approach_window(), Duration::minutes(15));
    }
}
