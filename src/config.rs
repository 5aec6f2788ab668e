use std::time::Duration;

use crate::constants::*;
use crate::error::{Result, SceneError};

/// Timing knobs of the scheduler. `Default` reproduces the stock intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Period of the right-of-way flip.
    pub alternation_period: Duration,
    /// Lower bound (inclusive) of a lane's spawn interval.
    pub min_spawn_interval: Duration,
    /// Upper bound (exclusive) of a lane's spawn interval.
    pub max_spawn_interval: Duration,
    /// How long a vehicle takes to cross the scene.
    pub travel_time: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            alternation_period: ALTERNATION_PERIOD,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            max_spawn_interval: MAX_SPAWN_INTERVAL,
            travel_time: VEHICLE_TRAVEL_TIME,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.alternation_period.is_zero() {
            return Err(SceneError::InvalidConfig(
                "alternation period must be positive".to_string(),
            ));
        }
        if self.travel_time.is_zero() {
            return Err(SceneError::InvalidConfig(
                "travel time must be positive".to_string(),
            ));
        }
        if self.min_spawn_interval.as_millis() == 0 {
            return Err(SceneError::InvalidConfig(
                "spawn interval lower bound must be at least 1ms".to_string(),
            ));
        }
        // intervals are drawn in whole milliseconds
        if self.min_spawn_interval.as_millis() >= self.max_spawn_interval.as_millis() {
            return Err(SceneError::InvalidConfig(format!(
                "spawn interval range [{}ms, {}ms) is empty",
                self.min_spawn_interval.as_millis(),
                self.max_spawn_interval.as_millis()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_stock_timings() {
        let config = SimulationConfig::default();
        assert_eq!(config.alternation_period, Duration::from_millis(7000));
        assert_eq!(config.min_spawn_interval, Duration::from_millis(1000));
        assert_eq!(config.max_spawn_interval, Duration::from_millis(6000));
        assert_eq!(config.travel_time, Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_spawn_range() {
        let config = SimulationConfig {
            min_spawn_interval: Duration::from_millis(3000),
            max_spawn_interval: Duration::from_millis(3000),
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(SceneError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_periods() {
        let config = SimulationConfig {
            alternation_period: Duration::ZERO,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            min_spawn_interval: Duration::from_micros(10),
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
