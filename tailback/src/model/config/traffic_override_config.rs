use super::{duration_codec, SpeedThreshold};
use crate::model::{
    action::scanner::FallbackPolicy, CongestionRangeGroup, TrafficOverrideError,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tailback_core::util::SpeedUnit;
use uom::si::f64::{Length, Time, Velocity};
use uom::si::{length::meter, time::millisecond};

/// defines the behavior of the traffic override pipeline. every field has a
/// default, so configuration files only need the values they change.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrafficOverrideConfig {
    /// speeds at or above this value are reported as high speed
    pub high_speed_threshold: SpeedThreshold,
    /// how long low speed must be observed before congestion is raised
    #[serde(with = "duration_codec")]
    pub low_speed_window: Duration,
    /// fraction of the free-flow speed at or below which speed counts as low
    pub low_speed_ratio: f64,
    /// only report low speed on motorway segments
    pub motorway_only_low_speed_rule: bool,
    /// fraction of the free-flow speed the vehicle may exceed an override's
    /// predicted speed by before the override is treated as a false positive
    pub false_positive_tolerance: f64,
    pub fallback_action: FallbackPolicy,
    pub congestion_range_group: CongestionRangeGroup,
    /// a decrease covers the road the vehicle would drive in this time at
    /// its measured speed
    #[serde(with = "duration_codec")]
    pub decrease_time_horizon: Duration,
    /// length of road ahead covered by an increase
    pub increase_distance_meters: f64,
}

impl Default for TrafficOverrideConfig {
    fn default() -> Self {
        Self {
            high_speed_threshold: SpeedThreshold::new(80.0, SpeedUnit::KilometersPerHour),
            low_speed_window: Duration::from_secs(20),
            low_speed_ratio: 0.5,
            motorway_only_low_speed_rule: true,
            false_positive_tolerance: 0.2,
            fallback_action: FallbackPolicy::NoAction,
            congestion_range_group: CongestionRangeGroup::default(),
            decrease_time_horizon: Duration::from_secs(120),
            increase_distance_meters: 1000.0,
        }
    }
}

impl TrafficOverrideConfig {
    pub fn high_speed_threshold(&self) -> Velocity {
        self.high_speed_threshold.velocity()
    }

    pub fn decrease_time_horizon(&self) -> Time {
        Time::new::<millisecond>(self.decrease_time_horizon.as_millis() as f64)
    }

    pub fn increase_distance(&self) -> Length {
        Length::new::<meter>(self.increase_distance_meters)
    }

    pub fn validate(&self) -> Result<(), TrafficOverrideError> {
        let threshold = self.high_speed_threshold.speed;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(TrafficOverrideError::InvalidConfiguration(format!(
                "high_speed_threshold must be positive, found {threshold}"
            )));
        }
        if !(self.low_speed_ratio > 0.0 && self.low_speed_ratio <= 1.0) {
            return Err(TrafficOverrideError::InvalidConfiguration(format!(
                "low_speed_ratio must be in (0, 1], found {}",
                self.low_speed_ratio
            )));
        }
        if !self.false_positive_tolerance.is_finite() || self.false_positive_tolerance < 0.0 {
            return Err(TrafficOverrideError::InvalidConfiguration(format!(
                "false_positive_tolerance must be non-negative, found {}",
                self.false_positive_tolerance
            )));
        }
        if !self.increase_distance_meters.is_finite() || self.increase_distance_meters < 0.0 {
            return Err(TrafficOverrideError::InvalidConfiguration(format!(
                "increase_distance_meters must be non-negative, found {}",
                self.increase_distance_meters
            )));
        }
        self.congestion_range_group
            .validate()
            .map_err(TrafficOverrideError::InvalidConfiguration)
    }
}

impl TryFrom<&String> for TrafficOverrideConfig {
    type Error = TrafficOverrideError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: TrafficOverrideConfig = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TrafficOverrideError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TrafficOverrideError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TrafficOverrideError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TrafficOverrideError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(TrafficOverrideError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}
