use super::{LowSpeedAnalysis, SpeedAnalysisResult};
use crate::model::{config::TrafficOverrideConfig, sample::SpeedSample, CongestionRangeGroup};
use uom::si::f64::Velocity;
use uom::si::velocity::meter_per_second;

/// classifies a speed sample against the route's free-flow and congestion
/// annotations. pure: the same sample always yields the same result.
#[derive(Clone, Debug)]
pub struct SpeedAnalyzer {
    high_speed_threshold: Velocity,
    low_speed_ratio: f64,
    motorway_only_low_speed_rule: bool,
    false_positive_tolerance: f64,
    congestion_range_group: CongestionRangeGroup,
}

impl SpeedAnalyzer {
    pub fn new(
        high_speed_threshold: Velocity,
        low_speed_ratio: f64,
        motorway_only_low_speed_rule: bool,
        false_positive_tolerance: f64,
        congestion_range_group: CongestionRangeGroup,
    ) -> SpeedAnalyzer {
        SpeedAnalyzer {
            high_speed_threshold,
            low_speed_ratio,
            motorway_only_low_speed_rule,
            false_positive_tolerance,
            congestion_range_group,
        }
    }

    pub fn analyze(&self, sample: &SpeedSample) -> SpeedAnalysisResult {
        if !sample.progress_state.is_tracking() {
            return SpeedAnalysisResult::SkippedAnalysis {
                state: sample.progress_state,
            };
        }
        let (current_speed, leg_progress, free_flow_speed, expected_congestion) = match (
            sample.current_speed,
            sample.leg_progress,
            sample.free_flow_speed,
            sample.expected_congestion,
        ) {
            (Some(s), Some(p), Some(f), Some(c)) => (s, p, f, c),
            _ => {
                return SpeedAnalysisResult::FailedToAnalyze {
                    reason: missing_data_reason(sample),
                }
            }
        };
        let free_flow_mps = free_flow_speed.get::<meter_per_second>();
        if !free_flow_mps.is_finite() || free_flow_mps <= 0.0 {
            return SpeedAnalysisResult::FailedToAnalyze {
                reason: format!("free-flow speed must be positive, found {free_flow_mps} m/s"),
            };
        }
        let current_mps = current_speed.get::<meter_per_second>();
        if !current_mps.is_finite() || current_mps < 0.0 {
            return SpeedAnalysisResult::FailedToAnalyze {
                reason: format!("invalid current speed {current_mps} m/s"),
            };
        }

        let geometry_index = leg_progress.geometry_index;
        if let Some(congestion_override) = &sample.existing_override {
            if let Some(overridden) = congestion_override.overridden_value_at(geometry_index) {
                let predicted_ratio = 1.0 - f64::from(overridden) / 100.0;
                let speed_limit = free_flow_speed * (predicted_ratio + self.false_positive_tolerance);
                if congestion_override.raises_congestion_at(geometry_index)
                    && current_speed > speed_limit
                {
                    return SpeedAnalysisResult::WrongFalsePositiveOverrideDetected {
                        congestion_override: congestion_override.clone(),
                        leg_progress,
                        route: sample.route.clone(),
                        elapsed_millis: sample.elapsed_millis,
                    };
                }
            }
        }

        if current_speed >= self.high_speed_threshold {
            return SpeedAnalysisResult::HighSpeedDetected {
                current_speed,
                leg_progress,
                route: sample.route.clone(),
                elapsed_millis: sample.elapsed_millis,
            };
        }

        let speed_congestion = congestion_from_speed(current_mps, free_flow_mps);
        let low_speed_applies = sample.is_on_motorway || !self.motorway_only_low_speed_rule;
        if low_speed_applies && current_speed <= free_flow_speed * self.low_speed_ratio {
            return SpeedAnalysisResult::LowSpeedDetected(LowSpeedAnalysis {
                expected_congestion: speed_congestion,
                leg_progress,
                route: sample.route.clone(),
                result_elapsed_millis: sample.elapsed_millis,
            });
        }

        let effective_congestion = sample
            .existing_override
            .as_ref()
            .and_then(|o| o.overridden_value_at(geometry_index))
            .unwrap_or(expected_congestion);
        let speed_level = self.congestion_range_group.level(speed_congestion);
        let annotated_level = self.congestion_range_group.level(effective_congestion);
        if speed_level.is_some() && speed_level == annotated_level {
            SpeedAnalysisResult::SpeedMatchesCongestionLevel {
                current_speed,
                congestion: effective_congestion,
            }
        } else {
            SpeedAnalysisResult::SpeedIsOk {
                current_speed,
                congestion: effective_congestion,
            }
        }
    }
}

impl From<&TrafficOverrideConfig> for SpeedAnalyzer {
    fn from(config: &TrafficOverrideConfig) -> Self {
        SpeedAnalyzer::new(
            config.high_speed_threshold(),
            config.low_speed_ratio,
            config.motorway_only_low_speed_rule,
            config.false_positive_tolerance,
            config.congestion_range_group.clone(),
        )
    }
}

impl Default for SpeedAnalyzer {
    fn default() -> Self {
        SpeedAnalyzer::from(&TrafficOverrideConfig::default())
    }
}

/// congestion numeric implied by driving `current` on a road whose free-flow
/// speed is `free_flow`: 0 at free-flow speed or faster, 100 when stopped.
fn congestion_from_speed(current_mps: f64, free_flow_mps: f64) -> u8 {
    let ratio = current_mps / free_flow_mps;
    (100.0 * (1.0 - ratio)).round().clamp(0.0, 100.0) as u8
}

fn missing_data_reason(sample: &SpeedSample) -> String {
    let mut missing = vec![];
    if sample.current_speed.is_none() {
        missing.push("current speed");
    }
    if sample.leg_progress.is_none() {
        missing.push("leg progress");
    }
    if sample.free_flow_speed.is_none() {
        missing.push("free-flow speed annotation");
    }
    if sample.expected_congestion.is_none() {
        missing.push("congestion numeric annotation");
    }
    format!("missing {}", missing.join(", "))
}
