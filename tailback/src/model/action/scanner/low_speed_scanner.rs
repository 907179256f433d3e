use super::TrafficUpdateActionScanner;
use crate::model::{action::TrafficUpdateAction, analysis::SpeedAnalysisResult};
use std::time::Duration;

/// confirms low speed only after it has been observed continuously for the
/// whole window, so a single dip (traffic light, turn) never raises
/// congestion. the window start travels with the accumulator; this scanner
/// holds no state of its own.
pub struct LowSpeedScanner {
    window: Duration,
}

impl LowSpeedScanner {
    pub const DEFAULT_WINDOW: Duration = Duration::from_secs(20);

    pub fn new(window: Duration) -> LowSpeedScanner {
        LowSpeedScanner { window }
    }
}

impl Default for LowSpeedScanner {
    fn default() -> Self {
        LowSpeedScanner::new(Self::DEFAULT_WINDOW)
    }
}

impl TrafficUpdateActionScanner for LowSpeedScanner {
    fn scan(
        &self,
        previous: &TrafficUpdateAction,
        result: &SpeedAnalysisResult,
    ) -> Option<TrafficUpdateAction> {
        let low_speed = match result {
            SpeedAnalysisResult::LowSpeedDetected(low_speed) => low_speed,
            _ => return None,
        };
        let now = Duration::from_millis(low_speed.result_elapsed_millis);
        let accumulation_start = match previous {
            TrafficUpdateAction::AccumulatingLowSpeed {
                accumulation_start,
                ..
            } => *accumulation_start,
            _ => now,
        };
        // a timestamp older than the start counts as no time elapsed
        let accumulated = now.saturating_sub(accumulation_start);
        match self.window.checked_sub(accumulated) {
            Some(time_until_update) if !time_until_update.is_zero() => {
                log::debug!(
                    "low speed for {}ms, {}ms until congestion update",
                    accumulated.as_millis(),
                    time_until_update.as_millis()
                );
                Some(TrafficUpdateAction::AccumulatingLowSpeed {
                    accumulation_start,
                    time_until_update,
                    latest_low_speed_result: low_speed.clone(),
                })
            }
            _ => Some(TrafficUpdateAction::IncreaseTraffic {
                route: low_speed.route.clone(),
                leg_progress: low_speed.leg_progress,
                expected_congestion: low_speed.expected_congestion,
                detected_at_millis: low_speed.result_elapsed_millis,
            }),
        }
    }
}
