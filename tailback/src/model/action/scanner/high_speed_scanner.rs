use super::TrafficUpdateActionScanner;
use crate::model::{action::TrafficUpdateAction, analysis::SpeedAnalysisResult};

/// high speed lowers the congestion ahead.
pub struct HighSpeedScanner {}

impl TrafficUpdateActionScanner for HighSpeedScanner {
    fn scan(
        &self,
        _previous: &TrafficUpdateAction,
        result: &SpeedAnalysisResult,
    ) -> Option<TrafficUpdateAction> {
        match result {
            SpeedAnalysisResult::HighSpeedDetected {
                current_speed,
                leg_progress,
                route,
                elapsed_millis,
            } => Some(TrafficUpdateAction::DecreaseTraffic {
                measured_speed: *current_speed,
                leg_progress: *leg_progress,
                route: route.clone(),
                detected_at_millis: *elapsed_millis,
            }),
            _ => None,
        }
    }
}
