use super::TrafficUpdateActionScanner;
use crate::model::{action::TrafficUpdateAction, analysis::SpeedAnalysisResult};

/// clears a previous increase or decrease once the analysis no longer
/// supports it, so the next anomaly is evaluated from a clean state.
pub struct NoActionScanner {}

impl TrafficUpdateActionScanner for NoActionScanner {
    fn scan(
        &self,
        previous: &TrafficUpdateAction,
        result: &SpeedAnalysisResult,
    ) -> Option<TrafficUpdateAction> {
        let previous_applied = matches!(
            previous,
            TrafficUpdateAction::IncreaseTraffic { .. } | TrafficUpdateAction::DecreaseTraffic { .. }
        );
        let unsupported = match result {
            SpeedAnalysisResult::SpeedIsOk { .. }
            | SpeedAnalysisResult::SpeedMatchesCongestionLevel { .. }
            | SpeedAnalysisResult::SkippedAnalysis { .. }
            | SpeedAnalysisResult::FailedToAnalyze { .. } => true,
            SpeedAnalysisResult::HighSpeedDetected { .. }
            | SpeedAnalysisResult::LowSpeedDetected(_)
            | SpeedAnalysisResult::WrongFalsePositiveOverrideDetected { .. } => false,
        };
        if previous_applied && unsupported {
            Some(TrafficUpdateAction::NoAction)
        } else {
            None
        }
    }
}
