use super::TrafficUpdateActionScanner;
use crate::model::{action::TrafficUpdateAction, analysis::SpeedAnalysisResult};

pub struct WrongFalsePositiveScanner {}

impl TrafficUpdateActionScanner for WrongFalsePositiveScanner {
    fn scan(
        &self,
        _previous: &TrafficUpdateAction,
        result: &SpeedAnalysisResult,
    ) -> Option<TrafficUpdateAction> {
        match result {
            SpeedAnalysisResult::WrongFalsePositiveOverrideDetected {
                congestion_override,
                route,
                ..
            } => Some(TrafficUpdateAction::RestoreTraffic {
                route: route.clone(),
                congestion_override: congestion_override.clone(),
            }),
            _ => None,
        }
    }
}
