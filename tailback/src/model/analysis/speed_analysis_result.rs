use std::sync::Arc;
use tailback_core::model::{
    progress::{RouteLegProgress, RouteProgressState},
    route::Route,
    CongestionNumericOverride,
};
use uom::si::f64::Velocity;

/// a low speed observation. kept as its own type because the low speed
/// scanner carries the latest one inside its accumulation state.
#[derive(Clone, Debug, PartialEq)]
pub struct LowSpeedAnalysis {
    /// congestion level implied by the observed speed
    pub expected_congestion: u8,
    pub leg_progress: RouteLegProgress,
    pub route: Arc<Route>,
    pub result_elapsed_millis: u64,
}

/// outcome of analyzing one speed sample. exactly one variant applies per tick.
#[derive(Clone, Debug, PartialEq)]
pub enum SpeedAnalysisResult {
    /// navigation is not tracking the route (off-route, rerouting, complete...)
    SkippedAnalysis { state: RouteProgressState },
    /// the speed or the annotations needed to judge it are missing
    FailedToAnalyze { reason: String },
    HighSpeedDetected {
        current_speed: Velocity,
        leg_progress: RouteLegProgress,
        route: Arc<Route>,
        elapsed_millis: u64,
    },
    LowSpeedDetected(LowSpeedAnalysis),
    SpeedIsOk {
        current_speed: Velocity,
        congestion: u8,
    },
    SpeedMatchesCongestionLevel {
        current_speed: Velocity,
        congestion: u8,
    },
    /// an override raised congestion here but the vehicle is moving faster
    /// than that congestion allows
    WrongFalsePositiveOverrideDetected {
        congestion_override: CongestionNumericOverride,
        leg_progress: RouteLegProgress,
        route: Arc<Route>,
        elapsed_millis: u64,
    },
}

impl SpeedAnalysisResult {
    pub fn name(&self) -> &'static str {
        match self {
            SpeedAnalysisResult::SkippedAnalysis { .. } => "skipped_analysis",
            SpeedAnalysisResult::FailedToAnalyze { .. } => "failed_to_analyze",
            SpeedAnalysisResult::HighSpeedDetected { .. } => "high_speed_detected",
            SpeedAnalysisResult::LowSpeedDetected(_) => "low_speed_detected",
            SpeedAnalysisResult::SpeedIsOk { .. } => "speed_is_ok",
            SpeedAnalysisResult::SpeedMatchesCongestionLevel { .. } => {
                "speed_matches_congestion_level"
            }
            SpeedAnalysisResult::WrongFalsePositiveOverrideDetected { .. } => {
                "wrong_false_positive_override_detected"
            }
        }
    }
}
