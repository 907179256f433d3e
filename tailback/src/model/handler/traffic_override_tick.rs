use crate::model::{
    action::TrafficUpdateAction, analysis::SpeedAnalysisResult, store::StoreUpdate,
};

/// everything one location update produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficOverrideTick {
    pub analysis: SpeedAnalysisResult,
    /// the accumulator after this tick
    pub action: TrafficUpdateAction,
    pub update: StoreUpdate,
}
