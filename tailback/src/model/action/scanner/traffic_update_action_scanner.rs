use crate::model::{action::TrafficUpdateAction, analysis::SpeedAnalysisResult};

/// one link of the scanner chain. a scanner claims the analysis results it
/// knows how to reduce and returns `None` for everything else, deferring to
/// the next scanner.
pub trait TrafficUpdateActionScanner: Send + Sync {
    fn scan(
        &self,
        previous: &TrafficUpdateAction,
        result: &SpeedAnalysisResult,
    ) -> Option<TrafficUpdateAction>;
}
