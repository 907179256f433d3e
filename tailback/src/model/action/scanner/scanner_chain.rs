use super::{
    FallbackPolicy, HighSpeedScanner, LowSpeedScanner, NoActionScanner,
    TrafficUpdateActionScanner, WrongFalsePositiveScanner,
};
use crate::model::{
    action::TrafficUpdateAction, analysis::SpeedAnalysisResult, config::TrafficOverrideConfig,
};

/// reduces a stream of analysis results into traffic update actions. the
/// first scanner claiming a result decides the next action; unclaimed results
/// fall back to the configured policy.
pub struct TrafficUpdateActionScannerChain {
    scanners: Vec<Box<dyn TrafficUpdateActionScanner>>,
    fallback: FallbackPolicy,
}

impl TrafficUpdateActionScannerChain {
    pub fn new(
        scanners: Vec<Box<dyn TrafficUpdateActionScanner>>,
        fallback: FallbackPolicy,
    ) -> TrafficUpdateActionScannerChain {
        TrafficUpdateActionScannerChain { scanners, fallback }
    }

    pub fn scan(
        &self,
        previous: &TrafficUpdateAction,
        result: &SpeedAnalysisResult,
    ) -> TrafficUpdateAction {
        self.scanners
            .iter()
            .find_map(|scanner| scanner.scan(previous, result))
            .unwrap_or_else(|| self.fallback.fallback(previous))
    }
}

impl From<&TrafficOverrideConfig> for TrafficUpdateActionScannerChain {
    fn from(config: &TrafficOverrideConfig) -> Self {
        TrafficUpdateActionScannerChain::new(
            vec![
                Box::new(HighSpeedScanner {}),
                Box::new(LowSpeedScanner::new(config.low_speed_window)),
                Box::new(WrongFalsePositiveScanner {}),
                Box::new(NoActionScanner {}),
            ],
            config.fallback_action,
        )
    }
}

impl Default for TrafficUpdateActionScannerChain {
    fn default() -> Self {
        TrafficUpdateActionScannerChain::from(&TrafficOverrideConfig::default())
    }
}
