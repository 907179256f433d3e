use crate::model::analysis::LowSpeedAnalysis;
use std::{sync::Arc, time::Duration};
use tailback_core::model::{progress::RouteLegProgress, route::Route, CongestionNumericOverride};
use uom::si::f64::Velocity;

/// the state carried between ticks by the scanner chain. the mutating
/// variants are applied to the congestion override store.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TrafficUpdateAction {
    #[default]
    NoAction,
    /// speed is high, lower the congestion ahead
    DecreaseTraffic {
        measured_speed: Velocity,
        leg_progress: RouteLegProgress,
        route: Arc<Route>,
        detected_at_millis: u64,
    },
    /// low speed observed but not yet for long enough
    AccumulatingLowSpeed {
        accumulation_start: Duration,
        time_until_update: Duration,
        latest_low_speed_result: LowSpeedAnalysis,
    },
    /// low speed confirmed over the whole window, raise the congestion ahead
    IncreaseTraffic {
        route: Arc<Route>,
        leg_progress: RouteLegProgress,
        expected_congestion: u8,
        detected_at_millis: u64,
    },
    /// undo an override contradicted by the observed speed
    RestoreTraffic {
        route: Arc<Route>,
        congestion_override: CongestionNumericOverride,
    },
}

impl TrafficUpdateAction {
    pub fn name(&self) -> &'static str {
        match self {
            TrafficUpdateAction::NoAction => "no_action",
            TrafficUpdateAction::DecreaseTraffic { .. } => "decrease_traffic",
            TrafficUpdateAction::AccumulatingLowSpeed { .. } => "accumulating_low_speed",
            TrafficUpdateAction::IncreaseTraffic { .. } => "increase_traffic",
            TrafficUpdateAction::RestoreTraffic { .. } => "restore_traffic",
        }
    }

    /// the route a mutating action refers to
    pub fn route(&self) -> Option<&Arc<Route>> {
        match self {
            TrafficUpdateAction::DecreaseTraffic { route, .. } => Some(route),
            TrafficUpdateAction::IncreaseTraffic { route, .. } => Some(route),
            TrafficUpdateAction::RestoreTraffic { route, .. } => Some(route),
            TrafficUpdateAction::NoAction | TrafficUpdateAction::AccumulatingLowSpeed { .. } => {
                None
            }
        }
    }

    pub fn is_mutating(&self) -> bool {
        self.route().is_some()
    }
}
