use std::sync::Arc;
use tailback_core::model::{
    progress::{RouteLegProgress, RouteProgressState},
    route::{Route, RouteId},
    CongestionNumericOverride,
};
use uom::si::f64::Velocity;

/// everything the speed analysis needs to know about one tick, normalized from
/// the location update, the route progress and the override store.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedSample {
    pub route: Arc<Route>,
    pub progress_state: RouteProgressState,
    pub leg_progress: Option<RouteLegProgress>,
    pub current_speed: Option<Velocity>,
    pub free_flow_speed: Option<Velocity>,
    /// congestion numeric annotation of the segment before any override
    pub expected_congestion: Option<u8>,
    /// override currently covering the segment
    pub existing_override: Option<CongestionNumericOverride>,
    pub is_on_motorway: bool,
    /// monotonic timestamp of the location update
    pub elapsed_millis: u64,
}

impl SpeedSample {
    pub fn route_id(&self) -> &RouteId {
        &self.route.id
    }

    pub fn leg_index(&self) -> Option<usize> {
        self.leg_progress.map(|p| p.leg_index)
    }

    pub fn geometry_index(&self) -> Option<usize> {
        self.leg_progress.map(|p| p.geometry_index)
    }
}
