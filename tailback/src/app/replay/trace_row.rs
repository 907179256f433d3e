use serde::{Deserialize, Serialize};
use tailback_core::{
    model::{
        progress::{RouteLegProgress, RouteProgress, RouteProgressState},
        route::RouteId,
        MapMatchedLocation,
    },
    util::SpeedUnit,
};

/// a row of a recorded drive: the route progress and the speed reported at
/// one location update.
///
/// CSV rows as currently defined:
/// elapsed_millis,state,leg_index,geometry_index,step_index,intersection_index,speed_kph
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TraceRow {
    pub elapsed_millis: u64,
    pub state: RouteProgressState,
    pub leg_index: Option<usize>,
    pub geometry_index: Option<usize>,
    pub step_index: Option<usize>,
    pub intersection_index: Option<usize>,
    pub speed_kph: Option<f64>,
}

impl TraceRow {
    /// progress along `route_id`. the leg progress is only known when both
    /// the leg and the geometry index were recorded.
    pub fn progress(&self, route_id: &RouteId) -> RouteProgress {
        let leg_progress = match (self.leg_index, self.geometry_index) {
            (Some(leg_index), Some(geometry_index)) => Some(RouteLegProgress::new(
                leg_index,
                geometry_index,
                self.step_index.unwrap_or_default(),
                self.intersection_index.unwrap_or_default(),
            )),
            _ => None,
        };
        RouteProgress::new(route_id.clone(), self.state, leg_progress)
    }

    pub fn location(&self) -> MapMatchedLocation {
        MapMatchedLocation::new(
            self.speed_kph
                .map(|s| SpeedUnit::KilometersPerHour.to_velocity(s)),
            self.elapsed_millis,
        )
    }
}
