use super::{RouteId, RouteLeg};
use serde::{Deserialize, Serialize};

/// a route as fetched from the routing service, reduced to the legs, steps and
/// annotations read by the traffic override pipeline.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Route {
    pub id: RouteId,
    pub legs: Vec<RouteLeg>,
}

impl Route {
    pub fn new(id: RouteId, legs: Vec<RouteLeg>) -> Route {
        Route { id, legs }
    }

    pub fn leg(&self, leg_index: usize) -> Option<&RouteLeg> {
        self.legs.get(leg_index)
    }

    pub fn congestion_numeric_by_leg(&self) -> Vec<Vec<Option<u8>>> {
        self.legs.iter().map(|leg| leg.congestion_numeric()).collect()
    }
}
