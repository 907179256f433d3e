use crate::model::store::StoreUpdate;
use tailback_core::model::route::RouteId;

/// notified after a tick changed the effective congestion of a route, e.g. to
/// redraw the route line or recompute the ETA.
pub trait TrafficRefreshObserver: Send + Sync {
    fn on_traffic_refreshed(&self, route_id: &RouteId, update: &StoreUpdate);
}

impl<F> TrafficRefreshObserver for F
where
    F: Fn(&RouteId, &StoreUpdate) + Send + Sync,
{
    fn on_traffic_refreshed(&self, route_id: &RouteId, update: &StoreUpdate) {
        self(route_id, update)
    }
}
