use super::SpeedSample;
use crate::model::store::CongestionOverrideStore;
use std::sync::Arc;
use tailback_core::model::{progress::RouteProgress, route::Route, MapMatchedLocation};

/// normalizes one location update into a [`SpeedSample`].
///
/// returns `None` when the progress refers to a route other than `route`,
/// which happens while a route switch is propagating. any annotation that
/// cannot be found is left empty; the analyzer reports it as a failure.
pub fn extract_speed_sample(
    route: &Arc<Route>,
    progress: &RouteProgress,
    location: &MapMatchedLocation,
    store: &CongestionOverrideStore,
) -> Option<SpeedSample> {
    if progress.route_id != route.id {
        log::debug!(
            "ignoring progress of route {} while route {} is active",
            progress.route_id,
            route.id
        );
        return None;
    }
    let leg_progress = progress.leg_progress;
    let leg = leg_progress.and_then(|p| route.leg(p.leg_index));
    let (free_flow_speed, expected_congestion, is_on_motorway, existing_override) =
        match (leg, leg_progress) {
            (Some(leg), Some(p)) => {
                let is_on_motorway = leg
                    .step(p.step_index())
                    .and_then(|s| s.intersection(p.step_progress.intersection_index))
                    .map(|i| i.is_motorway())
                    .unwrap_or_default();
                (
                    leg.freeflow_speed_at(p.geometry_index),
                    leg.congestion_numeric_at(p.geometry_index),
                    is_on_motorway,
                    store.override_at(&route.id, p.leg_index, p.geometry_index),
                )
            }
            _ => (None, None, false, None),
        };

    Some(SpeedSample {
        route: route.clone(),
        progress_state: progress.state,
        leg_progress,
        current_speed: location.speed,
        free_flow_speed,
        expected_congestion,
        existing_override,
        is_on_motorway,
        elapsed_millis: location.elapsed_millis,
    })
}
