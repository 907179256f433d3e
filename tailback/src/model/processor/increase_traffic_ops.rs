use super::find_segment_range;
use tailback_core::model::{
    progress::RouteLegProgress, route::Route, CongestionNumericOverride,
};
use uom::si::f64::Length;

/// builds the override raising congestion ahead of a vehicle confirmed to be
/// driving slowly. each covered segment takes at least `expected_congestion`;
/// segments without traffic data take it as is.
///
/// returns `None` when the result would not change the congestion currently
/// in effect, so a repeated increase never stacks on its own override.
pub fn increase_traffic(
    route: &Route,
    leg_progress: &RouteLegProgress,
    expected_congestion: u8,
    horizon: Length,
    originals: &[Option<u8>],
    existing: &[CongestionNumericOverride],
    detected_at_millis: u64,
) -> Option<CongestionNumericOverride> {
    let range = find_segment_range(route, leg_progress, horizon)?;
    let original_congestion_numeric = originals.get(range.clone())?.to_vec();
    let overridden_congestion_numeric = original_congestion_numeric
        .iter()
        .map(|c| Some(c.map_or(expected_congestion, |c| c.max(expected_congestion))))
        .collect::<Vec<_>>();

    let effective = range
        .clone()
        .zip(original_congestion_numeric.iter())
        .map(|(geometry_index, original)| {
            existing
                .iter()
                .find(|o| o.contains(leg_progress.leg_index, geometry_index))
                .map(|o| o.overridden_value_at(geometry_index))
                .unwrap_or(*original)
        })
        .collect::<Vec<_>>();
    if overridden_congestion_numeric == effective {
        log::debug!(
            "congestion of segments [{}, {}) already at {expected_congestion} or above",
            range.start,
            range.end
        );
        return None;
    }

    Some(CongestionNumericOverride {
        route_id: route.id.clone(),
        leg_index: leg_progress.leg_index,
        start_index: range.start,
        length: range.len(),
        original_congestion_numeric,
        overridden_congestion_numeric,
        created_at_millis: detected_at_millis,
    })
}
