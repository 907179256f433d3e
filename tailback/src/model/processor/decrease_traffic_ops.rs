use super::find_segment_range;
use crate::model::CongestionRangeGroup;
use tailback_core::model::{
    progress::RouteLegProgress, route::Route, CongestionNumericOverride,
};
use uom::si::f64::Length;

/// builds the override lowering congestion ahead of a vehicle observed
/// driving fast. `horizon` is the road the vehicle covers in the decrease
/// time horizon at its measured speed.
///
/// returns `None` when an override already covers the segment being traveled
/// or when every covered segment is already at a low level.
pub fn decrease_traffic(
    range_group: &CongestionRangeGroup,
    route: &Route,
    leg_progress: &RouteLegProgress,
    horizon: Length,
    originals: &[Option<u8>],
    existing: &[CongestionNumericOverride],
    detected_at_millis: u64,
) -> Option<CongestionNumericOverride> {
    let start = leg_progress.geometry_index;
    if let Some(covering) = existing
        .iter()
        .find(|o| o.contains(leg_progress.leg_index, start))
    {
        log::debug!(
            "segment {start} already overridden by {}, skipping decrease",
            covering.describe()
        );
        return None;
    }

    let range = find_segment_range(route, leg_progress, horizon)?;
    let original_congestion_numeric = originals.get(range.clone())?.to_vec();
    let overridden_congestion_numeric = original_congestion_numeric
        .iter()
        .map(|c| c.map(|c| range_group.decreased(c)))
        .collect::<Vec<_>>();
    if overridden_congestion_numeric == original_congestion_numeric {
        log::debug!(
            "congestion of segments [{}, {}) is already low",
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
