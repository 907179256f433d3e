use std::ops::Range;
use tailback_core::model::{
    progress::RouteLegProgress,
    route::{LaneIndication, ManeuverType, Route},
};
use uom::si::f64::Length;
use uom::si::length::meter;

const MOTORWAY_EXIT_INDICATIONS: [LaneIndication; 2] =
    [LaneIndication::SlightRight, LaneIndication::SlightLeft];

/// finds the segments ahead of the vehicle that an override may cover.
///
/// the range starts at the segment being traveled and includes segments while
/// the distance accumulated before them is below `horizon`. it stops at the
/// first of:
///   - the first intersection of the upcoming step
///   - a motorway exit ahead in the current step
///   - the second intersection ahead when the current step follows an on-ramp
///
/// returns `None` when the leg or its annotations are missing or when no
/// segment qualifies.
pub fn find_segment_range(
    route: &Route,
    leg_progress: &RouteLegProgress,
    horizon: Length,
) -> Option<Range<usize>> {
    let leg = route.leg(leg_progress.leg_index)?;
    let start = leg_progress.geometry_index;
    let segment_count = leg.annotation.as_ref()?.congestion_numeric.as_ref()?.len();
    if start >= segment_count {
        return None;
    }

    let mut limit = segment_count;
    let upcoming_step_start = leg
        .step(leg_progress.upcoming_step_index())
        .and_then(|s| s.intersection(0))
        .map(|i| i.geometry_index)
        .filter(|geometry_index| *geometry_index > start);
    if let Some(end) = upcoming_step_start {
        limit = limit.min(end);
    }

    if let Some(step) = leg.step(leg_progress.step_index()) {
        let exit = step
            .intersections_after(start)
            .find(|i| i.has_lane_indication(&MOTORWAY_EXIT_INDICATIONS));
        if let Some(exit) = exit {
            limit = limit.min(exit.geometry_index);
        }

        let after_on_ramp = leg_progress
            .step_index()
            .checked_sub(1)
            .and_then(|previous| leg.step(previous))
            .map(|s| s.maneuver.maneuver_type == ManeuverType::OnRamp)
            .unwrap_or_default();
        if after_on_ramp {
            let mut ahead = step.intersections_after(start);
            let first = ahead.next();
            if let Some(end) = ahead.next().or(first) {
                limit = limit.min(end.geometry_index);
            }
        }
    }

    let mut end = start;
    let mut accumulated = Length::new::<meter>(0.0);
    while end < limit && accumulated < horizon {
        match leg.distance_at(end) {
            Some(distance) => accumulated += distance,
            None => {
                end += 1;
                break;
            }
        }
        end += 1;
    }

    if end > start {
        Some(start..end)
    } else {
        None
    }
}
