use crate::model::{
    action::TrafficUpdateAction,
    analysis::{LowSpeedAnalysis, SpeedAnalysisResult},
    sample::SpeedSample,
};
use std::sync::Arc;
use tailback_core::model::{
    progress::{RouteLegProgress, RouteProgress, RouteProgressState},
    route::{
        IntersectionLane, LaneIndication, LegAnnotation, LegStep, ManeuverType, RoadClass, Route,
        RouteId, RouteLeg, StepIntersection,
    },
    CongestionNumericOverride, MapMatchedLocation,
};
use uom::si::f64::Velocity;
use uom::si::velocity::kilometer_per_hour;

pub const ROUTE_ID: &str = "mock-route";

pub fn kph(speed: f64) -> Velocity {
    Velocity::new::<kilometer_per_hour>(speed)
}

/// a single leg route shaped like a motorway drive:
///   - step 0: the maneuver that led onto the road, no intersections
///   - step 1: the current step, intersections at geometry 0, 3 and 4, plus
///     an optional motorway exit lane
///   - step 2: the upcoming step, first intersection at
///     `upcoming_step_first_intersection`
pub struct MockRoute {
    pub id: &'static str,
    pub congestion_numeric: Vec<Option<u8>>,
    pub freeflow_speed_kph: Option<f64>,
    pub segment_length_meters: f64,
    pub motorway: bool,
    pub first_step_maneuver: ManeuverType,
    pub exit_from_motorway_index: Option<usize>,
    pub upcoming_step_first_intersection: usize,
}

impl Default for MockRoute {
    fn default() -> Self {
        MockRoute {
            id: ROUTE_ID,
            congestion_numeric: vec![Some(70); 10],
            freeflow_speed_kph: Some(100.0),
            segment_length_meters: 350.0,
            motorway: true,
            first_step_maneuver: ManeuverType::Depart,
            exit_from_motorway_index: None,
            upcoming_step_first_intersection: 100,
        }
    }
}

impl MockRoute {
    pub fn with_congestion(congestion_numeric: &[u8]) -> MockRoute {
        MockRoute {
            congestion_numeric: congestion_numeric.iter().copied().map(Some).collect(),
            ..Default::default()
        }
    }

    pub fn build(&self) -> Arc<Route> {
        let segments = self.congestion_numeric.len();
        let annotation = LegAnnotation {
            distance: vec![self.segment_length_meters; segments],
            congestion_numeric: Some(self.congestion_numeric.clone()),
            freeflow_speed: self.freeflow_speed_kph.map(|f| vec![Some(f); segments]),
        };

        let mut entry = StepIntersection::new(0);
        if self.motorway {
            entry.classes.push(RoadClass::Motorway);
        }
        let mut intersections = vec![entry, StepIntersection::new(3), StepIntersection::new(4)];
        if let Some(exit_index) = self.exit_from_motorway_index {
            let mut exit = StepIntersection::new(exit_index);
            exit.lanes.push(IntersectionLane {
                indications: vec![LaneIndication::SlightRight],
                valid: true,
            });
            intersections.push(exit);
        }

        let steps = vec![
            LegStep::new(self.first_step_maneuver, vec![]),
            LegStep::new(ManeuverType::Continue, intersections),
            LegStep::new(
                ManeuverType::Arrive,
                vec![StepIntersection::new(self.upcoming_step_first_intersection)],
            ),
        ];
        let leg = RouteLeg::new(Some(annotation), steps);
        Arc::new(Route::new(RouteId::from(self.id), vec![leg]))
    }
}

/// progress on the first leg, traveling the current step of [`MockRoute`]
pub fn mock_leg_progress(geometry_index: usize) -> RouteLegProgress {
    RouteLegProgress::new(0, geometry_index, 1, 0)
}

pub fn tracking_progress(route: &Route, geometry_index: usize) -> RouteProgress {
    RouteProgress::new(
        route.id.clone(),
        RouteProgressState::Tracking,
        Some(mock_leg_progress(geometry_index)),
    )
}

pub fn mock_location(speed_kph: f64, elapsed_millis: u64) -> MapMatchedLocation {
    MapMatchedLocation::new(Some(kph(speed_kph)), elapsed_millis)
}

pub fn mock_sample(
    route: &Arc<Route>,
    geometry_index: usize,
    speed_kph: f64,
    elapsed_millis: u64,
) -> SpeedSample {
    let leg = route
        .leg(0)
        .expect("test invariant failed: mock route has one leg");
    let is_on_motorway = leg
        .step(1)
        .and_then(|s| s.intersection(0))
        .map(|i| i.is_motorway())
        .unwrap_or_default();
    SpeedSample {
        route: route.clone(),
        progress_state: RouteProgressState::Tracking,
        leg_progress: Some(mock_leg_progress(geometry_index)),
        current_speed: Some(kph(speed_kph)),
        free_flow_speed: leg.freeflow_speed_at(geometry_index),
        expected_congestion: leg.congestion_numeric_at(geometry_index),
        existing_override: None,
        is_on_motorway,
        elapsed_millis,
    }
}

/// an override on the first leg whose originals are read from the route
pub fn mock_override(
    route: &Route,
    start_index: usize,
    values: Vec<u8>,
) -> CongestionNumericOverride {
    let originals = route
        .leg(0)
        .map(|l| l.congestion_numeric())
        .unwrap_or_default();
    let length = values.len();
    CongestionNumericOverride {
        route_id: route.id.clone(),
        leg_index: 0,
        start_index,
        length,
        original_congestion_numeric: (start_index..start_index + length)
            .map(|i| originals.get(i).copied().flatten())
            .collect(),
        overridden_congestion_numeric: values.into_iter().map(Some).collect(),
        created_at_millis: 0,
    }
}

/// low speed at 40 km/h on a 100 km/h road, so congestion 60 is expected
pub fn mock_low_speed(route: &Arc<Route>, elapsed_millis: u64) -> SpeedAnalysisResult {
    SpeedAnalysisResult::LowSpeedDetected(LowSpeedAnalysis {
        expected_congestion: 60,
        leg_progress: mock_leg_progress(0),
        route: route.clone(),
        result_elapsed_millis: elapsed_millis,
    })
}

pub fn mock_decrease(
    route: &Arc<Route>,
    geometry_index: usize,
    speed_kph: f64,
) -> TrafficUpdateAction {
    TrafficUpdateAction::DecreaseTraffic {
        measured_speed: kph(speed_kph),
        leg_progress: mock_leg_progress(geometry_index),
        route: route.clone(),
        detected_at_millis: 0,
    }
}

pub fn mock_increase(
    route: &Arc<Route>,
    geometry_index: usize,
    expected_congestion: u8,
) -> TrafficUpdateAction {
    TrafficUpdateAction::IncreaseTraffic {
        route: route.clone(),
        leg_progress: mock_leg_progress(geometry_index),
        expected_congestion,
        detected_at_millis: 0,
    }
}
