mod leg_annotation;
mod leg_step;
mod route;
mod route_id;
mod route_leg;
mod step_intersection;

pub use leg_annotation::LegAnnotation;
pub use leg_step::{LegStep, ManeuverType, StepManeuver};
pub use route::Route;
pub use route_id::RouteId;
pub use route_leg::RouteLeg;
pub use step_intersection::{IntersectionLane, LaneIndication, RoadClass, StepIntersection};
