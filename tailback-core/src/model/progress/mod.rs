mod route_leg_progress;
mod route_progress;

pub use route_leg_progress::{RouteLegProgress, RouteStepProgress};
pub use route_progress::{RouteProgress, RouteProgressState};
