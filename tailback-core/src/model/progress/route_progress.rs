use super::RouteLegProgress;
use crate::model::route::RouteId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteProgressState {
    Initialized,
    Tracking,
    Complete,
    OffRoute,
    Uncertain,
}

impl RouteProgressState {
    pub fn is_tracking(&self) -> bool {
        matches!(self, RouteProgressState::Tracking)
    }
}

impl Display for RouteProgressState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RouteProgressState::Initialized => "initialized",
            RouteProgressState::Tracking => "tracking",
            RouteProgressState::Complete => "complete",
            RouteProgressState::OffRoute => "off_route",
            RouteProgressState::Uncertain => "uncertain",
        };
        write!(f, "{s}")
    }
}

/// progress along the active route, published by the trip session once per
/// status update.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteProgress {
    pub route_id: RouteId,
    pub state: RouteProgressState,
    #[serde(default)]
    pub leg_progress: Option<RouteLegProgress>,
}

impl RouteProgress {
    pub fn new(
        route_id: RouteId,
        state: RouteProgressState,
        leg_progress: Option<RouteLegProgress>,
    ) -> RouteProgress {
        RouteProgress {
            route_id,
            state,
            leg_progress,
        }
    }
}
