use super::StepIntersection;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ManeuverType {
    Depart,
    Turn,
    Continue,
    NewName,
    Merge,
    OnRamp,
    OffRamp,
    Fork,
    EndOfRoad,
    Roundabout,
    Rotary,
    Notification,
    Arrive,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StepManeuver {
    #[serde(rename = "type", default)]
    pub maneuver_type: ManeuverType,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LegStep {
    #[serde(default)]
    pub maneuver: StepManeuver,
    #[serde(default)]
    pub intersections: Vec<StepIntersection>,
}

impl LegStep {
    pub fn new(maneuver_type: ManeuverType, intersections: Vec<StepIntersection>) -> LegStep {
        LegStep {
            maneuver: StepManeuver { maneuver_type },
            intersections,
        }
    }

    pub fn intersection(&self, intersection_index: usize) -> Option<&StepIntersection> {
        self.intersections.get(intersection_index)
    }

    /// intersections of this step located strictly after the given leg geometry index.
    pub fn intersections_after(
        &self,
        geometry_index: usize,
    ) -> impl Iterator<Item = &StepIntersection> + '_ {
        self.intersections
            .iter()
            .filter(move |i| i.geometry_index > geometry_index)
    }
}
