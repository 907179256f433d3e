use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoadClass {
    Motorway,
    Toll,
    Ferry,
    Restricted,
    Tunnel,
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LaneIndication {
    None,
    Uturn,
    SharpRight,
    Right,
    SlightRight,
    Straight,
    SlightLeft,
    Left,
    SharpLeft,
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct IntersectionLane {
    #[serde(default)]
    pub indications: Vec<LaneIndication>,
    #[serde(default)]
    pub valid: bool,
}

/// an intersection along a step. `geometry_index` is relative to the leg,
/// so it can be compared directly against annotation segment indices.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StepIntersection {
    pub geometry_index: usize,
    #[serde(default)]
    pub classes: Vec<RoadClass>,
    #[serde(default)]
    pub lanes: Vec<IntersectionLane>,
}

impl StepIntersection {
    pub fn new(geometry_index: usize) -> StepIntersection {
        StepIntersection {
            geometry_index,
            classes: vec![],
            lanes: vec![],
        }
    }

    pub fn is_motorway(&self) -> bool {
        self.classes.contains(&RoadClass::Motorway)
    }

    /// true if any lane at this intersection carries one of the indications.
    pub fn has_lane_indication(&self, indications: &[LaneIndication]) -> bool {
        self.lanes
            .iter()
            .flat_map(|lane| lane.indications.iter())
            .any(|i| indications.contains(i))
    }
}
