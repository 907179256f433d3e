use super::{LegAnnotation, LegStep};
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Velocity};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RouteLeg {
    #[serde(default)]
    pub annotation: Option<LegAnnotation>,
    #[serde(default)]
    pub steps: Vec<LegStep>,
}

impl RouteLeg {
    pub fn new(annotation: Option<LegAnnotation>, steps: Vec<LegStep>) -> RouteLeg {
        RouteLeg { annotation, steps }
    }

    pub fn step(&self, step_index: usize) -> Option<&LegStep> {
        self.steps.get(step_index)
    }

    pub fn congestion_numeric_at(&self, segment_index: usize) -> Option<u8> {
        self.annotation.as_ref()?.congestion_numeric_at(segment_index)
    }

    pub fn freeflow_speed_at(&self, segment_index: usize) -> Option<Velocity> {
        self.annotation.as_ref()?.freeflow_speed_at(segment_index)
    }

    pub fn distance_at(&self, segment_index: usize) -> Option<Length> {
        self.annotation.as_ref()?.distance_at(segment_index)
    }

    /// the congestion numeric annotation as delivered by the routing service,
    /// or an empty list when the leg was requested without traffic annotations.
    pub fn congestion_numeric(&self) -> Vec<Option<u8>> {
        self.annotation
            .as_ref()
            .and_then(|a| a.congestion_numeric.clone())
            .unwrap_or_default()
    }
}
