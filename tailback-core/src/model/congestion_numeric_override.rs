use crate::model::route::RouteId;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// a locally computed replacement for a contiguous run of congestion numeric
/// values within one leg of a route. keeps the original values so the
/// override can be undone exactly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CongestionNumericOverride {
    pub route_id: RouteId,
    pub leg_index: usize,
    /// first overridden segment (leg geometry index)
    pub start_index: usize,
    /// number of overridden segments
    pub length: usize,
    /// values found in the route before the override was applied
    pub original_congestion_numeric: Vec<Option<u8>>,
    /// values in effect while the override is active
    pub overridden_congestion_numeric: Vec<Option<u8>>,
    /// monotonic timestamp of the sample that confirmed the override
    pub created_at_millis: u64,
}

impl CongestionNumericOverride {
    /// exclusive end of the overridden segments
    pub fn end_index(&self) -> usize {
        self.start_index + self.length
    }

    pub fn segment_range(&self) -> Range<usize> {
        self.start_index..self.end_index()
    }

    pub fn contains(&self, leg_index: usize, geometry_index: usize) -> bool {
        self.leg_index == leg_index && self.segment_range().contains(&geometry_index)
    }

    pub fn overlaps(&self, other: &CongestionNumericOverride) -> bool {
        self.route_id == other.route_id
            && self.leg_index == other.leg_index
            && self.start_index < other.end_index()
            && other.start_index < self.end_index()
    }

    pub fn overridden_value_at(&self, geometry_index: usize) -> Option<u8> {
        let offset = geometry_index.checked_sub(self.start_index)?;
        self.overridden_congestion_numeric
            .get(offset)
            .copied()
            .flatten()
    }

    pub fn original_value_at(&self, geometry_index: usize) -> Option<u8> {
        let offset = geometry_index.checked_sub(self.start_index)?;
        self.original_congestion_numeric
            .get(offset)
            .copied()
            .flatten()
    }

    /// true when the override reports more congestion than the route did at
    /// this segment, i.e. it predicts the vehicle to travel slower.
    pub fn raises_congestion_at(&self, geometry_index: usize) -> bool {
        match self.overridden_value_at(geometry_index) {
            None => false,
            Some(overridden) => match self.original_value_at(geometry_index) {
                None => true,
                Some(original) => overridden > original,
            },
        }
    }

    /// short description used in log messages.
    pub fn describe(&self) -> String {
        let values = self
            .overridden_congestion_numeric
            .iter()
            .map(|v| v.map(|c| c.to_string()).unwrap_or_else(|| String::from("-")))
            .join(",");
        format!(
            "route {} leg {} segments [{}, {}) -> [{}]",
            self.route_id,
            self.leg_index,
            self.start_index,
            self.end_index(),
            values
        )
    }
}
