use crate::util::SpeedUnit;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Velocity};
use uom::si::length::meter;

/// per-segment annotations of a route leg. every array holds one entry per
/// segment, where segment `i` spans leg geometry indices `i` and `i + 1`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LegAnnotation {
    /// segment lengths in meters
    #[serde(default)]
    pub distance: Vec<f64>,
    /// congestion numeric in the range 0-100, null where the routing service
    /// has no traffic data for a segment.
    #[serde(default)]
    pub congestion_numeric: Option<Vec<Option<u8>>>,
    /// free-flow speed in kilometers per hour
    #[serde(default)]
    pub freeflow_speed: Option<Vec<Option<f64>>>,
}

impl LegAnnotation {
    pub fn congestion_numeric_at(&self, segment_index: usize) -> Option<u8> {
        self.congestion_numeric
            .as_ref()?
            .get(segment_index)
            .copied()
            .flatten()
    }

    pub fn freeflow_speed_at(&self, segment_index: usize) -> Option<Velocity> {
        let kph = self.freeflow_speed.as_ref()?.get(segment_index).copied()??;
        Some(SpeedUnit::KilometersPerHour.to_velocity(kph))
    }

    pub fn distance_at(&self, segment_index: usize) -> Option<Length> {
        self.distance
            .get(segment_index)
            .map(|d| Length::new::<meter>(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::LegAnnotation;
    use uom::si::velocity::kilometer_per_hour;

    #[test]
    fn test_missing_entries_are_none() {
        let annotation = LegAnnotation {
            distance: vec![10.0, 10.0],
            congestion_numeric: Some(vec![Some(20), None]),
            freeflow_speed: None,
        };
        assert_eq!(annotation.congestion_numeric_at(0), Some(20));
        assert_eq!(annotation.congestion_numeric_at(1), None);
        assert_eq!(annotation.congestion_numeric_at(2), None);
        assert!(annotation.freeflow_speed_at(0).is_none());
    }

    #[test]
    fn test_freeflow_speed_is_read_as_kilometers_per_hour() {
        let annotation = LegAnnotation {
            distance: vec![10.0],
            congestion_numeric: None,
            freeflow_speed: Some(vec![Some(100.0)]),
        };
        let speed = annotation
            .freeflow_speed_at(0)
            .expect("test invariant failed: free-flow speed should be present");
        assert!((speed.get::<kilometer_per_hour>() - 100.0).abs() < 1e-9);
    }
}
