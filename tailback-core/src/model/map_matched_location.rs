use uom::si::f64::Velocity;

/// a map-matched location update, reduced to what the speed analysis reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapMatchedLocation {
    /// instantaneous speed, if the location provider reported one
    pub speed: Option<Velocity>,
    /// monotonic timestamp of the update. never wall-clock time: clock
    /// adjustments would break the low speed time window.
    pub elapsed_millis: u64,
}

impl MapMatchedLocation {
    pub fn new(speed: Option<Velocity>, elapsed_millis: u64) -> MapMatchedLocation {
        MapMatchedLocation {
            speed,
            elapsed_millis,
        }
    }
}
