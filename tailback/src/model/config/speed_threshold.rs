use serde::{Deserialize, Serialize};
use tailback_core::util::SpeedUnit;
use uom::si::f64::Velocity;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpeedThreshold {
    pub speed: f64,
    pub speed_unit: SpeedUnit,
}

impl SpeedThreshold {
    pub fn new(speed: f64, speed_unit: SpeedUnit) -> SpeedThreshold {
        SpeedThreshold { speed, speed_unit }
    }

    pub fn velocity(&self) -> Velocity {
        self.speed_unit.to_velocity(self.speed)
    }
}
